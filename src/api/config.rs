use clap::Args;

pub const DEFAULT_PORT: u16 = 3001;

/// Settings for the HTTP listener
#[derive(Args, Debug, Clone)]
pub struct ApiConfig {
    /// Port to listen on
    #[clap(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ApiConfig {
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
