// Public library interface for daily-averages-relay
pub mod aggregators;
pub mod api;
pub mod cli_utils;
pub mod thingspeak;
pub mod utils;

#[cfg(test)]
mod test_support;
