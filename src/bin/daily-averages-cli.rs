use std::env;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dotenvy::dotenv;

use daily_averages_relay::aggregators::DailyAggregator;
use daily_averages_relay::cli_utils::formatting::{format_json, print_daily_averages, print_header};
use daily_averages_relay::thingspeak::ThingSpeakConfig;

#[derive(Parser, Debug)]
#[command(
    name = "daily-averages-cli",
    about = "Fetch a ThingSpeak channel once and print its daily averages"
)]
struct CliArgs {
    #[command(flatten)]
    thingspeak: ThingSpeakConfig,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let channel_id = args.thingspeak.channel_id.clone();
    let aggregator = DailyAggregator::from_config(args.thingspeak);

    let daily = match aggregator.daily_averages().await {
        Ok(daily) => daily,
        Err(e) => {
            eprintln!("\n{}: {:#}\n", "Error".red(), e);
            return Err(e);
        }
    };

    if args.json {
        println!("{}", format_json(&daily));
        return Ok(());
    }

    print_header(&format!("Daily averages for channel {}", channel_id));
    if daily.is_empty() {
        println!("{}", "No readings with a valid temperature".yellow());
    } else {
        print_daily_averages(&daily);
    }

    Ok(())
}
