use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

mod cli;
mod commands;

use cli::Cli;
use parcel_gateway::config;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(filter));

    let mut settings = config::init_config()?;
    if let Some(endpoint) = &cli.endpoint {
        settings.vendor.base_url = endpoint.to_string();
    }

    commands::run(cli, settings).await
}
