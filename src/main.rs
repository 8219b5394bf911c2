//! Moneypool main entry point

use anyhow::Context;
use clap::Parser;
use moneypool_api::start_server;
use moneypool_client::HttpPoolSource;
use moneypool_config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "moneypool")]
#[command(version = "0.1.0")]
#[command(about = "A small web display for shared money pools", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Err(e).context(format!("Failed to load configuration from {}", args.config.display()));
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level)).init();

    log::info!("Config loaded: api endpoint={}", config.api.endpoint);
    if config.api.key.is_empty() {
        log::warn!("api.key is empty, the pool API will likely reject requests");
    }
    if config.payment.link.is_empty() {
        log::warn!("payment.link is empty, open pools will show no payment link");
    }

    let source = HttpPoolSource::new(&config.api).context("Failed to create pool API client")?;

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, Arc::new(source)))?;

    Ok(())
}
