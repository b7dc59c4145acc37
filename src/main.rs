mod bar;
mod config;
mod error;
mod fmp;
mod poller;
mod provider;
mod symbol;
mod utils;

use clap::Parser;
use config::Config;
use fmp::Fmp;
use log::{error, info};
use poller::Poller;
use std::{env, io, process};

/// Poll Financial Modeling Prep for 1 minute forex bars and print each new one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Forex pair to poll.
    #[arg(long, default_value = "EURUSD")]
    symbol: String,

    /// Seconds between polls.
    #[arg(long, default_value_t = 15)]
    interval: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // A .env file is optional, the real environment wins.
    dotenv::dotenv().ok();

    let _logger = utils::init_logging("info")?;

    let apikey = match config::resolve_api_key(|name| env::var(name).ok()) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    info!("starting up...");

    let config = Config::new(apikey, &args.symbol, args.interval);
    let interval = config.interval;
    let fmp = Fmp::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = poller::print_symbols(&fmp, &mut out) {
        error!("failed to write forex list: {}", e);
    }

    // Run until killed.
    let mut poller = Poller::new(&fmp.config.symbol);
    info!("watching {} on {}", poller.symbol(), fmp.config.uri);
    poller.run(&fmp, &mut out, interval, || true);

    Ok(())
}
