//! # Alpha Vantage Live Data Test
//!
//! Calls the real Alpha Vantage API through lib_common and checks that the
//! normalized payloads carry the expected keys. Needs `ALPHAVANTAGE_KEY`
//! (or a `.env` file) and network access, so it is a binary rather than a
//! `cargo test` target.

use anyhow::{bail, Result};
use clap::Parser;
use lib_common::configs::config_av::AvConfig;
use lib_common::loggers::loggerlocal::LoggerLocal;
use lib_common::markets::alphavantage::performance::missing_rankings;
use lib_common::markets::alphavantage::{ApiCallAv, OutputSize, Performance, TimeSeries};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "test_alphavantage", about = "Live Alpha Vantage smoke test")]
struct Args {
    /// Symbol used for the time series checks.
    #[arg(long, default_value = "MSFT")]
    symbol: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // // Statement: Load key and options from the environment / .env
    let config = AvConfig::from_env()?;
    let logger = Arc::new(LoggerLocal::new("av_live_test".to_string(), None));
    let api_call = Arc::new(ApiCallAv::from_config(&config, Arc::clone(&logger))?);

    println!("[*] Requesting sector performance...");
    let sector = Performance::new(Arc::clone(&api_call)).sector().await?;
    let missing = missing_rankings(&sector);
    if sector.get("meta").is_none() || !missing.is_empty() {
        bail!("sector payload incomplete, missing {:?}", missing);
    }
    println!("[SUCCESS] sector rankings present");

    println!("[*] Requesting daily series for {}...", args.symbol);
    let daily = TimeSeries::new(Arc::clone(&api_call))
        .daily(&args.symbol, OutputSize::Compact)
        .await?;
    let Some(bars) = daily.get("data").and_then(|d| d.as_object()) else {
        bail!("daily payload has no data member");
    };
    let Some((first_ts, first_bar)) = bars.iter().next() else {
        bail!("daily payload has no bars");
    };
    for column in ["open", "high", "low", "close", "volume"] {
        if first_bar.get(column).is_none() {
            bail!("bar {} lacks {}", first_ts, column);
        }
    }
    println!("[SUCCESS] {} bars, latest {}", bars.len(), first_ts);
    println!("{}", serde_json::to_string_pretty(&daily["meta"])?);

    Ok(())
}
