//! # `av-query`: Alpha Vantage Command-Line Client
//!
//! Fetches a time series or the sector rankings from Alpha Vantage and prints
//! the normalized JSON. The API key comes from `--key`, `ALPHAVANTAGE_KEY`
//! (a `.env` file is honoured) or a JSON5 configuration file.
//!
//! ## Usage
//!
//! ```bash
//! av-query daily MSFT --size full
//! av-query intraday MSFT --interval 5min --raw
//! av-query --config av.json5 sector
//! av-query url --function TIME_SERIES_WEEKLY --symbol IBM
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use lib_common::configs::config_av::{AvConfig, ConfigError};
use lib_common::loggers::loggerlocal::{LoggerLocal, LoggerLocalOptions};
use lib_common::markets::alphavantage::util::DEFAULT_ENDPOINT;
use lib_common::markets::alphavantage::{
    AlphaUtil, ApiCallAv, Function, Interval, OutputSize, Performance, TimeSeries,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Alpha Vantage query client.
#[derive(Parser, Debug)]
#[command(name = "av-query", version, about = "Query Alpha Vantage and print normalized JSON")]
struct Args {
    /// API key. Overrides the configuration file and the environment.
    #[arg(long, env = "ALPHAVANTAGE_KEY", hide_env_values = true)]
    key: Option<String>,

    /// JSON5 configuration file. Environment variables are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the response as sent, without normalization.
    #[arg(long)]
    raw: bool,

    /// Output minified JSON (without pretty-printing).
    #[arg(short, long)]
    minify: bool,

    /// Lowest log level shown on the console (0 silly .. 6 fatal).
    #[arg(short, long, default_value_t = 4)]
    verbosity: i64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Intraday bars.
    Intraday {
        /// Ticker symbol.
        symbol: String,
        /// Bar interval: 1min, 5min, 15min, 30min or 60min.
        #[arg(long, default_value = "1min")]
        interval: Interval,
        /// compact (latest 100) or full.
        #[arg(long, default_value = "compact")]
        size: OutputSize,
    },
    /// Daily bars.
    Daily {
        /// Ticker symbol.
        symbol: String,
        /// compact (latest 100) or full.
        #[arg(long, default_value = "compact")]
        size: OutputSize,
    },
    /// Daily bars with adjusted close, dividends and splits.
    DailyAdjusted {
        /// Ticker symbol.
        symbol: String,
        /// compact (latest 100) or full.
        #[arg(long, default_value = "compact")]
        size: OutputSize,
    },
    /// Weekly bars.
    Weekly {
        /// Ticker symbol.
        symbol: String,
    },
    /// Monthly bars.
    Monthly {
        /// Ticker symbol.
        symbol: String,
    },
    /// Sector performance rankings.
    Sector,
    /// Print a query URL without sending it.
    Url {
        /// `function=` value.
        #[arg(long)]
        function: Option<String>,
        /// `symbol=` value.
        #[arg(long)]
        symbol: Option<String>,
        /// `outputsize=` value.
        #[arg(long)]
        size: Option<String>,
        /// `datatype=` value.
        #[arg(long)]
        datatype: Option<String>,
        /// `interval=` value.
        #[arg(long)]
        interval: Option<String>,
    },
}

fn load_config(args: &Args) -> Result<AvConfig> {
    let mut config = match &args.config {
        Some(path) => AvConfig::from_file(path)?,
        None => AvConfig::from_lookup(|name| match (name, &args.key) {
            ("ALPHAVANTAGE_KEY", Some(key)) => Some(key.clone()),
            _ => std::env::var(name).ok(),
        })?,
    };
    if let Some(key) = &args.key {
        config.api_key = key.clone();
    }
    Ok(config)
}

/// Query base for `url`: the configured one, or the public endpoint without a key.
fn url_base(args: &Args) -> Result<String> {
    match load_config(args) {
        Ok(config) => Ok(config.query_base()),
        Err(e) if matches!(e.downcast_ref::<ConfigError>(), Some(ConfigError::MissingEnvVar(_))) => {
            Ok(DEFAULT_ENDPOINT.to_string())
        }
        Err(e) => Err(e),
    }
}

fn logger_for(config: &AvConfig, verbosity: i64) -> LoggerLocal {
    let mut options = LoggerLocalOptions::tty_from(verbosity);
    if let Some(dir) = &config.log_dir {
        options.use_file = Some((0..=6).collect());
        options.log_dir = Some(dir.clone());
    }
    LoggerLocal::new("av-query".to_string(), Some(options))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Command::Url { function, symbol, size, datatype, interval } = &args.command {
        let url = AlphaUtil::new(url_base(&args)?).url(
            function.as_deref(),
            symbol.as_deref(),
            size.as_deref(),
            datatype.as_deref(),
            interval.as_deref(),
        );
        println!("{}", url);
        return Ok(());
    }

    let config = load_config(&args)?;
    let logger = Arc::new(logger_for(&config, args.verbosity));
    let api_call = Arc::new(ApiCallAv::from_config(&config, Arc::clone(&logger))?);
    let series = TimeSeries::new(Arc::clone(&api_call));

    let url = match &args.command {
        Command::Url { .. } => unreachable!("handled above"),
        Command::Intraday { symbol, interval, size } => {
            series.url(Function::TimeSeriesIntraday, symbol, Some(*size), Some(*interval))
        }
        Command::Daily { symbol, size } => series.url(Function::TimeSeriesDaily, symbol, Some(*size), None),
        Command::DailyAdjusted { symbol, size } => {
            series.url(Function::TimeSeriesDailyAdjusted, symbol, Some(*size), None)
        }
        Command::Weekly { symbol } => series.url(Function::TimeSeriesWeekly, symbol, None, None),
        Command::Monthly { symbol } => series.url(Function::TimeSeriesMonthly, symbol, None, None),
        Command::Sector => Performance::new(Arc::clone(&api_call)).url(),
    };

    let data = if args.raw {
        api_call.fetch(&url).await?
    } else {
        api_call.fetch_polished(&url).await?
    };

    let rendered = if args.minify {
        serde_json::to_string(&data)?
    } else {
        serde_json::to_string_pretty(&data)?
    };
    println!("{}", rendered);

    logger.debug("Query completed", Some(serde_json::json!({"command": format!("{:?}", args.command)}))).await;
    Ok(())
}
