//! # `av-polish`: Offline Alpha Vantage Normalizer
//!
//! Reads an Alpha Vantage JSON response (from a file or stdin), renames the
//! labelled members to their short keys, rewrites date keys to ISO-8601 UTC
//! timestamps, and writes the result.
//!
//! ## Usage
//!
//! ```bash
//! av-polish --input daily.json --zone US/Eastern --output daily.clean.json
//! curl -s "$URL" | av-polish --minify
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;
use lib_common::markets::alphavantage::Polisher;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Normalizes an Alpha Vantage JSON response.
#[derive(Parser, Debug)]
#[command(
    name = "av-polish",
    version,
    about = "Normalize Alpha Vantage JSON keys and timestamps"
)]
struct Args {
    /// Input JSON file. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file. Writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// IANA zone the timestamp keys are expressed in.
    #[arg(short, long, default_value = "UTC", value_parser = parse_zone)]
    zone: Tz,

    /// Output minified JSON (without pretty-printing).
    #[arg(short, long)]
    minify: bool,
}

fn parse_zone(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>().map_err(|_| format!("unknown time zone {:?}", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = match &args.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    let raw: Value = serde_json::from_str(&content).context("Failed to parse JSON")?;
    let clean = Polisher::new(args.zone).polish(&raw)?;

    let rendered = if args.minify {
        serde_json::to_string(&clean)?
    } else {
        serde_json::to_string_pretty(&clean)?
    };

    match args.output {
        Some(path) => fs::write(&path, rendered).with_context(|| format!("Failed to write file: {:?}", path))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
