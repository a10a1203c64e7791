use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

const DAILY: &str = include_str!("../../lib_common/tests/fixtures/daily.json");

fn av_query() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_av-query"));
    for var in ["ALPHAVANTAGE_KEY", "ALPHAVANTAGE_BASE", "ALPHAVANTAGE_TZ", "ALPHAVANTAGE_LOG_DIR", "ALPHAVANTAGE_TIMEOUT"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn polish_file_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", DAILY)?;

    let output = Command::new(env!("CARGO_BIN_EXE_av-polish"))
        .arg("--input")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());

    let out: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(out["meta"]["symbol"], "MSFT");
    assert_eq!(out["data"]["2018-01-02T00:00:00.000Z"]["open"], "86.1250");
    Ok(())
}

#[test]
fn polish_stdin_in_zone_minified() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_av-polish"))
        .args(["--zone", "US/Eastern", "--minify"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("no stdin")?
        .write_all(br#"{"2018-01-02 16:00:00": {"4. close": "1"}}"#)?;

    let output = child.wait_with_output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?.trim(),
        r#"{"2018-01-02T21:00:00.000Z":{"close":"1"}}"#
    );
    Ok(())
}

#[test]
fn polish_rejects_invalid_dates() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, r#"{{"2018-02-30": 1}}"#)?;

    let output = Command::new(env!("CARGO_BIN_EXE_av-polish"))
        .arg("-i")
        .arg(tmp.path())
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("2018-02-30"));
    Ok(())
}

#[test]
fn query_url_needs_no_network() -> Result<(), Box<dyn std::error::Error>> {
    let output = av_query()
        .args(["--key", "demo", "url", "--function", "TIME_SERIES_DAILY", "--symbol", "MSFT", "--datatype", "json"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?.trim(),
        "https://www.alphavantage.co/query?apikey=demo&function=TIME_SERIES_DAILY&symbol=MSFT&datatype=json"
    );
    Ok(())
}

#[test]
fn query_url_works_without_key() -> Result<(), Box<dyn std::error::Error>> {
    let output = av_query()
        .args(["url", "--function", "SECTOR"])
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout)?.trim(),
        "https://www.alphavantage.co/query?function=SECTOR"
    );
    Ok(())
}

#[test]
fn query_without_key_fails() -> Result<(), Box<dyn std::error::Error>> {
    let output = av_query().arg("sector").output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("ALPHAVANTAGE_KEY"));
    Ok(())
}

#[test]
fn query_rejects_unknown_interval() -> Result<(), Box<dyn std::error::Error>> {
    let output = av_query()
        .args(["--key", "demo", "intraday", "MSFT", "--interval", "2min"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("unknown interval"));
    Ok(())
}
