//! Typed query parameters for the endpoints this crate wraps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `function=` values used by the typed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Function {
    /// Intraday bars at a fixed interval.
    TimeSeriesIntraday,
    /// Daily bars.
    TimeSeriesDaily,
    /// Daily bars with adjusted close, dividend and split columns.
    TimeSeriesDailyAdjusted,
    /// Weekly bars.
    TimeSeriesWeekly,
    /// Monthly bars.
    TimeSeriesMonthly,
    /// Sector performance rankings.
    Sector,
}

impl Function {
    /// Every variant, in declaration order.
    pub const ALL: [Function; 6] = [
        Function::TimeSeriesIntraday,
        Function::TimeSeriesDaily,
        Function::TimeSeriesDailyAdjusted,
        Function::TimeSeriesWeekly,
        Function::TimeSeriesMonthly,
        Function::Sector,
    ];

    /// The literal query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Function::TimeSeriesIntraday => "TIME_SERIES_INTRADAY",
            Function::TimeSeriesDaily => "TIME_SERIES_DAILY",
            Function::TimeSeriesDailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
            Function::TimeSeriesWeekly => "TIME_SERIES_WEEKLY",
            Function::TimeSeriesMonthly => "TIME_SERIES_MONTHLY",
            Function::Sector => "SECTOR",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Function {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown function {:?}", s))
    }
}

/// `outputsize=`: the latest 100 points, or the full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Latest 100 data points.
    #[default]
    Compact,
    /// Full-length series.
    Full,
}

impl OutputSize {
    /// The literal query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            other => Err(format!("unknown output size {:?} (expected compact or full)", other)),
        }
    }
}

/// `interval=` for intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    /// One minute bars.
    #[default]
    #[serde(rename = "1min")]
    Min1,
    /// Five minute bars.
    #[serde(rename = "5min")]
    Min5,
    /// Fifteen minute bars.
    #[serde(rename = "15min")]
    Min15,
    /// Thirty minute bars.
    #[serde(rename = "30min")]
    Min30,
    /// Hourly bars.
    #[serde(rename = "60min")]
    Min60,
}

impl Interval {
    /// The literal query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Min1 => "1min",
            Interval::Min5 => "5min",
            Interval::Min15 => "15min",
            Interval::Min30 => "30min",
            Interval::Min60 => "60min",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Interval::Min1),
            "5min" => Ok(Interval::Min5),
            "15min" => Ok(Interval::Min15),
            "30min" => Ok(Interval::Min30),
            "60min" => Ok(Interval::Min60),
            other => Err(format!("unknown interval {:?} (expected 1min, 5min, 15min, 30min or 60min)", other)),
        }
    }
}
