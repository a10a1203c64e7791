//! # Time Series Endpoints
//!
//! Thin wrappers over [`ApiCallAv`] for the stock time series functions.
//! Every call asks for `datatype=json` and returns the normalized tree:
//!
//! ```text
//! { "meta": { "information": .., "symbol": .., "updated": .., "size": .., "zone": .. },
//!   "data": { "2018-01-02T00:00:00.000Z": { "open": .., "high": .., "low": .., "close": .., "volume": .. } } }
//! ```

use crate::markets::alphavantage::apicall::{ApiCallAv, AvError};
use crate::markets::alphavantage::params::{Function, Interval, OutputSize};
use serde_json::Value;
use std::sync::Arc;

const JSON: &str = "json";

/// Client for the `TIME_SERIES_*` functions.
pub struct TimeSeries {
    api_call: Arc<ApiCallAv>,
}

impl TimeSeries {
    /// Creates a new `TimeSeries` client on a shared caller.
    pub fn new(api_call: Arc<ApiCallAv>) -> Self {
        Self { api_call }
    }

    /// Query URL for a series request. Exposed so callers can log or cache it.
    pub fn url(
        &self,
        function: Function,
        symbol: &str,
        size: Option<OutputSize>,
        interval: Option<Interval>,
    ) -> String {
        self.api_call.util().url(
            Some(function.as_str()),
            Some(symbol),
            size.as_ref().map(OutputSize::as_str),
            Some(JSON),
            interval.as_ref().map(Interval::as_str),
        )
    }

    async fn series(
        &self,
        function: Function,
        symbol: &str,
        size: Option<OutputSize>,
        interval: Option<Interval>,
    ) -> Result<Value, AvError> {
        let url = self.url(function, symbol, size, interval);
        self.api_call.fetch_polished(&url).await
    }

    /// Intraday bars. Only the 1min series has a rename entry for its
    /// `Time Series (..)` member; other intervals keep the upstream label.
    pub async fn intraday(&self, symbol: &str, interval: Interval, size: OutputSize) -> Result<Value, AvError> {
        self.series(Function::TimeSeriesIntraday, symbol, Some(size), Some(interval)).await
    }

    /// Daily bars.
    pub async fn daily(&self, symbol: &str, size: OutputSize) -> Result<Value, AvError> {
        self.series(Function::TimeSeriesDaily, symbol, Some(size), None).await
    }

    /// Daily bars with adjusted close, dividend amount and split coefficient.
    pub async fn daily_adjusted(&self, symbol: &str, size: OutputSize) -> Result<Value, AvError> {
        self.series(Function::TimeSeriesDailyAdjusted, symbol, Some(size), None).await
    }

    /// Weekly bars, full history.
    pub async fn weekly(&self, symbol: &str) -> Result<Value, AvError> {
        self.series(Function::TimeSeriesWeekly, symbol, None, None).await
    }

    /// Monthly bars, full history.
    pub async fn monthly(&self, symbol: &str) -> Result<Value, AvError> {
        self.series(Function::TimeSeriesMonthly, symbol, None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loggers::loggerlocal::LoggerLocal;
    use crate::markets::alphavantage::util::AlphaUtil;
    use std::time::Duration;

    fn series() -> TimeSeries {
        let util = AlphaUtil::new("https://www.alphavantage.co/query?apikey=demo&");
        let api = ApiCallAv::new(util, Duration::from_secs(1), Arc::new(LoggerLocal::silent("t"))).unwrap();
        TimeSeries::new(Arc::new(api))
    }

    #[test]
    fn intraday_url_carries_interval() {
        let url = series().url(Function::TimeSeriesIntraday, "MSFT", Some(OutputSize::Full), Some(Interval::Min5));
        assert_eq!(
            url,
            "https://www.alphavantage.co/query?apikey=demo&function=TIME_SERIES_INTRADAY&symbol=MSFT&outputsize=full&datatype=json&interval=5min"
        );
    }

    #[test]
    fn weekly_url_has_no_size() {
        let url = series().url(Function::TimeSeriesWeekly, "IBM", None, None);
        assert_eq!(
            url,
            "https://www.alphavantage.co/query?apikey=demo&function=TIME_SERIES_WEEKLY&symbol=IBM&datatype=json"
        );
    }
}
