//! # Alpha Vantage Key Table
//!
//! Alpha Vantage labels its JSON members with numbered or descriptive strings
//! (`"1. open"`, `"Time Series (Daily)"`, `"Rank B: 1 Day Performance"`).
//! This table maps every label the toolkit knows to a short stable key.
//! Several labels collapse onto the same key because the numbering differs
//! between endpoint families.

use static_init::dynamic;
use std::collections::HashMap;

/// Source label to canonical key, in upstream order.
pub const RENAMES: &[(&str, &str)] = &[
    ("Meta Data", "meta"),
    ("1. Information", "information"),
    ("Information", "information"),
    ("2. Symbol", "symbol"),
    ("3. Last Refreshed", "updated"),
    ("Last Refreshed", "updated"),
    ("4. Interval", "interval"),
    ("4. Output Size", "size"),
    ("5. Output Size", "size"),
    ("4. Time Zone", "zone"),
    ("5. Time Zone", "zone"),
    ("6. Time Zone", "zone"),
    ("Time Series (1min)", "data"),
    ("Time Series (Daily)", "data"),
    ("Weekly Time Series", "data"),
    ("Monthly Time Series", "data"),
    ("1. open", "open"),
    ("2. high", "high"),
    ("3. low", "low"),
    ("4. close", "close"),
    ("5. volume", "volume"),
    ("6. volume", "volume"),
    ("5. adjusted close", "adjusted"),
    ("7. dividend amount", "dividend"),
    ("8. split coefficient", "split"),
    ("Rank A: Real-Time Performance", "real"),
    ("Rank B: 1 Day Performance", "1day"),
    ("Rank C: 5 Day Performance", "5day"),
    ("Rank D: 1 Month Performance", "1month"),
    ("Rank E: 3 Month Performance", "3month"),
    ("Rank F: Year-to-Date (YTD) Performance", "ytd"),
    ("Rank G: 1 Year Performance", "1year"),
    ("Rank H: 3 Year Performance", "3year"),
    ("Rank I: 5 Year Performance", "5year"),
    ("Rank J: 10 Year Performance", "10year"),
];

#[dynamic]
static LOOKUP: HashMap<&'static str, &'static str> = RENAMES.iter().copied().collect();

/// The canonical key for an upstream label, if the label is known.
pub fn rename(key: &str) -> Option<&'static str> {
    LOOKUP.get(key).copied()
}

/// `rename(key)` or the key itself.
pub fn canonical(key: &str) -> &str {
    rename(key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_no_duplicate_sources() {
        let sources: HashSet<_> = RENAMES.iter().map(|(from, _)| from).collect();
        assert_eq!(sources.len(), RENAMES.len());
        assert_eq!(LOOKUP.len(), RENAMES.len());
    }

    #[test]
    fn targets_are_not_sources() {
        // Renamed output must never be renamed again.
        for (_, to) in RENAMES {
            assert_eq!(rename(to), None, "{to} is also a source label");
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(rename("1. open"), Some("open"));
        assert_eq!(rename("1. Open"), None);
        assert_eq!(rename(" 1. open"), None);
        assert_eq!(canonical("Rank J: 10 Year Performance"), "10year");
        assert_eq!(canonical("Energy"), "Energy");
    }
}
