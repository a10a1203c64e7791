use super::logrecord::{level_name, Logrecord};
use chrono::Local;
use colored::*;
use glob::glob;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// All levels, silly (0) through fatal (6).
const ALL_LEVELS: [i64; 7] = [6, 5, 4, 3, 2, 1, 0];

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
/// # Logger Local Options
///
/// Controls where and how log messages are output.
pub struct LoggerLocalOptions {
    /// A list of log levels that should be printed to the TTY (stderr).
    pub use_tty: Option<Vec<i64>>,
    /// A list of log levels that should be written to a log file.
    pub use_file: Option<Vec<i64>>,
    /// The directory where log files should be stored. Defaults to `./logs`.
    pub log_dir: Option<PathBuf>,
}

impl LoggerLocalOptions {
    /// TTY output for `min_level` and above, no file output.
    pub fn tty_from(min_level: i64) -> Self {
        Self {
            use_tty: Some(ALL_LEVELS.iter().copied().filter(|l| *l >= min_level).collect()),
            use_file: None,
            log_dir: None,
        }
    }
}

/// # Logger Local
///
/// A small local logger with coloured TTY output and an append-only log file.
/// Shared between API callers behind an `Arc`.
pub struct LoggerLocal {
    /// The name of the application associated with this logger instance.
    app_name: String,
    /// Configuration options determining logging behavior.
    options: LoggerLocalOptions,
    /// The path to the currently active log file, if file logging is enabled.
    current_log_file: Option<PathBuf>,
}

impl LoggerLocal {
    /// Keeps only the newest `<app_name>-*.log` file in `log_dir`.
    ///
    /// File names embed a sortable timestamp, so lexical order is age order.
    fn rotate_logs(app_name: &str, log_dir: &Path) {
        let pattern = format!("{}/{}-*.log", log_dir.display(), app_name);
        let mut log_files: Vec<PathBuf> = match glob(&pattern) {
            Ok(paths) => paths.filter_map(Result::ok).collect(),
            Err(e) => {
                eprintln!("Invalid log rotation pattern {}: {}", pattern, e);
                return;
            }
        };

        log_files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        for old_file in log_files.iter().skip(1) {
            if let Err(e) = std::fs::remove_file(old_file) {
                eprintln!("Error deleting old log file {}: {}", old_file.display(), e);
            }
        }
    }

    /// Creates a new `LoggerLocal` instance.
    ///
    /// If file logging is enabled, the log directory is created, older log
    /// files are rotated away and a new timestamped file name is chosen.
    ///
    /// # Arguments
    /// * `app_name` - The name of the application using this logger.
    /// * `options` - Optional `LoggerLocalOptions`. If `None`, all levels go to the TTY only.
    pub fn new(app_name: String, options: Option<LoggerLocalOptions>) -> Self {
        let opts = options.unwrap_or_else(|| LoggerLocalOptions::tty_from(0));

        let mut logger = Self {
            app_name: app_name.clone(),
            options: opts,
            current_log_file: None,
        };

        if logger.options.use_file.is_some() {
            let log_base_dir = logger
                .options
                .log_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("logs"));

            if let Err(e) = std::fs::create_dir_all(&log_base_dir) {
                eprintln!("Error creating log directory {}: {}", log_base_dir.display(), e);
            }

            LoggerLocal::rotate_logs(&app_name, &log_base_dir);

            let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
            let current_log_filename = format!("{}-{}.log", app_name, timestamp);
            logger.current_log_file = Some(log_base_dir.join(current_log_filename));
        }

        logger
    }

    /// A logger that discards everything.
    pub fn silent(app_name: &str) -> Self {
        Self::new(app_name.to_string(), Some(LoggerLocalOptions::default()))
    }

    /// The file this logger appends to, if file output is enabled.
    pub fn log_file(&self) -> Option<&Path> {
        self.current_log_file.as_deref()
    }

    /// Builds the record for a message without emitting it.
    fn record(&self, log_level: i64, log_message: &str, log_extras: Option<Value>) -> Logrecord {
        let mut record = Logrecord::default();
        record.app.name = self.app_name.clone();
        record.loglevel = log_level;
        record.message.text = log_message.to_string();
        if let Some(extras) = log_extras {
            record.tags = extras;
        }
        record
    }

    /// Logs a message with a specified level to the enabled sinks.
    ///
    /// # Arguments
    /// * `log_level` - The numeric log level (0 for Silly, 6 for Fatal).
    /// * `log_message` - The main message string to be logged.
    /// * `log_extras` - Additional structured data to include in the log.
    pub async fn log(&self, log_level: i64, log_message: &str, log_extras: Option<Value>) {
        let record = self.record(log_level, log_message, log_extras);

        if let Some(tty_levels) = &self.options.use_tty {
            if tty_levels.contains(&log_level) {
                self.write_tty(&record);
            }
        }

        if let Some(file_levels) = &self.options.use_file {
            if file_levels.contains(&log_level) {
                self.write_file(&record);
            }
        }
    }

    fn write_tty(&self, record: &Logrecord) {
        let ts = record.rfc9557.as_str().truecolor(128, 128, 128);
        let app_name_colored = format!("[{}]", self.app_name).truecolor(128, 128, 128);
        let text = record.message.text.as_str();

        let colored_message = match record.loglevel {
            6 => text.bright_white().on_bright_red(),
            5 => text.bright_red(),
            4 => text.bright_yellow(),
            3 => text.bright_green(),
            2 => text.bright_white(),
            1 => text.bright_cyan(),
            _ => text.blue(),
        };

        eprintln!("{}{}\n{}", ts, app_name_colored, colored_message);
        if record.has_tags() {
            if let Ok(tags_str) = serde_json::to_string(&record.tags) {
                eprintln!("{}{}{}", ts, app_name_colored, tags_str.truecolor(128, 128, 128));
            }
        }
    }

    fn write_file(&self, record: &Logrecord) {
        let Some(log_file_path) = &self.current_log_file else {
            return;
        };

        let mut line = format!(
            "{} [{}] {} {}\n",
            record.rfc9557,
            self.app_name,
            level_name(record.loglevel),
            record.message.text
        );
        if record.has_tags() {
            if let Ok(tags_str) = serde_json::to_string(&record.tags) {
                line.push_str(&tags_str);
                line.push('\n');
            }
        }

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            eprintln!("Error writing log file {}: {}", log_file_path.display(), e);
        }
    }

    /// Logs at the "Silly" (0) level.
    pub async fn silly(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(0, log_message, log_extras).await;
    }

    /// Logs at the "Trace" (1) level.
    pub async fn trace(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(1, log_message, log_extras).await;
    }

    /// Logs at the "Debug" (2) level.
    pub async fn debug(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(2, log_message, log_extras).await;
    }

    /// Logs at the "Info" (3) level.
    pub async fn info(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(3, log_message, log_extras).await;
    }

    /// Logs at the "Warn" (4) level.
    pub async fn warn(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(4, log_message, log_extras).await;
    }

    /// Logs at the "Error" (5) level.
    pub async fn error(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(5, log_message, log_extras).await;
    }

    /// Logs at the "Fatal" (6) level.
    pub async fn fatal(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(6, log_message, log_extras).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_only(dir: &Path, levels: Vec<i64>) -> LoggerLocalOptions {
        LoggerLocalOptions {
            use_tty: None,
            use_file: Some(levels),
            log_dir: Some(dir.to_path_buf()),
        }
    }

    #[tokio::test]
    async fn writes_enabled_levels_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = LoggerLocal::new("avtest".into(), Some(file_only(dir.path(), vec![4, 5])));

        logger.warn("throttled", Some(serde_json::json!({"attempt": 1}))).await;
        logger.info("not written", None).await;
        logger.error("boom", None).await;

        let contents = std::fs::read_to_string(logger.log_file().unwrap()).unwrap();
        assert!(contents.contains("[avtest] WARN throttled"));
        assert!(contents.contains(r#"{"attempt":1}"#));
        assert!(contents.contains("[avtest] ERROR boom"));
        assert!(!contents.contains("not written"));
    }

    #[test]
    fn rotation_keeps_newest_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["avtest-20200101_000000.log", "avtest-20210101_000000.log", "other-20190101_000000.log"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }

        LoggerLocal::rotate_logs("avtest", dir.path());

        assert!(!dir.path().join("avtest-20200101_000000.log").exists());
        assert!(dir.path().join("avtest-20210101_000000.log").exists());
        assert!(dir.path().join("other-20190101_000000.log").exists());
    }

    #[test]
    fn silent_logger_has_no_file() {
        assert!(LoggerLocal::silent("quiet").log_file().is_none());
    }

    #[test]
    fn tty_from_filters_levels() {
        let opts = LoggerLocalOptions::tty_from(4);
        assert_eq!(opts.use_tty, Some(vec![6, 5, 4]));
    }
}
