//! Logger configuration
//!
//! The configurator only needs to *read* settings, so it accepts anything
//! implementing [`LogSettings`]. [`Config`] is the ready-made implementor,
//! deserializable from any serde format with camelCase keys.

use serde::{Deserialize, Serialize};

use logwrapper_core_types::schema::{DEFAULT_LEVEL_NAME, DEFAULT_TIME_FORMAT};

/// Read-only view of the settings the configurator consumes
pub trait LogSettings {
    /// Minimum level name; unrecognized names mean info
    fn log_level(&self) -> &str;

    fn log_console(&self) -> bool;

    fn log_file(&self) -> bool;

    fn log_file_name(&self) -> &str;

    /// Directory of the log file; empty means the working directory
    fn log_file_path(&self) -> &str {
        ""
    }

    /// strftime pattern for the timestamp field; empty means the default
    fn log_time_format(&self) -> &str;
}

/// Plain configuration value
///
/// # Example
///
/// ```
/// use logwrapper_core::Config;
///
/// let config: Config = serde_json::from_str(
///     r#"{"level":"warn","console":true,"file":true,"fileName":"app.log","filePath":"logs"}"#,
/// )
/// .unwrap();
/// assert_eq!(config.file_target(), "logs/app.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub level: String,
    pub console: bool,
    pub file: bool,
    pub file_name: String,
    pub file_path: String,
    #[serde(alias = "timeFormat")]
    pub time_field_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL_NAME.to_string(),
            console: false,
            file: false,
            file_name: String::new(),
            file_path: String::new(),
            time_field_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Path of the file sink: `filePath/fileName`, or just `fileName`
    pub fn file_target(&self) -> String {
        file_target(&self.file_name, &self.file_path)
    }
}

impl LogSettings for Config {
    fn log_level(&self) -> &str {
        &self.level
    }

    fn log_console(&self) -> bool {
        self.console
    }

    fn log_file(&self) -> bool {
        self.file
    }

    fn log_file_name(&self) -> &str {
        &self.file_name
    }

    fn log_file_path(&self) -> &str {
        &self.file_path
    }

    fn log_time_format(&self) -> &str {
        &self.time_field_format
    }
}

/// Join a directory and a file name with `/`, omitting an empty directory
pub fn file_target(file_name: &str, file_path: &str) -> String {
    if file_path.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", file_path, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_joins_directory() {
        assert_eq!(file_target("tester.log", "test"), "test/tester.log");
        assert_eq!(file_target("tester.log", ""), "tester.log");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level(), "info");
        assert!(!config.log_console());
        assert!(!config.log_file());
        assert_eq!(config.log_time_format(), DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"console":true}"#).unwrap();
        assert!(config.console);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_time_format_alias() {
        let config: Config = serde_json::from_str(r#"{"timeFormat":"%H:%M"}"#).unwrap();
        assert_eq!(config.time_field_format, "%H:%M");
    }
}
