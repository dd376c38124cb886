//! Level enumerations
//!
//! Two numbering schemes meet in this crate. Callers speak `Lvl`, a raw
//! byte where `DEBUG = 1` through `FATAL = 7` and any other value is legal
//! but unrecognized. The engine filters on `EngineLevel`, which runs from
//! `Trace (-1)` up to `Disabled (7)` and orders severities differently
//! (fatal sits below panic). Translation between the two lives in
//! `logwrapper_core::level_converter`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External level as seen by callers of the facade
///
/// Values outside `1..=7` are representable on purpose: callers may hand in
/// any byte, and the translator collapses those onto info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lvl(pub u8);

impl Lvl {
    pub const DEBUG: Lvl = Lvl(1);
    pub const INFO: Lvl = Lvl(2);
    pub const WARN: Lvl = Lvl(3);
    pub const ERROR: Lvl = Lvl(4);
    pub const OFF: Lvl = Lvl(5);
    pub const PANIC: Lvl = Lvl(6);
    pub const FATAL: Lvl = Lvl(7);

    /// Every named external level, in numeric order
    pub const NAMED: [Lvl; 7] = [
        Lvl::DEBUG,
        Lvl::INFO,
        Lvl::WARN,
        Lvl::ERROR,
        Lvl::OFF,
        Lvl::PANIC,
        Lvl::FATAL,
    ];

    /// Get the raw numeric value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this value is one of the seven named levels
    pub fn is_recognized(self) -> bool {
        self.name().is_some()
    }

    /// Get the level name, if the value is recognized
    pub fn name(self) -> Option<&'static str> {
        match self {
            Lvl::DEBUG => Some("DEBUG"),
            Lvl::INFO => Some("INFO"),
            Lvl::WARN => Some("WARN"),
            Lvl::ERROR => Some("ERROR"),
            Lvl::OFF => Some("OFF"),
            Lvl::PANIC => Some("PANIC"),
            Lvl::FATAL => Some("FATAL"),
            _ => None,
        }
    }
}

impl fmt::Display for Lvl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Lvl({})", self.0),
        }
    }
}

/// Level enumeration used by the engine for filtering and record output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineLevel {
    Trace = -1,
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
    /// Records carry no level field
    #[serde(rename = "")]
    NoLevel = 6,
    /// Suppresses everything when used as the minimum level
    Disabled = 7,
}

impl EngineLevel {
    /// Name written into the `level` field of a record
    pub fn as_str(self) -> &'static str {
        match self {
            EngineLevel::Trace => "trace",
            EngineLevel::Debug => "debug",
            EngineLevel::Info => "info",
            EngineLevel::Warn => "warn",
            EngineLevel::Error => "error",
            EngineLevel::Fatal => "fatal",
            EngineLevel::Panic => "panic",
            EngineLevel::NoLevel => "",
            EngineLevel::Disabled => "disabled",
        }
    }

    /// Numeric discriminant, `-1` for trace through `7` for disabled
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Whether a record at `self` passes a minimum level of `minimum`
    pub fn passes(self, minimum: EngineLevel) -> bool {
        minimum != EngineLevel::Disabled && self != EngineLevel::Disabled && self >= minimum
    }
}

impl fmt::Display for EngineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(EngineLevel::Trace),
            "debug" => Ok(EngineLevel::Debug),
            "info" => Ok(EngineLevel::Info),
            "warn" => Ok(EngineLevel::Warn),
            "error" => Ok(EngineLevel::Error),
            "fatal" => Ok(EngineLevel::Fatal),
            "panic" => Ok(EngineLevel::Panic),
            "disabled" => Ok(EngineLevel::Disabled),
            other => Err(ParseLevelError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error returned when a level name is not one the engine knows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    value: String,
}

impl ParseLevelError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level string: '{}'", self.value)
    }
}

impl std::error::Error for ParseLevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lvls_are_recognized() {
        for lvl in Lvl::NAMED {
            assert!(lvl.is_recognized(), "{:?} should be recognized", lvl);
        }
        assert!(!Lvl(0).is_recognized());
        assert!(!Lvl(16).is_recognized());
    }

    #[test]
    fn test_lvl_display() {
        assert_eq!(Lvl::WARN.to_string(), "WARN");
        assert_eq!(Lvl(16).to_string(), "Lvl(16)");
    }

    #[test]
    fn test_engine_level_ordering() {
        assert!(EngineLevel::Trace < EngineLevel::Debug);
        assert!(EngineLevel::Error < EngineLevel::Fatal);
        assert!(EngineLevel::Fatal < EngineLevel::Panic);
        assert!(EngineLevel::Panic < EngineLevel::Disabled);
    }

    #[test]
    fn test_passes_respects_minimum() {
        assert!(EngineLevel::Error.passes(EngineLevel::Info));
        assert!(EngineLevel::Info.passes(EngineLevel::Info));
        assert!(!EngineLevel::Debug.passes(EngineLevel::Info));
        assert!(!EngineLevel::Panic.passes(EngineLevel::Disabled));
        assert!(!EngineLevel::Disabled.passes(EngineLevel::Trace));
    }

    #[test]
    fn test_parse_known_names() {
        for level in [
            EngineLevel::Trace,
            EngineLevel::Debug,
            EngineLevel::Info,
            EngineLevel::Warn,
            EngineLevel::Error,
            EngineLevel::Fatal,
            EngineLevel::Panic,
            EngineLevel::Disabled,
        ] {
            assert_eq!(level.as_str().parse::<EngineLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        let err = "verbose".parse::<EngineLevel>().unwrap_err();
        assert_eq!(err.value(), "verbose");
        assert!("".parse::<EngineLevel>().is_err());
        assert!("INFO".parse::<EngineLevel>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&EngineLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let lvl: Lvl = serde_json::from_str("7").unwrap();
        assert_eq!(lvl, Lvl::FATAL);
    }
}
