//! Translation between external `Lvl` values and `EngineLevel`
//!
//! Both directions are total. Anything the table does not name collapses
//! onto info rather than failing, so a caller handing in a stray byte still
//! gets a working logger. Callers who want to know about the collapse use
//! [`try_external_to_internal`].

use logwrapper_core_types::{EngineLevel, Lvl};

/// Translate an external level into the engine's level
pub fn external_to_internal(level: Lvl) -> EngineLevel {
    try_external_to_internal(level).unwrap_or(EngineLevel::Info)
}

/// Translate an external level, returning `None` when it is not recognized
pub fn try_external_to_internal(level: Lvl) -> Option<EngineLevel> {
    match level {
        Lvl::DEBUG => Some(EngineLevel::Debug),
        Lvl::INFO => Some(EngineLevel::Info),
        Lvl::WARN => Some(EngineLevel::Warn),
        Lvl::ERROR => Some(EngineLevel::Error),
        Lvl::FATAL => Some(EngineLevel::Fatal),
        Lvl::PANIC => Some(EngineLevel::Panic),
        Lvl::OFF => Some(EngineLevel::Disabled),
        _ => None,
    }
}

/// Translate an engine level back into the external numbering
///
/// Trace and no-level have no external counterpart and read back as info.
pub fn internal_to_external(level: EngineLevel) -> Lvl {
    match level {
        EngineLevel::Debug => Lvl::DEBUG,
        EngineLevel::Warn => Lvl::WARN,
        EngineLevel::Error => Lvl::ERROR,
        EngineLevel::Fatal => Lvl::FATAL,
        EngineLevel::Panic => Lvl::PANIC,
        EngineLevel::Disabled => Lvl::OFF,
        EngineLevel::Trace | EngineLevel::Info | EngineLevel::NoLevel => Lvl::INFO,
    }
}

/// Translate a `log` crate level into the engine's level
pub fn from_log_level(level: log::Level) -> EngineLevel {
    match level {
        log::Level::Error => EngineLevel::Error,
        log::Level::Warn => EngineLevel::Warn,
        log::Level::Info => EngineLevel::Info,
        log::Level::Debug => EngineLevel::Debug,
        log::Level::Trace => EngineLevel::Trace,
    }
}

/// The most verbose `log` filter that still lets `minimum` through
///
/// Fatal and panic have no `log` equivalent; with either as the minimum
/// nothing the `log` facade can produce would pass.
pub fn to_log_filter(minimum: EngineLevel) -> log::LevelFilter {
    match minimum {
        EngineLevel::Trace => log::LevelFilter::Trace,
        EngineLevel::Debug => log::LevelFilter::Debug,
        EngineLevel::Info => log::LevelFilter::Info,
        EngineLevel::Warn => log::LevelFilter::Warn,
        EngineLevel::Error => log::LevelFilter::Error,
        EngineLevel::Fatal | EngineLevel::Panic | EngineLevel::NoLevel | EngineLevel::Disabled => {
            log::LevelFilter::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_levels_round_trip() {
        for lvl in Lvl::NAMED {
            assert_eq!(internal_to_external(external_to_internal(lvl)), lvl);
        }
    }

    #[test]
    fn test_off_maps_to_disabled() {
        assert_eq!(external_to_internal(Lvl::OFF), EngineLevel::Disabled);
        assert_eq!(internal_to_external(EngineLevel::Disabled), Lvl::OFF);
    }

    #[test]
    fn test_fatal_and_panic_cross_numbering() {
        assert_eq!(external_to_internal(Lvl(7)), EngineLevel::Fatal);
        assert_eq!(external_to_internal(Lvl(6)), EngineLevel::Panic);
    }

    #[test]
    fn test_out_of_range_falls_back_to_info() {
        assert_eq!(external_to_internal(Lvl(0)), EngineLevel::Info);
        assert_eq!(external_to_internal(Lvl(16)), EngineLevel::Info);
        assert_eq!(try_external_to_internal(Lvl(16)), None);
    }

    #[test]
    fn test_unnamed_engine_levels_read_back_as_info() {
        assert_eq!(internal_to_external(EngineLevel::Trace), Lvl::INFO);
        assert_eq!(internal_to_external(EngineLevel::NoLevel), Lvl::INFO);
    }

    #[test]
    fn test_log_filter_tracks_minimum() {
        assert_eq!(to_log_filter(EngineLevel::Warn), log::LevelFilter::Warn);
        assert_eq!(to_log_filter(EngineLevel::Fatal), log::LevelFilter::Off);
        assert_eq!(from_log_level(log::Level::Trace), EngineLevel::Trace);
    }
}
