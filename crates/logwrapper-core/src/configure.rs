//! Configurator: wires engine settings and sinks from [`LogSettings`]
//!
//! Steps run in a fixed order. Level, time format, console sink and the
//! timestamp key are applied before the file sink is attempted, so a file
//! failure leaves them in place.

use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use logwrapper_core_types::schema::{DEFAULT_TIME_FORMAT, FIELD_TIMESTAMP};
use logwrapper_core_types::EngineLevel;

use crate::config::{file_target, LogSettings};
use crate::engine::{is_renderable_time_format, EngineState};
use crate::errors::{LogWrapperError, Result};
use crate::hooks::FileOpener;
use crate::sink::Sink;
use crate::{log_op_end, log_op_error, log_op_start};

pub(crate) fn run<S: LogSettings + ?Sized>(
    op: &'static str,
    state: &mut EngineState,
    settings: &S,
    opener: &dyn FileOpener,
) -> Result<()> {
    let start = Instant::now();
    log_op_start!(op);

    match apply(state, settings, opener) {
        Ok(()) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                sink_count = state.registry.len()
            );
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                op,
                &err,
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn apply<S: LogSettings + ?Sized>(
    state: &mut EngineState,
    settings: &S,
    opener: &dyn FileOpener,
) -> Result<()> {
    state.level = resolve_level(settings.log_level());
    state.time_format = resolve_time_format(settings.log_time_format());

    // Caller formatting and the UTC clock are the context's hooks; they
    // need no per-configuration state.

    if settings.log_console() {
        state.registry.append(Sink::console());
    }

    state.timestamp_field = FIELD_TIMESTAMP.to_string();

    if settings.log_file() {
        let target = file_target(settings.log_file_name(), settings.log_file_path());
        let sink = open_file_sink(&target, opener)?;
        state.registry.append(sink);
    }

    Ok(())
}

/// Minimum level for a configured name; unrecognized names mean info
pub fn resolve_level(name: &str) -> EngineLevel {
    match EngineLevel::from_str(name) {
        Ok(level) => level,
        Err(err) => {
            tracing::warn!(
                level = err.value(),
                fallback = EngineLevel::Info.as_str(),
                "unrecognized log level"
            );
            EngineLevel::Info
        }
    }
}

/// Time format for a configured pattern; empty or unrenderable means the default
pub fn resolve_time_format(pattern: &str) -> String {
    if pattern.is_empty() {
        return DEFAULT_TIME_FORMAT.to_string();
    }
    if !is_renderable_time_format(pattern) {
        tracing::warn!(
            pattern,
            fallback = DEFAULT_TIME_FORMAT,
            "unrenderable time format"
        );
        return DEFAULT_TIME_FORMAT.to_string();
    }
    pattern.to_string()
}

fn open_file_sink(target: &str, opener: &dyn FileOpener) -> Result<Sink> {
    let file = opener
        .open(Path::new(target))
        .map_err(|source| LogWrapperError::file_open(target, source))?;
    file.stat()
        .map_err(|source| LogWrapperError::file_stat(target, source))?;
    tracing::debug!(path = target, "file sink opened");
    Ok(Sink::labeled("file", file))
}
