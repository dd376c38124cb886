//! Bridge from the `log` crate facade
//!
//! Libraries that log through `log::info!` and friends end up in the same
//! sinks as direct facade calls once [`install_log_bridge`] has run.

use std::io::Write;

use logwrapper_core_types::EngineLevel;

use crate::level_converter::{from_log_level, to_log_filter};
use crate::wrapper::LogWrapper;

impl log::Log for LogWrapper {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.context().enabled(from_log_level(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = from_log_level(record.level());
        let Some(mut event) = self.context().event(level) else {
            return;
        };
        if level >= EngineLevel::Error {
            if let (Some(file), Some(line)) = (record.file(), record.line()) {
                event = event.caller(file, line);
            }
        }
        if let Err(err) = event.msg(record.args()) {
            tracing::warn!(
                target_module = record.target(),
                error = %err,
                "bridged record dropped by a failing sink"
            );
        }
    }

    fn flush(&self) {
        if let Err(err) = self.output().flush() {
            tracing::warn!(error = %err, "flush failed");
        }
    }
}

/// Route the `log` facade into `wrapper`
///
/// The `log` max level follows the engine's level at the time of the call.
///
/// # Errors
///
/// Fails if a global `log` logger is already installed.
pub fn install_log_bridge(wrapper: LogWrapper) -> Result<(), log::SetLoggerError> {
    let filter = to_log_filter(wrapper.context().level());
    log::set_boxed_logger(Box::new(wrapper))?;
    log::set_max_level(filter);
    Ok(())
}
