//! Process-wide logger
//!
//! One [`LoggerContext`] per process, created on the first [`init`]. Later
//! calls reconfigure that same context, replacing its sinks rather than
//! stacking new ones on top.

use std::sync::OnceLock;

use crate::config::LogSettings;
use crate::context::LoggerContext;
use crate::errors::Result;
use crate::wrapper::LogWrapper;

static GLOBAL: OnceLock<LoggerContext> = OnceLock::new();

/// Configure the process-wide logger and return a handle to it
///
/// # Errors
///
/// Returns `FileOpen` or `FileStat` when the file sink cannot be set up.
/// The global context then keeps whatever configuration it had before.
pub fn init<S: LogSettings + ?Sized>(settings: &S) -> Result<LogWrapper> {
    let ctx = GLOBAL.get_or_init(LoggerContext::new);
    ctx.reconfigure(settings)?;
    Ok(ctx.wrapper())
}

/// A handle to the process-wide logger, if [`init`] has been called
pub fn wrapper() -> Option<LogWrapper> {
    GLOBAL.get().map(LoggerContext::wrapper)
}

/// The process-wide context, if [`init`] has been called
pub fn context() -> Option<&'static LoggerContext> {
    GLOBAL.get()
}
