//! The facade callers hold
//!
//! [`LogWrapper`] speaks the external level numbering and exposes a plain,
//! a formatted (`f`) and a structured (`j`) variant of every leveled call.
//! Records at error severity and above carry the location of the facade's
//! direct caller; the rest do not.
//!
//! ```
//! use logwrapper_core::{LoggerContext, Lvl, Sink};
//!
//! let ctx = LoggerContext::new();
//! ctx.append_output(Sink::new(std::io::sink()));
//!
//! let log = ctx.wrapper();
//! log.set_level(Lvl::WARN);
//! log.info("dropped");
//! log.warnf(format_args!("disk at {}%", 91));
//! assert_eq!(log.level(), Lvl::WARN);
//! ```

use std::fmt;
use std::panic::Location;

use serde::Serialize;

use logwrapper_core_types::schema::{
    MSG_MARSHAL_ERROR_PREFIX, MSG_SET_HEADER_NOT_IMPLEMENTED, MSG_SET_PREFIX_NOT_IMPLEMENTED,
};
use logwrapper_core_types::{EngineLevel, Lvl};

use crate::context::LoggerContext;
use crate::errors::{write_error, LogErrorKind};
use crate::level_converter::{external_to_internal, internal_to_external};
use crate::sink::{FanOut, Sink};

/// Facade handle over a shared [`LoggerContext`]
///
/// Handles are cheap to clone. The prefix belongs to the handle; all other
/// state lives in the context.
#[derive(Debug, Clone)]
pub struct LogWrapper {
    ctx: LoggerContext,
    prefix: String,
}

impl LogWrapper {
    pub fn new(ctx: LoggerContext) -> Self {
        Self {
            ctx,
            prefix: String::new(),
        }
    }

    pub fn context(&self) -> &LoggerContext {
        &self.ctx
    }

    /// The combined writer over every registered sink
    pub fn output(&self) -> FanOut {
        self.ctx.output()
    }

    /// Register `sink` after the existing ones; nothing is replaced
    pub fn set_output(&self, sink: Sink) {
        self.ctx.append_output(sink);
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Store the prefix and report that prefixes are not rendered
    #[track_caller]
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
        not_implemented("set_prefix");
        self.emit(
            EngineLevel::Error,
            Some(Location::caller()),
            || MSG_SET_PREFIX_NOT_IMPLEMENTED,
        );
    }

    /// Headers are not supported; emits one error record saying so
    pub fn set_header(&self, _header: &str) {
        not_implemented("set_header");
        self.emit(EngineLevel::Error, None, || MSG_SET_HEADER_NOT_IMPLEMENTED);
    }

    pub fn level(&self) -> Lvl {
        internal_to_external(self.ctx.level())
    }

    /// Set the minimum level; unrecognized values mean info
    pub fn set_level(&self, level: Lvl) {
        self.ctx.set_level(external_to_internal(level));
    }

    // Print writes at debug level, like the other untagged output.

    pub fn print(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Debug, None, || message);
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Debug, None, || args);
    }

    pub fn printj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Debug, None, || json_message(value));
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Debug, None, || message);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Debug, None, || args);
    }

    pub fn debugj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Debug, None, || json_message(value));
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Info, None, || message);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Info, None, || args);
    }

    pub fn infoj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Info, None, || json_message(value));
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Warn, None, || message);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Warn, None, || args);
    }

    pub fn warnj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Warn, None, || json_message(value));
    }

    /// Log `err` at error level; `None` writes nothing
    #[track_caller]
    pub fn err<E: fmt::Display>(&self, err: Option<E>) {
        if let Some(err) = err {
            self.emit(EngineLevel::Error, Some(Location::caller()), || err);
        }
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Error, Some(Location::caller()), || message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Error, Some(Location::caller()), || args);
    }

    #[track_caller]
    pub fn errorj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Error, Some(Location::caller()), || {
            json_message(value)
        });
    }

    /// Log at fatal level, then terminate through the context's terminator
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Fatal, Some(Location::caller()), || message);
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Fatal, Some(Location::caller()), || args);
    }

    #[track_caller]
    pub fn fatalj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Fatal, Some(Location::caller()), || {
            json_message(value)
        });
    }

    /// Log at panic level, then panic through the context's terminator
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) {
        self.emit(EngineLevel::Panic, Some(Location::caller()), || message);
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) {
        self.emit(EngineLevel::Panic, Some(Location::caller()), || args);
    }

    #[track_caller]
    pub fn panicj<J: Serialize + ?Sized>(&self, value: &J) {
        self.emit(EngineLevel::Panic, Some(Location::caller()), || {
            json_message(value)
        });
    }

    /// Check the level, then build and write the record
    ///
    /// `message` runs only for enabled levels. A failed write is reported
    /// through diagnostics and otherwise absorbed.
    pub(crate) fn emit<M, F>(&self, level: EngineLevel, location: Option<&Location<'_>>, message: F)
    where
        M: fmt::Display,
        F: FnOnce() -> M,
    {
        let Some(mut event) = self.ctx.event(level) else {
            return;
        };
        if let Some(location) = location {
            event = event.caller(location.file(), location.line());
        }
        if let Err(err) = event.msg(message()) {
            let log_err = write_error(&err);
            tracing::warn!(
                level = level.as_str(),
                err.code = log_err.code(),
                err.message = log_err.message(),
                "record dropped by a failing sink"
            );
        }
    }
}

/// Encode `value` as JSON text for the message field
///
/// Encoding failures become a readable message instead of an error.
pub fn json_message<J: Serialize + ?Sized>(value: &J) -> String {
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                err.code = LogErrorKind::Serialization.code(),
                error = %err,
                "structured value could not be encoded"
            );
            format!("{}{}", MSG_MARSHAL_ERROR_PREFIX, err)
        }
    }
}

fn not_implemented(method: &'static str) {
    tracing::debug!(
        method,
        err.code = LogErrorKind::NotImplemented.code(),
        "method has no effect on output"
    );
}
