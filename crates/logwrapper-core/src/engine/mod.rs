//! Record engine
//!
//! Level filtering and record serialization. The facade talks to the engine
//! in two phases: `LoggerContext::event` returns an [`Event`] only when the
//! level passes the minimum, and only then does the caller pay for formatting
//! its message.

mod console;
mod event;

pub use console::ConsoleWriter;
pub use event::{format_timestamp, is_renderable_time_format, Event};

use crate::registry::WriterRegistry;
use logwrapper_core_types::schema::DEFAULT_TIME_FORMAT;
use logwrapper_core_types::EngineLevel;

/// Timestamp key used before configuration renames it
pub const ENGINE_TIMESTAMP_FIELD: &str = "time";

/// Mutable engine settings plus the sinks records go to
#[derive(Debug, Clone)]
pub(crate) struct EngineState {
    pub(crate) level: EngineLevel,
    pub(crate) time_format: String,
    pub(crate) timestamp_field: String,
    pub(crate) registry: WriterRegistry,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            level: EngineLevel::Debug,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            timestamp_field: ENGINE_TIMESTAMP_FIELD.to_string(),
            registry: WriterRegistry::new(),
        }
    }
}
