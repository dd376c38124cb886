use std::fmt::{self, Write as _};
use std::sync::RwLockReadGuard;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, Serializer};

use super::EngineState;
use crate::context::Hooks;
use logwrapper_core_types::schema::{DEFAULT_TIME_FORMAT, FIELD_CALLER, FIELD_LEVEL, FIELD_MESSAGE};
use logwrapper_core_types::EngineLevel;

///
/// A record that passed the level check and is waiting for its message.
///
/// Holds the engine's read guard until the record is written, so settings
/// and sinks cannot change underneath a write in flight.
///
pub struct Event<'a> {
    state: RwLockReadGuard<'a, EngineState>,
    hooks: &'a Hooks,
    level: EngineLevel,
    caller: Option<String>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(
        state: RwLockReadGuard<'a, EngineState>,
        hooks: &'a Hooks,
        level: EngineLevel,
    ) -> Self {
        Self {
            state,
            hooks,
            level,
            caller: None,
        }
    }

    pub fn level(&self) -> EngineLevel {
        self.level
    }

    /// Attach the caller location, rendered through the context's formatter
    pub fn caller(mut self, file: &str, line: u32) -> Self {
        self.caller = Some(self.hooks.caller.format(file, line));
        self
    }

    ///
    /// Serialize the record, write it to every sink, then run the
    /// terminator for fatal and panic records.
    ///
    /// The write result is returned only when the terminator returns.
    ///
    pub fn msg(self, message: impl fmt::Display) -> std::io::Result<()> {
        let message = message.to_string();
        let written = self
            .serialize(&message)
            .and_then(|record| self.state.registry.combined().write_record(&record));

        let Event {
            state,
            hooks,
            level,
            ..
        } = self;
        drop(state);

        match level {
            EngineLevel::Fatal => hooks.terminator.fatal(&message),
            EngineLevel::Panic => hooks.terminator.panic(&message),
            _ => {}
        }
        written
    }

    /// Serialize into one JSON line: level, caller, timestamp, message.
    fn serialize(&self, message: &str) -> std::io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::new(&mut buffer);
        let mut map_serializer = serializer.serialize_map(None)?;

        if self.level != EngineLevel::NoLevel {
            map_serializer.serialize_entry(FIELD_LEVEL, self.level.as_str())?;
        }
        if let Some(caller) = &self.caller {
            map_serializer.serialize_entry(FIELD_CALLER, caller)?;
        }
        let timestamp = format_timestamp(&self.hooks.time.now(), &self.state.time_format);
        map_serializer.serialize_entry(&self.state.timestamp_field, &timestamp)?;
        if !message.is_empty() {
            map_serializer.serialize_entry(FIELD_MESSAGE, message)?;
        }

        map_serializer.end()?;
        buffer.push(b'\n');
        Ok(buffer)
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("level", &self.level)
            .field("caller", &self.caller)
            .finish()
    }
}

/// Render `time` with a strftime `pattern`
///
/// An empty pattern means the default. A pattern chrono cannot render falls
/// back to RFC 3339 with microseconds.
pub fn format_timestamp(time: &DateTime<Utc>, pattern: &str) -> String {
    let pattern = if pattern.is_empty() {
        DEFAULT_TIME_FORMAT
    } else {
        pattern
    };
    let mut rendered = String::new();
    match write!(rendered, "{}", time.format(pattern)) {
        Ok(()) => rendered,
        Err(_) => time.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

/// Whether chrono accepts every specifier in `pattern`
pub fn is_renderable_time_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
