//! Logger context: the shared engine state behind every facade handle
//!
//! A [`LoggerContext`] owns the engine settings and the writer registry
//! behind one reader/writer lock. Emitting a record takes the read guard;
//! configuration and output changes take the write guard. Cloning a
//! context is cheap and every clone sees the same state.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use logwrapper_core_types::EngineLevel;

use crate::config::LogSettings;
use crate::engine::{EngineState, Event};
use crate::errors::Result;
use crate::hooks::{
    CallerFormatter, FileOpener, OsFileOpener, ProcessTerminator, ShortCaller, Terminator,
    TimeSource, UtcClock,
};
use crate::sink::{FanOut, Sink};
use crate::wrapper::LogWrapper;

/// Strategies fixed at construction
pub(crate) struct Hooks {
    pub(crate) time: Box<dyn TimeSource>,
    pub(crate) caller: Box<dyn CallerFormatter>,
    pub(crate) opener: Box<dyn FileOpener>,
    pub(crate) terminator: Box<dyn Terminator>,
}

struct Inner {
    state: RwLock<EngineState>,
    hooks: Hooks,
}

/// Shared engine state plus the strategies used to emit records
#[derive(Clone)]
pub struct LoggerContext {
    inner: Arc<Inner>,
}

impl LoggerContext {
    /// Context with production strategies and an empty registry
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerContextBuilder {
        LoggerContextBuilder::default()
    }

    /// Apply `settings` onto the current state
    ///
    /// Sinks are appended to the ones already registered. A file sink
    /// failure returns early with the earlier settings already applied.
    ///
    /// # Errors
    ///
    /// Returns `FileOpen` or `FileStat` when the file sink cannot be set up.
    pub fn configure<S: LogSettings + ?Sized>(&self, settings: &S) -> Result<()> {
        let mut state = self.write_state();
        crate::configure::run("configure", &mut state, settings, &*self.inner.hooks.opener)
    }

    /// Build a fresh state from `settings` and swap it in on success
    ///
    /// Previously registered sinks are dropped. On failure the current
    /// state is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `FileOpen` or `FileStat` when the file sink cannot be set up.
    pub fn reconfigure<S: LogSettings + ?Sized>(&self, settings: &S) -> Result<()> {
        let mut fresh = EngineState::default();
        crate::configure::run("reconfigure", &mut fresh, settings, &*self.inner.hooks.opener)?;
        *self.write_state() = fresh;
        Ok(())
    }

    /// Current minimum level
    pub fn level(&self) -> EngineLevel {
        self.read_state().level
    }

    pub fn set_level(&self, level: EngineLevel) {
        self.write_state().level = level;
    }

    /// Whether a record at `level` would be emitted
    pub fn enabled(&self, level: EngineLevel) -> bool {
        level.passes(self.read_state().level)
    }

    /// Register another sink after the existing ones
    pub fn append_output(&self, sink: Sink) {
        self.write_state().registry.append(sink);
    }

    /// The combined writer over every registered sink
    pub fn output(&self) -> FanOut {
        self.read_state().registry.combined()
    }

    pub fn sink_count(&self) -> usize {
        self.read_state().registry.len()
    }

    pub fn time_format(&self) -> String {
        self.read_state().time_format.clone()
    }

    pub fn timestamp_field(&self) -> String {
        self.read_state().timestamp_field.clone()
    }

    /// First phase of emission: an [`Event`] if `level` is enabled
    ///
    /// The event holds the state read lock until `msg` consumes it.
    pub(crate) fn event(&self, level: EngineLevel) -> Option<Event<'_>> {
        let state = self.read_state();
        if !level.passes(state.level) {
            return None;
        }
        Some(Event::new(state, &self.inner.hooks, level))
    }

    /// A new facade handle over this context
    pub fn wrapper(&self) -> LogWrapper {
        LogWrapper::new(self.clone())
    }

    fn read_state(&self) -> RwLockReadGuard<'_, EngineState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("LoggerContext")
            .field("level", &state.level)
            .field("time_format", &state.time_format)
            .field("timestamp_field", &state.timestamp_field)
            .field("sinks", &state.registry.len())
            .finish()
    }
}

/// Builder for [`LoggerContext`] with overridable strategies
#[derive(Default)]
pub struct LoggerContextBuilder {
    time: Option<Box<dyn TimeSource>>,
    caller: Option<Box<dyn CallerFormatter>>,
    opener: Option<Box<dyn FileOpener>>,
    terminator: Option<Box<dyn Terminator>>,
}

impl LoggerContextBuilder {
    pub fn time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.time = Some(Box::new(source));
        self
    }

    pub fn caller_formatter(mut self, formatter: impl CallerFormatter + 'static) -> Self {
        self.caller = Some(Box::new(formatter));
        self
    }

    pub fn file_opener(mut self, opener: impl FileOpener + 'static) -> Self {
        self.opener = Some(Box::new(opener));
        self
    }

    pub fn terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    pub fn build(self) -> LoggerContext {
        let hooks = Hooks {
            time: self.time.unwrap_or_else(|| Box::new(UtcClock)),
            caller: self.caller.unwrap_or_else(|| Box::new(ShortCaller)),
            opener: self.opener.unwrap_or_else(|| Box::new(OsFileOpener)),
            terminator: self
                .terminator
                .unwrap_or_else(|| Box::new(ProcessTerminator)),
        };
        LoggerContext {
            inner: Arc::new(Inner {
                state: RwLock::new(EngineState::default()),
                hooks,
            }),
        }
    }
}

impl fmt::Debug for LoggerContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerContextBuilder")
            .field("time_source", &self.time.is_some())
            .field("caller_formatter", &self.caller.is_some())
            .field("file_opener", &self.opener.is_some())
            .field("terminator", &self.terminator.is_some())
            .finish()
    }
}
