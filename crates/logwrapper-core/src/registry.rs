//! Writer registry
//!
//! Append-only, ordered, no deduplication. The combined [`FanOut`] is
//! rebuilt on every append so it always matches the current membership.

use crate::sink::{FanOut, Sink};

#[derive(Debug, Clone, Default)]
pub struct WriterRegistry {
    sinks: Vec<Sink>,
    combined: FanOut,
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `sink` after the existing members and rebuild the combined writer
    pub fn append(&mut self, sink: Sink) {
        self.sinks.push(sink);
        self.combined = FanOut::new(&self.sinks);
    }

    /// The combined writer over all members
    pub fn combined(&self) -> FanOut {
        self.combined.clone()
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
