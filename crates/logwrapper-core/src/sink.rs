//! Output sinks and the fan-out writer
//!
//! A [`Sink`] is a shared handle to a byte writer. Cloning it shares the
//! underlying writer, so registering the same sink twice means the writer
//! sees every record twice.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::LogErrorKind;

/// Shared handle to a writer that receives whole records
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<dyn Write + Send>>,
    label: &'static str,
}

impl Sink {
    /// Wrap any writer
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::labeled("writer", writer)
    }

    /// Wrap a writer with a short label shown in `Debug` output
    pub fn labeled<W: Write + Send + 'static>(label: &'static str, writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
            label,
        }
    }

    /// Human-readable console sink on stdout
    pub fn console() -> Self {
        Self::labeled("console", crate::engine::ConsoleWriter::new(io::stdout()))
    }

    /// Write one complete record
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.lock().write_all(record)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    /// Whether both handles point at the same writer
    pub fn same_writer(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    // A writer that panicked mid-record is still usable for the next one.
    fn lock(&self) -> MutexGuard<'_, dyn Write + Send + 'static> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(
                sink = self.label,
                err.code = LogErrorKind::Internal.code(),
                "sink lock poisoned, recovering"
            );
            poisoned.into_inner()
        })
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("label", &self.label).finish()
    }
}

/// Writer forwarding every record to each member, in registration order
///
/// The member list is an immutable snapshot; appending to the registry
/// produces a new `FanOut` rather than mutating this one.
#[derive(Debug, Clone, Default)]
pub struct FanOut {
    members: Arc<Vec<Sink>>,
}

impl FanOut {
    pub(crate) fn new(members: &[Sink]) -> Self {
        Self {
            members: Arc::new(members.to_vec()),
        }
    }

    /// Write `record` to every member, stopping at the first failure
    ///
    /// Members after a failing one do not receive the record.
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        for sink in self.members.iter() {
            sink.write_record(record)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Sink] {
        &self.members
    }
}

impl Write for FanOut {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in self.members.iter() {
            sink.flush()?;
        }
        Ok(())
    }
}
