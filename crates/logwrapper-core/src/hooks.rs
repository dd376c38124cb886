//! Injectable strategies used by a [`LoggerContext`](crate::LoggerContext)
//!
//! Each strategy is a narrow trait with a production default. Tests swap
//! them through [`LoggerContextBuilder`](crate::LoggerContextBuilder) to pin
//! the clock, fake caller paths, fail file opens on demand, or observe
//! fatal/panic termination without ending the test process.
//!
//! Closures implement the single-method traits directly:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use logwrapper_core::LoggerContext;
//!
//! let ctx = LoggerContext::builder()
//!     .time_source(|| Utc.with_ymd_and_hms(2008, 1, 8, 17, 5, 5).unwrap())
//!     .caller_formatter(|_file: &str, line: u32| format!("test.rs:{}", line))
//!     .build();
//! # let _ = ctx;
//! ```

use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Source of record timestamps
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Current wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl TimeSource for UtcClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Renders a caller location into the `caller` field
pub trait CallerFormatter: Send + Sync {
    fn format(&self, file: &str, line: u32) -> String;
}

/// Keeps the last four path segments, see [`crate::caller::shorten`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortCaller;

impl CallerFormatter for ShortCaller {
    fn format(&self, file: &str, line: u32) -> String {
        crate::caller::shorten(file, line)
    }
}

impl<F> CallerFormatter for F
where
    F: Fn(&str, u32) -> String + Send + Sync,
{
    fn format(&self, file: &str, line: u32) -> String {
        self(file, line)
    }
}

/// An opened log file
///
/// `stat` is checked once right after opening; a handle that cannot be
/// stat'ed is rejected before it becomes a sink.
pub trait LogFile: Write + Send {
    fn stat(&self) -> io::Result<()>;
}

impl LogFile for File {
    fn stat(&self) -> io::Result<()> {
        self.metadata().map(|_| ())
    }
}

/// Opens the file behind a file sink
pub trait FileOpener: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<Box<dyn LogFile>>;
}

/// Create-if-absent, append-only, write-only; mode 0644 on unix
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileOpener;

impl FileOpener for OsFileOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn LogFile>> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options.open(path)?;
        Ok(Box::new(file))
    }
}

impl<F> FileOpener for F
where
    F: Fn(&Path) -> io::Result<Box<dyn LogFile>> + Send + Sync,
{
    fn open(&self, path: &Path) -> io::Result<Box<dyn LogFile>> {
        self(path)
    }
}

/// Action taken after a fatal or panic record has been written
pub trait Terminator: Send + Sync {
    /// Called after a fatal record; expected not to return in production
    fn fatal(&self, message: &str);

    /// Called after a panic record; expected to unwind in production
    fn panic(&self, message: &str);
}

/// Exits with status 1 on fatal, panics with the message on panic
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn fatal(&self, _message: &str) {
        std::process::exit(1);
    }

    fn panic(&self, message: &str) {
        panic!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_closure_time_source() {
        let fixed = Utc.with_ymd_and_hms(2008, 1, 8, 17, 5, 5).unwrap();
        let source = move || fixed;
        assert_eq!(TimeSource::now(&source), fixed);
    }

    #[test]
    fn test_utc_clock_is_monotone_enough() {
        let before = Utc::now();
        let now = UtcClock.now();
        assert!(now >= before);
    }

    #[test]
    fn test_short_caller_delegates_to_shorten() {
        assert_eq!(ShortCaller.format("/a/b/c/d/e/f.rs", 9), "c/d/e/f.rs:9");
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_process_terminator_panics_with_message() {
        ProcessTerminator.panic("boom");
    }
}
