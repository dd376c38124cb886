use chrono::{DateTime, TimeZone, Utc};
use logwrapper_core::caller::shorten;
use logwrapper_core::hooks::{FileOpener, LogFile, OsFileOpener, Terminator};
use logwrapper_core::{Config, LoggerContext, Sink};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Pattern that renders the fixed test time as `2008-01-08T17:05:05`
#[allow(dead_code)]
pub const TEST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Writer remembering only the most recent write
#[derive(Clone, Default)]
pub struct LastWrite {
    output: Arc<Mutex<String>>,
}

#[allow(dead_code)]
impl LastWrite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }
}

impl Write for LastWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        *self.output.lock().unwrap() = String::from_utf8_lossy(buf).into_owned();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer keeping every record it receives
#[derive(Clone, Default)]
pub struct Capture {
    records: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.records
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that rejects every write
#[allow(dead_code)]
pub struct Broken;

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink broken"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Terminator that records instead of exiting or panicking
#[derive(Clone, Default)]
pub struct RecordingTerminator {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl RecordingTerminator {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Terminator for RecordingTerminator {
    fn fatal(&self, message: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(("fatal".to_string(), message.to_string()));
    }

    fn panic(&self, message: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(("panic".to_string(), message.to_string()));
    }
}

/// File handle whose stat always fails
#[allow(dead_code)]
pub struct UnstatableFile;

impl Write for UnstatableFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogFile for UnstatableFile {
    fn stat(&self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::InvalidInput))
    }
}

/// Fixed record time: 2008-01-08 17:05:05 UTC
#[allow(dead_code)]
pub fn mock_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 1, 8, 17, 5, 5).unwrap()
}

/// Caller formatter pinned to one deep path and line 73
#[allow(dead_code)]
pub fn mock_caller(_file: &str, _line: u32) -> String {
    shorten(
        "/Users/oto/Projects/microsena/logwrapper/loggerwrapper_test.go",
        73,
    )
}

/// Opener failing on the names `error` and `Stat error`, real otherwise
#[allow(dead_code)]
pub fn mock_opener(path: &Path) -> io::Result<Box<dyn LogFile>> {
    match path.to_str() {
        Some("error") => Err(io::Error::other("open file error")),
        Some("Stat error") => Ok(Box::new(UnstatableFile)),
        _ => OsFileOpener.open(path),
    }
}

/// Context with every hook mocked; returns the terminator for inspection
#[allow(dead_code)]
pub fn mock_context() -> (LoggerContext, RecordingTerminator) {
    let terminator = RecordingTerminator::default();
    let ctx = LoggerContext::builder()
        .time_source(mock_time)
        .caller_formatter(mock_caller)
        .file_opener(mock_opener)
        .terminator(terminator.clone())
        .build();
    (ctx, terminator)
}

/// Configuration at trace level with no sinks and the test time format
#[allow(dead_code)]
pub fn trace_config() -> Config {
    Config {
        level: "trace".to_string(),
        time_field_format: TEST_TIME_FORMAT.to_string(),
        ..Config::default()
    }
}

/// Mocked, configured context writing into a fresh [`LastWrite`]
#[allow(dead_code)]
pub fn last_write_context() -> (LoggerContext, LastWrite, RecordingTerminator) {
    let (ctx, terminator) = mock_context();
    ctx.configure(&trace_config()).unwrap();
    let writer = LastWrite::new();
    ctx.append_output(Sink::new(writer.clone()));
    (ctx, writer, terminator)
}
