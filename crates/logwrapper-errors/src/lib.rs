//! Error handling for logwrapper
//!
//! Two layers, mirroring how errors are produced and how they are reported:
//!
//! - [`LogWrapperError`]: the error operations return. Carries the
//!   underlying `io::Error` for file sink failures so callers can inspect it.
//! - [`LogError`] / [`LogErrorKind`]: a flattened, cloneable error with a
//!   stable code, used when an error has to be written into diagnostics.

use logwrapper_core_types::ParseLevelError;
use std::io;
use thiserror::Error;

/// Result type alias using LogWrapperError
pub type Result<T> = std::result::Result<T, LogWrapperError>;

/// Errors returned by logwrapper operations
#[derive(Error, Debug)]
pub enum LogWrapperError {
    /// The file sink could not be opened
    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file sink opened but could not be stat'ed
    #[error("failed to stat log file {path}: {source}")]
    FileStat {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A level name was not recognized (strict parsing only)
    #[error("unrecognized level: {value}")]
    UnknownLevel { value: String },

    /// Configuration could not be read or is malformed
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl LogWrapperError {
    /// Build a file open error for `path`
    pub fn file_open(path: impl Into<String>, source: io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Build a file stat error for `path`
    pub fn file_stat(path: impl Into<String>, source: io::Error) -> Self {
        Self::FileStat {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error, for file sink failures
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            Self::FileOpen { source, .. } | Self::FileStat { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseLevelError> for LogWrapperError {
    fn from(err: ParseLevelError) -> Self {
        Self::UnknownLevel {
            value: err.value().to_string(),
        }
    }
}

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code usable in diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogErrorKind {
    InvalidInput,
    FileOpen,
    FileStat,
    /// A sink rejected a record
    Write,
    Serialization,
    NotImplemented,
    Internal,
}

impl LogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LogErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            LogErrorKind::FileOpen => "ERR_FILE_OPEN",
            LogErrorKind::FileStat => "ERR_FILE_STAT",
            LogErrorKind::Write => "ERR_WRITE",
            LogErrorKind::Serialization => "ERR_SERIALIZATION",
            LogErrorKind::NotImplemented => "ERR_NOT_IMPLEMENTED",
            LogErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct LogError {
    kind: LogErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl LogError {
    /// Create a new error with the specified kind
    pub fn new(kind: LogErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> LogErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for LogError {}

impl From<LogWrapperError> for LogError {
    fn from(err: LogWrapperError) -> Self {
        match err {
            LogWrapperError::FileOpen { path, source } => LogError::new(LogErrorKind::FileOpen)
                .with_path(path)
                .with_message(source.to_string()),
            LogWrapperError::FileStat { path, source } => LogError::new(LogErrorKind::FileStat)
                .with_path(path)
                .with_message(source.to_string()),
            LogWrapperError::UnknownLevel { value } => LogError::new(LogErrorKind::InvalidInput)
                .with_message(format!("unrecognized level: {}", value)),
            LogWrapperError::InvalidConfig { reason } => {
                LogError::new(LogErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

impl From<&LogWrapperError> for LogError {
    fn from(err: &LogWrapperError) -> Self {
        match err {
            LogWrapperError::FileOpen { path, source } => LogError::new(LogErrorKind::FileOpen)
                .with_path(path.clone())
                .with_message(source.to_string()),
            LogWrapperError::FileStat { path, source } => LogError::new(LogErrorKind::FileStat)
                .with_path(path.clone())
                .with_message(source.to_string()),
            other => LogError::new(LogErrorKind::InvalidInput).with_message(other.to_string()),
        }
    }
}

/// Build a write error for a sink that rejected a record
pub fn write_error(err: &io::Error) -> LogError {
    LogError::new(LogErrorKind::Write)
        .with_op("write")
        .with_message(err.to_string())
}
