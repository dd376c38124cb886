//! logwrapper core - structured logging facade
//!
//! This crate provides a single logger that fans JSON records out to any
//! number of sinks, including:
//! - Translation between the external `Lvl` numbering and the engine's levels
//! - Caller locations shortened to the last four path segments
//! - An append-only writer registry with a fan-out writer
//! - A configurator driven by [`LogSettings`]
//! - The [`LogWrapper`] facade, a process-wide handle and a `log` bridge
//!
//! # Example
//!
//! ```no_run
//! use logwrapper_core::Config;
//!
//! let config = Config {
//!     level: "debug".to_string(),
//!     console: true,
//!     ..Config::default()
//! };
//! let log = logwrapper_core::init(&config)?;
//! log.info("ready");
//! log.error("disk full");
//! # Ok::<(), logwrapper_core::errors::LogWrapperError>(())
//! ```

pub mod bridge;
pub mod caller;
pub mod config;
mod configure;
pub mod context;
pub mod engine;
pub mod global;
pub mod hooks;
pub mod level_converter;
pub mod logging_facility;
pub mod registry;
pub mod sink;
pub mod wrapper;

pub use logwrapper_core_types::schema;
pub use logwrapper_errors as errors;

// Re-export commonly used types
pub use bridge::install_log_bridge;
pub use config::{Config, LogSettings};
pub use configure::{resolve_level, resolve_time_format};
pub use context::{LoggerContext, LoggerContextBuilder};
pub use errors::{LogWrapperError, Result};
pub use global::{init, wrapper};
pub use logwrapper_core_types::{EngineLevel, Lvl};
pub use registry::WriterRegistry;
pub use sink::{FanOut, Sink};
pub use wrapper::LogWrapper;
