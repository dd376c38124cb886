//! Diagnostics for the facade itself
//!
//! The facade reports its own lifecycle (configuration, fallbacks, failed
//! writes) through `tracing`, separately from the records it emits for its
//! callers. Nothing is printed unless the host installs a subscriber, either
//! its own or one from [`init`].
//!
//! - Single initialization point via `init(profile)`
//! - Structured macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use logwrapper_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
