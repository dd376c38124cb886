//! Core types shared across logwrapper crates
//!
//! This crate provides the foundational types used by the facade, the
//! engine and the error facility:
//!
//! - **Levels**: the external `Lvl` numbering callers speak and the
//!   `EngineLevel` enumeration the engine filters on
//! - **Schema constants**: record keys, canonical messages and the
//!   diagnostic field/event names

pub mod level;
pub mod schema;

pub use level::{EngineLevel, Lvl, ParseLevelError};
