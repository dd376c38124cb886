//! Canonical schema constants for emitted records and diagnostics
//!
//! These constants keep the record layout and the self-reporting messages
//! consistent between the engine, the facade and the tests.

// Record keys, in emission order
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_CALLER: &str = "caller";
pub const FIELD_TIMESTAMP: &str = "@timestamp";
pub const FIELD_MESSAGE: &str = "message";

/// Timestamp pattern used when the configuration leaves it empty
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Level name a configuration falls back to when its level is unrecognized
pub const DEFAULT_LEVEL_NAME: &str = "info";

// Self-reporting messages for interface methods without an implementation
pub const MSG_SET_HEADER_NOT_IMPLEMENTED: &str = "SetHeader is not implemented";
pub const MSG_SET_PREFIX_NOT_IMPLEMENTED: &str = "SetPrefix is not implemented";

/// Prefix of the message substituted when a structured value cannot be encoded
pub const MSG_MARSHAL_ERROR_PREFIX: &str = "logwrapper, Marshal error : ";

// Canonical field keys for diagnostics
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SINK_COUNT: &str = "sink_count";
pub const FIELD_PATH: &str = "path";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
