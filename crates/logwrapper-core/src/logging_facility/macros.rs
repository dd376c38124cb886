//! Canonical diagnostics macros
//!
//! Every macro stamps `component`, `op` and `event` so captured diagnostics
//! can be matched without parsing messages.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use logwrapper_core::log_op_start;
/// log_op_start!("configure");
/// log_op_start!("configure", sink_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use logwrapper_core::log_op_end;
/// log_op_end!("configure", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is anything convertible into [`LogError`](crate::errors::LogError).
///
/// # Example
///
/// ```
/// # use logwrapper_core::log_op_error;
/// use logwrapper_core::errors::LogWrapperError;
///
/// let err = LogWrapperError::file_open("app.log", std::io::Error::other("denied"));
/// log_op_error!("configure", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let log_err: $crate::errors::LogError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?log_err.kind(),
            err.code = log_err.code(),
            err.message = log_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let log_err: $crate::errors::LogError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?log_err.kind(),
            err.code = log_err.code(),
            err.message = log_err.message(),
            $($field)*
        );
    }};
}
