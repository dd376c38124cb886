//! Diagnostics initialization
//!
//! Diagnostics always go to stderr so they never interleave with the
//! console sink on stdout.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable diagnostics at debug level
    Development,
    /// JSON diagnostics at info level
    Production,
    /// Bare registry; tests use `init_test_capture()` instead
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize diagnostics output
///
/// Only the first call has an effect. `RUST_LOG` overrides the profile's
/// default filter.
///
/// # Profiles
///
/// - **Development**: `logwrapper=debug`, human-readable
/// - **Production**: `logwrapper=info`, one JSON object per line
/// - **Test**: no output
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("logwrapper=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("logwrapper=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
