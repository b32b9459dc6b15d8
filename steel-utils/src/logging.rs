//! Logger bootstrap.
//!
//! Library code logs through the `log` facade and `tracing` spans; this installs a
//! `tracing-subscriber` formatter and bridges `log` records into it.

use tracing_subscriber::EnvFilter;

/// The directive used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive`. Calling this twice is harmless,
/// the second call only reports that a subscriber already exists.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        log::debug!("Global tracing subscriber already installed");
        return;
    }

    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::warn!("Failed to bridge log records into tracing: {e}");
    }
}
