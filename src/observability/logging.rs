//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Honor `RUST_LOG`, falling back to a caller-supplied directive
//!
//! # Design Decisions
//! - Logs go to stderr so command output on stdout stays machine-readable
//! - A host that already installed a subscriber keeps it

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive for a given level, scoped to this crate.
pub fn default_directive(level: &str) -> String {
    format!("xcache_redirect={level}")
}

/// Install the global subscriber.
///
/// Returns an error if a subscriber is already set; callers may ignore it.
pub fn init_logging(fallback: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
