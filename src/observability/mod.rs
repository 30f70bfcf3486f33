//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! redirect / config / plugin
//!     → tracing events (debug: url rewrites, info: published settings,
//!       warn: rejected writes and unusable overrides)
//!     → logging.rs subscriber (stderr, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; installing a subscriber is the
//!   binary's (or host's) choice

pub mod logging;
