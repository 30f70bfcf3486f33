//! Redirect subsystem.
//!
//! # Data Flow
//! ```text
//! caller address text
//!     → address.rs (parse into components)
//!     → overrides.rs (snapshot XCACHE_HOST / XCACHE_PORT)
//!     → resolver.rs (rewrite if host == "xcache")
//!     → redirector.rs (serialize final address)
//!     → transport collaborator
//! ```
//!
//! # Design Decisions
//! - Overrides are read fresh on every call, never cached
//! - No error escapes this subsystem; failures degrade to "no rewrite"
//! - Safe to call concurrently: only reads shared state

pub mod address;
pub mod overrides;
pub mod redirector;
pub mod resolver;

pub use address::{Address, AddressError};
pub use overrides::{parse_port, OverrideValues, XCACHE_HOST_KEY, XCACHE_PORT_KEY};
pub use redirector::Redirector;
pub use resolver::{is_pseudo_host, resolve, XCACHE_PSEUDO_HOST};
