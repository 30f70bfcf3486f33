//! Override values read from the environment.
//!
//! # Responsibilities
//! - Name the two reserved environment keys
//! - Snapshot host/port overrides at the moment of a rewrite
//! - Parse the port leniently
//!
//! # Design Decisions
//! - Snapshots are never cached; callers take a new one per rewrite
//! - A malformed port is treated as absent, never reported as an error,
//!   so a misconfigured port cannot block an otherwise valid open

use crate::env::Environment;
use crate::redirect::address::Address;
use crate::redirect::resolver::resolve;

/// Environment key holding the cache-proxy hostname.
pub const XCACHE_HOST_KEY: &str = "XCACHE_HOST";

/// Environment key holding the cache-proxy port.
pub const XCACHE_PORT_KEY: &str = "XCACHE_PORT";

/// Resolved (host, port) pair replacing the pseudo-hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideValues {
    /// Override hostname; never `Some("")`.
    pub host: Option<String>,
    /// Override port; never `Some(0)`.
    pub port: Option<u16>,
}

impl OverrideValues {
    /// Create override values, normalizing empty host and zero port to absent.
    pub fn new(host: Option<String>, port: Option<u16>) -> Self {
        Self {
            host: host.filter(|h| !h.is_empty()),
            port: port.filter(|p| *p > 0),
        }
    }

    /// Build from raw environment text.
    pub fn from_raw(host: Option<&str>, port: Option<&str>) -> Self {
        Self::new(host.map(str::to_string), port.and_then(parse_port))
    }

    /// Take a snapshot of the current environment.
    pub fn from_env(env: &dyn Environment) -> Self {
        let host = env.get(XCACHE_HOST_KEY);
        let port = env.get(XCACHE_PORT_KEY);
        Self::from_raw(host.as_deref(), port.as_deref())
    }

    /// True when a host override is configured, i.e. rewrites can happen.
    pub fn is_active(&self) -> bool {
        self.host.is_some()
    }

    /// Apply these overrides to an address.
    pub fn apply(&self, address: Address) -> Address {
        resolve(address, self.host.as_deref(), self.port)
    }
}

/// Parse a port override, returning `None` for anything unusable.
///
/// Surrounding whitespace is ignored. Zero, negative, out-of-range and
/// non-numeric text all yield `None`. Unlike C `stoi`, a numeric prefix
/// followed by other characters (`"1094abc"`) is not accepted.
pub fn parse_port(text: &str) -> Option<u16> {
    text.trim().parse::<u16>().ok().filter(|port| *port > 0)
}
