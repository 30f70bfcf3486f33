//! Pseudo-hostname rewrite.
//!
//! # Responsibilities
//! - Recognize the reserved `xcache` hostname (exact, case-sensitive)
//! - Substitute the override host, and the override port when positive
//!
//! # Design Decisions
//! - Pure function: output depends only on its three inputs
//! - Never fails; anything that cannot be applied leaves the address as is
//! - Idempotent: a rewritten address no longer carries the pseudo-host

use std::net::Ipv6Addr;

use crate::redirect::address::Address;

/// Reserved hostname meaning "route me to the configured cache proxy".
pub const XCACHE_PSEUDO_HOST: &str = "xcache";

/// True if the address targets the pseudo-host.
pub fn is_pseudo_host(address: &Address) -> bool {
    address.host() == XCACHE_PSEUDO_HOST
}

/// Rewrite `address` if it targets the pseudo-host and a host override is set.
pub fn resolve(
    address: Address,
    override_host: Option<&str>,
    override_port: Option<u16>,
) -> Address {
    let host = match override_host {
        Some(host) if !host.is_empty() => host,
        _ => return address,
    };
    if !is_pseudo_host(&address) {
        return address;
    }

    let literal = host_literal(host);
    let mut rewritten = address.clone();
    if let Err(e) = rewritten.set_host(&literal) {
        tracing::warn!(address = %address, error = %e, "Cannot apply cache host override");
        return address;
    }
    // The parser cuts a host at ':' and still reports success.
    if !rewritten.host().eq_ignore_ascii_case(&literal) {
        tracing::warn!(
            address = %address,
            override_host = host,
            applied = rewritten.host(),
            "Cache host override not usable as a hostname"
        );
        return address;
    }

    if let Some(port) = override_port.filter(|p| *p > 0) {
        if let Err(e) = rewritten.set_port(port) {
            tracing::warn!(
                address = %address,
                port,
                error = %e,
                "Cannot apply cache port override"
            );
        }
    }

    rewritten
}

// Bare IPv6 literals need brackets to be accepted as a URL host.
fn host_literal(host: &str) -> String {
    if host.parse::<Ipv6Addr>().is_ok() {
        format!("[{host}]")
    } else {
        host.to_string()
    }
}
