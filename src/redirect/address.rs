//! Structured resource address.
//!
//! # Responsibilities
//! - Parse `scheme://host[:port]/path[?query]` text into components
//! - Expose hostname and port for the redirect resolver
//! - Serialize back to text after a rewrite
//!
//! # Design Decisions
//! - Parsing and serialization are delegated to the `url` crate; this type
//!   never re-derives fields by string manipulation
//! - A missing host is reported as the empty string, never as the pseudo-host
//! - XRootD double-slash paths (`root://host//store/file`) are preserved

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// Errors produced while parsing or editing an [`Address`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address text could not be parsed.
    #[error("invalid address '{text}': {source}")]
    Parse {
        text: String,
        #[source]
        source: url::ParseError,
    },

    /// Hostname rejected by the parser.
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// The address form cannot carry a port (no host, `file:` scheme, ...).
    #[error("address '{0}' cannot carry a port")]
    PortNotAllowed(String),
}

/// A parsed resource locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    url: Url,
}

impl Address {
    /// Parse address text.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        Url::parse(text)
            .map(|url| Self { url })
            .map_err(|source| AddressError::Parse {
                text: text.to_string(),
                source,
            })
    }

    /// URL scheme, e.g. `root`.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Hostname, or the empty string when the address has none.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("")
    }

    /// Explicit port, if any.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Replace the hostname.
    ///
    /// IPv6 literals must already be bracketed (`[::1]`).
    pub fn set_host(&mut self, host: &str) -> Result<(), AddressError> {
        self.url
            .set_host(Some(host))
            .map_err(|source| AddressError::InvalidHost {
                host: host.to_string(),
                source,
            })
    }

    /// Replace the port.
    pub fn set_port(&mut self, port: u16) -> Result<(), AddressError> {
        self.url
            .set_port(Some(port))
            .map_err(|()| AddressError::PortNotAllowed(self.url.to_string()))
    }

    /// Serialized form.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn into_string(self) -> String {
        self.url.into()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
