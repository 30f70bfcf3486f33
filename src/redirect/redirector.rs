//! Final address construction.
//!
//! # Responsibilities
//! - Read override values from the environment on every call
//! - Run the resolver and serialize the result back to text
//!
//! # Design Decisions
//! - The environment is an explicit dependency, not ambient process state
//! - Unparseable input text is passed downstream untouched

use std::sync::Arc;

use crate::env::{Environment, ProcessEnv};
use crate::redirect::address::Address;
use crate::redirect::overrides::OverrideValues;

/// Entry point used by the plugin adapters to finalize an address.
#[derive(Debug, Clone)]
pub struct Redirector {
    env: Arc<dyn Environment>,
}

impl Redirector {
    /// Create a redirector reading overrides from `env`.
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self { env }
    }

    /// Create a redirector backed by the process environment.
    pub fn from_process_env() -> Self {
        Self::new(Arc::new(ProcessEnv))
    }

    /// Current override snapshot.
    pub fn overrides(&self) -> OverrideValues {
        OverrideValues::from_env(self.env.as_ref())
    }

    /// Rewrite a parsed address using the current overrides.
    pub fn construct_final_address(&self, address: Address) -> Address {
        self.overrides().apply(address)
    }

    /// Rewrite address text using the current overrides.
    pub fn construct_final_url(&self, url: &str) -> String {
        let overrides = self.overrides();
        tracing::debug!(
            url,
            xcache_host = overrides.host.as_deref().unwrap_or(""),
            xcache_port = overrides.port.unwrap_or(0),
            "Constructing final url"
        );

        let address = match Address::parse(url) {
            Ok(address) => address,
            Err(e) => {
                tracing::debug!(url, error = %e, "Address not parseable, passing through");
                return url.to_string();
            }
        };

        let final_url = overrides.apply(address).into_string();
        tracing::debug!(final_url = %final_url, "Final url");
        final_url
    }
}
