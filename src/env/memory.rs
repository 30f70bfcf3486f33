//! In-memory environment backend.
//!
//! Used by tests and by hosts that keep plugin settings out of the process
//! environment.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::env::{validate_assignment, EnvError, Environment};

/// Environment stored in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: Arc<DashMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment pre-populated with `pairs`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env = Self::new();
        for (key, value) in pairs {
            env.vars.insert(key.into(), value.into());
        }
        env
    }

    /// Unconditionally set a value, as a deployment would before start-up.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars.remove(key).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).map(|entry| entry.value().clone())
    }

    fn set_if_unset(&self, key: &str, value: &str) -> Result<bool, EnvError> {
        validate_assignment(key, value)?;

        match self.vars.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(true)
            }
        }
    }
}
