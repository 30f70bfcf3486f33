//! Environment state shared by the propagator and the resolver.
//!
//! # Data Flow
//! ```text
//! config map ──(first-writer-wins)──▶ Environment ◀──(read per call)── Redirector
//! ```
//!
//! # Design Decisions
//! - Passed explicitly as `Arc<dyn Environment>` so tests never touch the
//!   real process environment
//! - `set_if_unset` is the only write; an existing slot (even empty) wins
//! - Assignments the platform would reject are refused up front with `EnvError`

pub mod memory;
pub mod process;

pub use memory::MemoryEnv;
pub use process::ProcessEnv;

use thiserror::Error;

/// Errors raised when an environment slot cannot be written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment key must not be empty")]
    EmptyKey,

    #[error("environment key '{0}' contains '=' or NUL")]
    InvalidKey(String),

    #[error("value for environment key '{0}' contains NUL")]
    InvalidValue(String),
}

/// Key/value environment with first-writer-wins writes.
pub trait Environment: Send + Sync + std::fmt::Debug {
    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value` only if it is not already set.
    ///
    /// Returns `Ok(true)` if the value was written, `Ok(false)` if an existing
    /// value was kept.
    fn set_if_unset(&self, key: &str, value: &str) -> Result<bool, EnvError>;
}

/// Check that an assignment is representable in a process environment.
pub fn validate_assignment(key: &str, value: &str) -> Result<(), EnvError> {
    if key.is_empty() {
        return Err(EnvError::EmptyKey);
    }
    if key.contains(['=', '\0']) {
        return Err(EnvError::InvalidKey(key.to_string()));
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue(key.to_string()));
    }
    Ok(())
}
