//! Process environment backend.

use std::env;
use std::sync::{Mutex, PoisonError};

use crate::env::{validate_assignment, EnvError, Environment};

/// Serializes check-then-set so concurrent writers cannot both "win".
static ENV_WRITE_LOCK: Mutex<()> = Mutex::new(());

/// The real process environment (`std::env`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn set_if_unset(&self, key: &str, value: &str) -> Result<bool, EnvError> {
        validate_assignment(key, value)?;

        let _guard = ENV_WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        if env::var_os(key).is_some() {
            return Ok(false);
        }
        env::set_var(key, value);
        Ok(true)
    }
}

