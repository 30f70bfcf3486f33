//! Load-time configuration propagation.
//!
//! # Responsibilities
//! - Publish the recognized keys of the plugin configuration map into the
//!   environment read by the redirector
//! - Never overwrite a slot the deployment already set
//!
//! # Design Decisions
//! - Runs once at plugin construction; re-running is harmless because
//!   writes are first-writer-wins
//! - Write failures are logged and skipped; start-up always continues
//! - Keys outside the allow-list are ignored without error

use crate::config::schema::ConfigMap;
use crate::env::Environment;
use crate::redirect::overrides::{XCACHE_HOST_KEY, XCACHE_PORT_KEY};

/// Configuration keys copied into the environment.
pub const RECOGNIZED_KEYS: [&str; 2] = [XCACHE_HOST_KEY, XCACHE_PORT_KEY];

/// Outcome of one propagation pass, by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Keys written into the environment.
    pub published: Vec<String>,
    /// Keys left alone because the environment already had a value.
    pub preserved: Vec<String>,
    /// Keys whose write was rejected.
    pub failed: Vec<String>,
}

/// Copy recognized, non-empty config values into unset environment slots.
pub fn propagate(config: Option<&ConfigMap>, env: &dyn Environment) -> PropagationReport {
    let mut report = PropagationReport::default();
    let Some(config) = config else {
        return report;
    };

    for key in RECOGNIZED_KEYS {
        let value = match config.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        match env.set_if_unset(key, value) {
            Ok(true) => {
                tracing::info!(key, value = %value, "Published plugin setting to environment");
                report.published.push(key.to_string());
            }
            Ok(false) => {
                tracing::debug!(key, "Environment already set, keeping deployment value");
                report.preserved.push(key.to_string());
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to publish plugin setting");
                report.failed.push(key.to_string());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;

    fn config(pairs: &[(&str, &str)]) -> ConfigMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn deployment_value_wins() {
        let env = MemoryEnv::from_pairs([(XCACHE_HOST_KEY, "cache2")]);
        let report = propagate(Some(&config(&[(XCACHE_HOST_KEY, "cache1")])), &env);

        assert_eq!(env.get(XCACHE_HOST_KEY).as_deref(), Some("cache2"));
        assert_eq!(report.preserved, vec![XCACHE_HOST_KEY.to_string()]);
        assert!(report.published.is_empty());
    }

    #[test]
    fn first_writer_wins_across_calls() {
        let env = MemoryEnv::new();
        propagate(Some(&config(&[(XCACHE_HOST_KEY, "cache1")])), &env);
        assert_eq!(env.get(XCACHE_HOST_KEY).as_deref(), Some("cache1"));

        propagate(Some(&config(&[(XCACHE_HOST_KEY, "cache3")])), &env);
        assert_eq!(env.get(XCACHE_HOST_KEY).as_deref(), Some("cache1"));
    }

    #[test]
    fn repeated_call_is_idempotent() {
        let env = MemoryEnv::new();
        let cfg = config(&[(XCACHE_HOST_KEY, "cache1"), (XCACHE_PORT_KEY, "1094")]);

        let first = propagate(Some(&cfg), &env);
        assert_eq!(first.published.len(), 2);

        let second = propagate(Some(&cfg), &env);
        assert!(second.published.is_empty());
        assert_eq!(second.preserved.len(), 2);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn absent_config_is_noop() {
        let env = MemoryEnv::new();
        assert_eq!(propagate(None, &env), PropagationReport::default());
        assert!(env.is_empty());
    }

    #[test]
    fn ignores_unknown_and_empty_keys() {
        let env = MemoryEnv::new();
        let report = propagate(
            Some(&config(&[
                ("url", "root://*"),
                ("XCACHE_DEBUG", "1"),
                (XCACHE_HOST_KEY, ""),
                (XCACHE_PORT_KEY, "1094"),
            ])),
            &env,
        );

        assert_eq!(report.published, vec![XCACHE_PORT_KEY.to_string()]);
        assert!(env.get(XCACHE_HOST_KEY).is_none());
        assert!(env.get("XCACHE_DEBUG").is_none());
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn write_failure_is_not_fatal() {
        let env = MemoryEnv::new();
        let report = propagate(
            Some(&config(&[(XCACHE_HOST_KEY, "bad\0host"), (XCACHE_PORT_KEY, "1094")])),
            &env,
        );

        assert_eq!(report.failed, vec![XCACHE_HOST_KEY.to_string()]);
        assert_eq!(report.published, vec![XCACHE_PORT_KEY.to_string()]);
        assert!(env.get(XCACHE_HOST_KEY).is_none());
    }
}
