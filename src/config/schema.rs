//! Configuration schema definitions.
//!
//! This module defines the client plugin descriptor and the configuration map
//! handed to the plugin at load time. All types derive Serde traits for
//! deserialization from config files.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Key/value configuration supplied by the hosting client at plugin load.
pub type ConfigMap = HashMap<String, String>;

/// One client plugin registration.
///
/// ```toml
/// url = "root://*"
/// lib = "libXrdClXcache.so"
/// enable = true
/// XCACHE_HOST = "cache.example.org"
/// XCACHE_PORT = 1094
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PluginConfig {
    /// URL pattern the plugin is registered for.
    pub url: String,

    /// Plugin library name, informational only.
    pub lib: Option<String>,

    /// Whether the plugin is loaded at all.
    pub enable: bool,

    /// Every other key, passed through to the plugin.
    #[serde(flatten)]
    pub settings: BTreeMap<String, toml::Value>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            url: "root://*".to_string(),
            lib: None,
            enable: true,
            settings: BTreeMap::new(),
        }
    }
}

impl PluginConfig {
    /// Flatten the settings into the string map the plugin receives.
    ///
    /// Scalars are stringified; arrays and tables have no string form and are
    /// skipped.
    pub fn to_config_map(&self) -> ConfigMap {
        let mut map = ConfigMap::new();
        for (key, value) in &self.settings {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    tracing::warn!(key = %key, "Ignoring non-scalar plugin setting");
                    continue;
                }
            };
            map.insert(key.clone(), text);
        }
        map
    }
}
