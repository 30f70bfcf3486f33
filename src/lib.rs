//! Xcache redirect plugin library.
//!
//! Rewrites addresses that use the reserved `xcache` pseudo-hostname so they
//! point at a real cache proxy, taken from `XCACHE_HOST` / `XCACHE_PORT`.
//! Those two values come from the deployment environment or, when unset
//! there, from the plugin's load-time configuration.

// Core
pub mod config;
pub mod env;
pub mod redirect;

// Client integration
pub mod plugin;

// Cross-cutting concerns
pub mod observability;

pub use config::{propagate, ConfigMap, PluginConfig};
pub use env::{Environment, MemoryEnv, ProcessEnv};
pub use plugin::{load_plugin, XcacheFactory, XcacheFile, XcacheFileSystem};
pub use redirect::{resolve, Address, OverrideValues, Redirector};
