//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! plugin descriptor (TOML)
//!     → loader.rs (parse & deserialize)
//!     → PluginConfig::to_config_map()
//!     → propagate.rs (recognized keys → environment, first-writer-wins)
//!     → Redirector reads the environment per call
//! ```
//!
//! # Design Decisions
//! - The configuration map is read once and never retained
//! - Deployment-provided environment always beats packaged configuration
//! - All descriptor fields have defaults to allow minimal configs

pub mod loader;
pub mod propagate;
pub mod schema;

pub use loader::{load_config, load_config_str, ConfigError};
pub use propagate::{propagate, PropagationReport, RECOGNIZED_KEYS};
pub use schema::{ConfigMap, PluginConfig};
