//! Plugin factory.
//!
//! # Responsibilities
//! - Seed the environment from the load-time configuration map (once)
//! - Hand out file and file-system handles that apply the cache redirect
//!
//! # Design Decisions
//! - Propagation happens in the constructor, before any handle exists
//! - The factory owns the transport; handles own their inner transport handle

use std::sync::Arc;

use crate::config::{propagate, ConfigMap};
use crate::env::{Environment, ProcessEnv};
use crate::plugin::file::XcacheFile;
use crate::plugin::filesystem::XcacheFileSystem;
use crate::plugin::transport::Transport;
use crate::redirect::Redirector;

/// Factory producing redirecting handles over a transport.
#[derive(Debug)]
pub struct XcacheFactory<T> {
    transport: T,
    redirector: Redirector,
}

impl<T: Transport> XcacheFactory<T> {
    /// Create the factory, publishing `config` into `env` first.
    pub fn new(transport: T, config: Option<&ConfigMap>, env: Arc<dyn Environment>) -> Self {
        let report = propagate(config, env.as_ref());
        tracing::debug!(
            published = report.published.len(),
            preserved = report.preserved.len(),
            failed = report.failed.len(),
            "Xcache plugin factory initialized"
        );

        Self {
            transport,
            redirector: Redirector::new(env),
        }
    }

    /// A new file handle. The URL is applied when the handle is opened.
    pub fn create_file(&self, url: &str) -> XcacheFile<T::File> {
        tracing::trace!(url, "Creating file plugin");
        XcacheFile::new(self.transport.file(), self.redirector.clone())
    }

    /// A new file-system handle bound to the redirected `url`.
    pub fn create_file_system(&self, url: &str) -> XcacheFileSystem<T::FileSystem> {
        XcacheFileSystem::connect(&self.transport, url, &self.redirector)
    }

    pub fn redirector(&self) -> &Redirector {
        &self.redirector
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Load the plugin against the process environment.
pub fn load_plugin<T: Transport>(transport: T, config: Option<&ConfigMap>) -> XcacheFactory<T> {
    XcacheFactory::new(transport, config, Arc::new(ProcessEnv))
}
