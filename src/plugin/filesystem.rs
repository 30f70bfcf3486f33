//! File-system plugin: binds the inner handle to the redirected URL.

use std::ops::{Deref, DerefMut};

use crate::plugin::transport::Transport;
use crate::redirect::Redirector;

/// A file-system handle connected to the cache when addressed as `xcache`.
///
/// The rewrite happens once, at construction; all operations reach the inner
/// handle through `Deref`/`DerefMut`.
#[derive(Debug)]
pub struct XcacheFileSystem<S> {
    inner: S,
    url: String,
}

impl<S> XcacheFileSystem<S> {
    /// Build the inner handle from `transport` against the redirected `url`.
    pub fn connect<T>(transport: &T, url: &str, redirector: &Redirector) -> Self
    where
        T: Transport<FileSystem = S>,
    {
        let url = redirector.construct_final_url(url);
        tracing::debug!(url = %url, "Creating file system handle");
        Self {
            inner: transport.file_system(&url),
            url,
        }
    }

    /// The URL the inner handle is bound to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Deref for XcacheFileSystem<S> {
    type Target = S;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S> DerefMut for XcacheFileSystem<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
