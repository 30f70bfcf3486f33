//! File plugin: rewrites the URL on open, delegates everything else.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crate::plugin::transport::{
    AccessMode, FileTransport, OpenFlags, TransportError, TransportResult,
};
use crate::redirect::Redirector;

/// A file handle that redirects `xcache` opens to the configured cache.
///
/// `open` is intercepted; every other operation reaches the inner handle
/// through `Deref`/`DerefMut`. Always open through [`XcacheFile::open`]:
/// `FileTransport::open(&mut *file, ..)` bypasses the redirect and the
/// single-open check.
#[derive(Debug)]
pub struct XcacheFile<F> {
    inner: F,
    redirector: Redirector,
    opened: bool,
}

impl<F: FileTransport> XcacheFile<F> {
    pub fn new(inner: F, redirector: Redirector) -> Self {
        Self {
            inner,
            redirector,
            opened: false,
        }
    }

    /// Open `url` after applying the cache redirect.
    ///
    /// A handle can be opened once; a second call fails with
    /// `TransportError::InvalidOperation` without reaching the transport.
    pub fn open(
        &mut self,
        url: &str,
        flags: OpenFlags,
        mode: AccessMode,
        timeout: Duration,
    ) -> TransportResult<()> {
        if self.opened {
            return Err(TransportError::InvalidOperation(
                "file already opened through this handle".to_string(),
            ));
        }

        let final_url = self.redirector.construct_final_url(url);
        self.inner.open(&final_url, flags, mode, timeout)?;
        self.opened = true;
        Ok(())
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F> Deref for XcacheFile<F> {
    type Target = F;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<F> DerefMut for XcacheFile<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
