//! Transport collaborator interface.
//!
//! The shim never performs I/O itself; these traits describe the client
//! handles it wraps. Implementations own sockets, protocol framing and
//! connection lifecycles.

use std::time::Duration;

use bitflags::bitflags;
use thiserror::Error;

/// Errors surfaced by the transport. Passed to callers verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Operation not valid in the handle's current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// File handle used before a successful open.
    #[error("File is not open")]
    NotOpen,

    /// Could not reach the endpoint.
    #[error("Connection to {host} failed: {reason}")]
    Connection { host: String, reason: String },

    /// Remote path does not exist.
    #[error("No such file or directory: {0}")]
    NotFound(String),

    /// Authentication or authorization refused.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Operation did not complete in time.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// Any other server-side failure.
    #[error("Server error {code}: {message}")]
    Server { code: u32, message: String },
}

pub type TransportResult<T> = Result<T, TransportError>;

bitflags! {
    /// Flags controlling how a file is opened.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OpenFlags: u16 {
        /// Create, truncating an existing file.
        const DELETE = 0x0002;
        /// Create, fail if it exists.
        const NEW = 0x0008;
        /// Open for reading.
        const READ = 0x0010;
        /// Open for reading and writing.
        const UPDATE = 0x0020;
        /// Create missing parent directories.
        const MAKE_PATH = 0x0100;
    }
}

/// POSIX-style permission bits for created files and directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessMode(pub u32);

impl AccessMode {
    pub const NONE: Self = Self(0);
    pub const USER_RW: Self = Self(0o600);
    pub const DEFAULT_DIR: Self = Self(0o755);
}

/// Metadata returned by `stat`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatInfo {
    pub size: u64,
    pub is_dir: bool,
    /// Modification time, seconds since the Unix epoch.
    pub mod_time: u64,
}

/// Role of a server in a `locate` reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Manager,
    Server,
}

/// One entry of a `locate` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub address: String,
    pub kind: LocationKind,
    pub writable: bool,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub stat: Option<StatInfo>,
}

/// Server-side query selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCode {
    Config,
    Checksum,
    Space,
    Stats,
    XAttr,
    Opaque,
}

/// A single remote file handle.
pub trait FileTransport: Send {
    fn open(
        &mut self,
        url: &str,
        flags: OpenFlags,
        mode: AccessMode,
        timeout: Duration,
    ) -> TransportResult<()>;
    fn close(&mut self, timeout: Duration) -> TransportResult<()>;
    fn stat(&mut self, force: bool, timeout: Duration) -> TransportResult<StatInfo>;
    fn read(&mut self, offset: u64, buf: &mut [u8], timeout: Duration) -> TransportResult<usize>;
    fn write(&mut self, offset: u64, data: &[u8], timeout: Duration) -> TransportResult<()>;
    fn sync(&mut self, timeout: Duration) -> TransportResult<()>;
    fn truncate(&mut self, size: u64, timeout: Duration) -> TransportResult<()>;
    fn is_open(&self) -> bool;
    fn set_property(&mut self, name: &str, value: &str) -> bool;
    fn get_property(&self, name: &str) -> Option<String>;
}

/// A handle on a remote namespace, bound to one endpoint at construction.
pub trait FileSystemTransport: Send {
    fn locate(
        &mut self,
        path: &str,
        flags: OpenFlags,
        timeout: Duration,
    ) -> TransportResult<Vec<Location>>;
    fn stat(&mut self, path: &str, timeout: Duration) -> TransportResult<StatInfo>;
    fn mkdir(
        &mut self,
        path: &str,
        make_path: bool,
        mode: AccessMode,
        timeout: Duration,
    ) -> TransportResult<()>;
    fn rm(&mut self, path: &str, timeout: Duration) -> TransportResult<()>;
    fn rmdir(&mut self, path: &str, timeout: Duration) -> TransportResult<()>;
    fn mv(&mut self, source: &str, dest: &str, timeout: Duration) -> TransportResult<()>;
    fn truncate(&mut self, path: &str, size: u64, timeout: Duration) -> TransportResult<()>;
    fn chmod(&mut self, path: &str, mode: AccessMode, timeout: Duration) -> TransportResult<()>;
    fn dir_list(&mut self, path: &str, timeout: Duration) -> TransportResult<Vec<DirEntry>>;
    fn ping(&mut self, timeout: Duration) -> TransportResult<()>;
    fn query(&mut self, code: QueryCode, arg: &[u8], timeout: Duration) -> TransportResult<Vec<u8>>;
    fn set_property(&mut self, name: &str, value: &str) -> bool;
    fn get_property(&self, name: &str) -> Option<String>;
}

/// Produces the inner handles the plugin wraps.
pub trait Transport: Send + Sync {
    type File: FileTransport;
    type FileSystem: FileSystemTransport;

    /// A fresh, unopened file handle.
    fn file(&self) -> Self::File;

    /// A file-system handle bound to `url`.
    fn file_system(&self, url: &str) -> Self::FileSystem;
}
