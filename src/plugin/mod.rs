//! Client plugin adapters.
//!
//! # Data Flow
//! ```text
//! host client
//!     → factory.rs (propagate config, create handles)
//!     → file.rs       open(url) → Redirector → inner.open(final_url)
//!     → filesystem.rs new(url)  → Redirector → transport.file_system(final_url)
//!     → transport.rs (external collaborator does the I/O)
//! ```
//!
//! # Design Decisions
//! - Composition, not inheritance: each handle owns one inner handle
//! - Only the open/connect step is intercepted; the rest is `Deref`
//! - Transport errors are returned untouched

pub mod factory;
pub mod file;
pub mod filesystem;
pub mod transport;

pub use factory::{load_plugin, XcacheFactory};
pub use file::XcacheFile;
pub use filesystem::XcacheFileSystem;
pub use transport::{
    AccessMode, DirEntry, FileSystemTransport, FileTransport, Location, LocationKind, OpenFlags,
    QueryCode, StatInfo, Transport, TransportError, TransportResult,
};
