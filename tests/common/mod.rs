//! Shared utilities for integration testing.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use xcache_redirect::plugin::{
    AccessMode, DirEntry, FileSystemTransport, FileTransport, Location, LocationKind, OpenFlags,
    QueryCode, StatInfo, Transport, TransportError, TransportResult,
};

/// Host that the recording transport refuses to connect to.
#[allow(dead_code)]
pub const UNREACHABLE_HOST: &str = "down.example.org";

/// In-memory transport that records every URL it is handed.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub connected: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn connected_urls(&self) -> Vec<String> {
        self.connected.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    type File = MemoryFile;
    type FileSystem = MemoryFileSystem;

    fn file(&self) -> MemoryFile {
        MemoryFile {
            opened: self.opened.clone(),
            ..MemoryFile::default()
        }
    }

    fn file_system(&self, url: &str) -> MemoryFileSystem {
        self.connected.lock().unwrap().push(url.to_string());
        MemoryFileSystem {
            url: url.to_string(),
            ..MemoryFileSystem::default()
        }
    }
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// File backed by a byte vector.
#[derive(Debug, Default)]
pub struct MemoryFile {
    opened: Arc<Mutex<Vec<String>>>,
    pub url: Option<String>,
    pub data: Vec<u8>,
    properties: HashMap<String, String>,
}

impl MemoryFile {
    fn ensure_open(&self) -> TransportResult<()> {
        if self.url.is_some() {
            Ok(())
        } else {
            Err(TransportError::NotOpen)
        }
    }
}

impl FileTransport for MemoryFile {
    fn open(
        &mut self,
        url: &str,
        _flags: OpenFlags,
        _mode: AccessMode,
        _timeout: Duration,
    ) -> TransportResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        let host = host_of(url);
        if host == UNREACHABLE_HOST {
            return Err(TransportError::Connection {
                host,
                reason: "connection refused".to_string(),
            });
        }
        self.url = Some(url.to_string());
        self.properties.insert("LastURL".to_string(), url.to_string());
        Ok(())
    }

    fn close(&mut self, _timeout: Duration) -> TransportResult<()> {
        self.ensure_open()?;
        self.url = None;
        Ok(())
    }

    fn stat(&mut self, _force: bool, _timeout: Duration) -> TransportResult<StatInfo> {
        self.ensure_open()?;
        Ok(StatInfo {
            size: self.data.len() as u64,
            is_dir: false,
            mod_time: 0,
        })
    }

    fn read(&mut self, offset: u64, buf: &mut [u8], _timeout: Duration) -> TransportResult<usize> {
        self.ensure_open()?;
        let start = (offset as usize).min(self.data.len());
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        Ok(n)
    }

    fn write(&mut self, offset: u64, data: &[u8], _timeout: Duration) -> TransportResult<()> {
        self.ensure_open()?;
        let end = offset as usize + data.len();
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[offset as usize..end].copy_from_slice(data);
        Ok(())
    }

    fn sync(&mut self, _timeout: Duration) -> TransportResult<()> {
        self.ensure_open()
    }

    fn truncate(&mut self, size: u64, _timeout: Duration) -> TransportResult<()> {
        self.ensure_open()?;
        self.data.resize(size as usize, 0);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.url.is_some()
    }

    fn set_property(&mut self, name: &str, value: &str) -> bool {
        self.properties.insert(name.to_string(), value.to_string());
        true
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

/// Namespace holding only directories, keyed by path.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    pub url: String,
    dirs: BTreeMap<String, AccessMode>,
    properties: HashMap<String, String>,
}

impl FileSystemTransport for MemoryFileSystem {
    fn locate(
        &mut self,
        _path: &str,
        _flags: OpenFlags,
        _timeout: Duration,
    ) -> TransportResult<Vec<Location>> {
        Ok(vec![Location {
            address: host_of(&self.url),
            kind: LocationKind::Server,
            writable: true,
        }])
    }

    fn stat(&mut self, path: &str, _timeout: Duration) -> TransportResult<StatInfo> {
        if self.dirs.contains_key(path) {
            Ok(StatInfo {
                size: 0,
                is_dir: true,
                mod_time: 0,
            })
        } else {
            Err(TransportError::NotFound(path.to_string()))
        }
    }

    fn mkdir(
        &mut self,
        path: &str,
        _make_path: bool,
        mode: AccessMode,
        _timeout: Duration,
    ) -> TransportResult<()> {
        self.dirs.insert(path.to_string(), mode);
        Ok(())
    }

    fn rm(&mut self, path: &str, _timeout: Duration) -> TransportResult<()> {
        Err(TransportError::NotFound(path.to_string()))
    }

    fn rmdir(&mut self, path: &str, _timeout: Duration) -> TransportResult<()> {
        self.dirs
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| TransportError::NotFound(path.to_string()))
    }

    fn mv(&mut self, source: &str, dest: &str, _timeout: Duration) -> TransportResult<()> {
        let mode = self
            .dirs
            .remove(source)
            .ok_or_else(|| TransportError::NotFound(source.to_string()))?;
        self.dirs.insert(dest.to_string(), mode);
        Ok(())
    }

    fn truncate(&mut self, path: &str, _size: u64, _timeout: Duration) -> TransportResult<()> {
        Err(TransportError::NotFound(path.to_string()))
    }

    fn chmod(&mut self, path: &str, mode: AccessMode, _timeout: Duration) -> TransportResult<()> {
        match self.dirs.get_mut(path) {
            Some(m) => {
                *m = mode;
                Ok(())
            }
            None => Err(TransportError::NotFound(path.to_string())),
        }
    }

    fn dir_list(&mut self, path: &str, _timeout: Duration) -> TransportResult<Vec<DirEntry>> {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        Ok(self
            .dirs
            .keys()
            .filter_map(|d| d.strip_prefix(&prefix))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .map(|name| DirEntry {
                name: name.to_string(),
                stat: None,
            })
            .collect())
    }

    fn ping(&mut self, _timeout: Duration) -> TransportResult<()> {
        if host_of(&self.url) == UNREACHABLE_HOST {
            return Err(TransportError::Timeout(Duration::from_secs(1)));
        }
        Ok(())
    }

    fn query(
        &mut self,
        code: QueryCode,
        _arg: &[u8],
        _timeout: Duration,
    ) -> TransportResult<Vec<u8>> {
        match code {
            QueryCode::Config => Ok(b"xcache-test".to_vec()),
            _ => Err(TransportError::Server {
                code: 3013,
                message: "unsupported query".to_string(),
            }),
        }
    }

    fn set_property(&mut self, name: &str, value: &str) -> bool {
        self.properties.insert(name.to_string(), value.to_string());
        true
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}
