//! File-backed implementation of the synchronized key-value store.
//!
//! Keeps all keys in a single JSON object file, read and rewritten whole on
//! every access. That matches the store's contract (whole-value writes, last
//! writer wins) and keeps the on-disk shape trivially inspectable.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use floatbrowser_core::config::StorageConfig;
use floatbrowser_core::utils::paths::get_app_data_dir;
use floatbrowser_core::CoreError;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::errors::StorageError;
use super::store_iface::SyncStore;

/// File name used when no explicit data file is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "quick_apps.json";

/// A [`SyncStore`] backed by a JSON file on the local filesystem.
///
/// The stand-in for the browser's synchronized store when the popup core
/// runs outside a browser. Parent directories are created on the first
/// write.
#[derive(Debug)]
pub struct FileSyncStore {
    data_path: PathBuf,
}

impl FileSyncStore {
    /// Creates a store over the given JSON file path.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Creates a store at the configured location, or at
    /// `quick_apps.json` inside the application data directory when the
    /// configuration leaves the path unset.
    pub fn from_config(config: &StorageConfig) -> Result<Self, CoreError> {
        let data_path = match &config.data_file {
            Some(path) => path.clone(),
            None => get_app_data_dir()?.join(DEFAULT_DATA_FILE_NAME),
        };
        Ok(Self::new(data_path))
    }

    /// Path of the backing file.
    pub fn data_path(&self) -> &std::path::Path {
        &self.data_path
    }

    async fn read_cells(&self) -> Result<Map<String, Value>, StorageError> {
        let mut file = match fs::File::open(&self.data_path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(map_io_error(e)),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .await
            .map_err(map_io_error)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        let cells: Map<String, Value> = serde_json::from_str(&contents)?;
        Ok(cells)
    }

    async fn write_cells(&self, cells: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(map_io_error)?;
            }
        }

        let serialized = serde_json::to_string_pretty(cells)?;
        let mut file = fs::File::create(&self.data_path)
            .await
            .map_err(map_io_error)?;
        file.write_all(serialized.as_bytes())
            .await
            .map_err(map_io_error)?;
        Ok(())
    }
}

fn map_io_error(e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::PermissionDenied => StorageError::AccessDenied {
            message: e.to_string(),
        },
        _ => StorageError::Io(e),
    }
}

#[async_trait]
impl SyncStore for FileSyncStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let cells = self.read_cells().await?;
        Ok(cells.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut cells = self.read_cells().await?;
        cells.insert(key.to_string(), value);
        self.write_cells(&cells).await
    }
}
