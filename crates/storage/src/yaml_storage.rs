//! YAML file storage implementation.
//!
//! Layout under the storage root:
//!
//! ```text
//! index.yaml                       list of { name, category }
//! manuscript/<category>/<name>.yaml   one complete record per video
//! ```
//!
//! Records are written to a temporary file first and renamed into place, so
//! a reader never sees a half-written record.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;
use vidtrack_core::{Video, VideoKey};

use super::{IndexEntry, Result, StorageError, VideoStore};

/// File-based YAML storage backend.
pub struct YamlStorage {
    root: PathBuf,
    index_lock: Mutex<()>,
}

impl YamlStorage {
    /// Create storage rooted at `root`, creating the directory layout if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("manuscript")).await?;

        Ok(Self {
            root,
            index_lock: Mutex::new(()),
        })
    }

    /// Storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("index.yaml")
    }

    fn video_path(&self, key: &VideoKey) -> PathBuf {
        self.root
            .join("manuscript")
            .join(&key.category)
            .join(format!("{}.yaml", key.name))
    }

    async fn read_index(&self) -> Result<Vec<IndexEntry>> {
        match fs::read_to_string(self.index_path()).await {
            Ok(yaml) if yaml.trim().is_empty() => Ok(Vec::new()),
            Ok(yaml) => Ok(serde_yaml::from_str(&yaml)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_index(&self, entries: &[IndexEntry]) -> Result<()> {
        let yaml = serde_yaml::to_string(entries)?;
        write_atomic(&self.index_path(), yaml.as_bytes()).await
    }

    async fn write_video(&self, key: &VideoKey, video: &Video) -> Result<()> {
        let path = self.video_path(key);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let yaml = serde_yaml::to_string(video)?;
        write_atomic(&path, yaml.as_bytes()).await
    }
}

fn checked(key: &VideoKey) -> Result<()> {
    if key.is_valid() {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[async_trait::async_trait]
impl VideoStore for YamlStorage {
    async fn list_index(&self) -> Result<Vec<IndexEntry>> {
        self.read_index().await
    }

    async fn load_video(&self, key: &VideoKey) -> Result<Option<Video>> {
        checked(key)?;
        let path = self.video_path(key);
        let Some(mut video) = read_yaml::<Video>(&path).await? else {
            return Ok(None);
        };

        // The key is authoritative; records written by hand may omit it.
        video.name = key.name.clone();
        video.category = key.category.clone();
        video.path = path.display().to_string();
        Ok(Some(video))
    }

    async fn save_video(&self, video: &Video) -> Result<()> {
        let key = video.key();
        checked(&key)?;
        self.write_video(&key, video).await?;
        debug!(video = %key, "saved video");
        Ok(())
    }

    async fn create_video(&self, video: &Video) -> Result<()> {
        let key = video.key();
        checked(&key)?;

        let _guard = self.index_lock.lock().await;
        let mut index = self.read_index().await?;
        if index.iter().any(|e| e.key() == key) || fs::try_exists(self.video_path(&key)).await? {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }

        self.write_video(&key, video).await?;
        index.push(IndexEntry::from(&key));
        self.write_index(&index).await?;
        debug!(video = %key, "created video");
        Ok(())
    }

    async fn delete_video(&self, key: &VideoKey) -> Result<()> {
        checked(key)?;

        let _guard = self.index_lock.lock().await;
        let mut index = self.read_index().await?;
        let before = index.len();
        index.retain(|e| &e.key() != key);
        let indexed = index.len() != before;

        let removed = match fs::remove_file(self.video_path(key)).await {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        if !indexed && !removed {
            return Err(StorageError::NotFound(key.to_string()));
        }
        if indexed {
            self.write_index(&index).await?;
        }
        debug!(video = %key, "deleted video");
        Ok(())
    }
}

async fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(yaml) => Ok(Some(serde_yaml::from_str(&yaml)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("yaml.tmp");
    fs::write(&tmp, bytes).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
