//! Storage trait abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vidtrack_core::{Video, VideoKey};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Item already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Key cannot be mapped to a file
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// One entry of the video index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Video name
    pub name: String,

    /// Video category
    pub category: String,
}

impl IndexEntry {
    /// Key of the indexed video.
    pub fn key(&self) -> VideoKey {
        VideoKey {
            category: self.category.clone(),
            name: self.name.clone(),
        }
    }
}

impl From<&VideoKey> for IndexEntry {
    fn from(key: &VideoKey) -> Self {
        Self {
            name: key.name.clone(),
            category: key.category.clone(),
        }
    }
}

/// Storage abstraction for video records.
///
/// Records are always read and written whole. The store does not serialise
/// read-modify-write sequences; callers that patch a record should hold a
/// [`KeyLocks`](crate::KeyLocks) guard for its key.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// List every indexed video.
    async fn list_index(&self) -> Result<Vec<IndexEntry>>;

    /// Load a video by key.
    async fn load_video(&self, key: &VideoKey) -> Result<Option<Video>>;

    /// Save a complete video record under its own key.
    async fn save_video(&self, video: &Video) -> Result<()>;

    /// Store a new video and add it to the index.
    async fn create_video(&self, video: &Video) -> Result<()>;

    /// Remove a video and its index entry.
    async fn delete_video(&self, key: &VideoKey) -> Result<()>;
}
