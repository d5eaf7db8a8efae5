//! On-disk thumbnail cache
//!
//! One file per image, named `<id>.jpg`, in a single directory. There is
//! no manifest and no eviction: presence is discovered by probing the
//! path directly, and the directory only ever grows.
//!
//! The directory is resolved on every operation rather than remembered,
//! so a cache dir that appears or disappears at runtime is picked up.
//! Failures never propagate: `save` logs and returns, `exists` reports
//! `false`.

use crate::config::CacheConfig;
use crate::error::{SnapError, SnapResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Extension given to every entry regardless of the actual image format
pub const IMAGE_EXTENSION: &str = "jpg";

/// Where the cache directory lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLocation {
    /// `<platform cache dir>/snapsearch/images`
    Platform,
    /// An explicit directory
    Fixed(PathBuf),
}

impl CacheLocation {
    /// Resolve the directory for this location
    pub fn resolve(&self) -> SnapResult<PathBuf> {
        match self {
            Self::Platform => dirs::cache_dir()
                .map(|dir| dir.join("snapsearch").join("images"))
                .ok_or(SnapError::CacheDirUnavailable),
            Self::Fixed(dir) => Ok(dir.clone()),
        }
    }
}

/// Best-effort image store keyed by image id
#[derive(Debug, Clone)]
pub struct ImageCache {
    location: CacheLocation,
}

impl ImageCache {
    /// Create a cache from configuration
    pub fn new(config: &CacheConfig) -> Self {
        match &config.dir {
            Some(dir) => Self::with_dir(dir.clone()),
            None => Self::platform(),
        }
    }

    /// Cache under the platform cache directory
    pub fn platform() -> Self {
        Self {
            location: CacheLocation::Platform,
        }
    }

    /// Cache in an explicit directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            location: CacheLocation::Fixed(dir.into()),
        }
    }

    pub fn location(&self) -> &CacheLocation {
        &self.location
    }

    /// Resolve the cache directory
    pub fn dir(&self) -> SnapResult<PathBuf> {
        self.location.resolve()
    }

    /// Resolve the file path an id is stored under
    pub fn entry_path(&self, id: &str) -> SnapResult<PathBuf> {
        validate_id(id)?;
        Ok(self.dir()?.join(file_name(id)))
    }

    /// Store `bytes` as the entry for `id`, replacing any previous entry.
    ///
    /// Never fails from the caller's point of view; problems are logged.
    pub async fn save(&self, bytes: &[u8], id: &str) {
        if bytes.is_empty() {
            warn!("Not caching empty image for {}", id);
            return;
        }

        if let Err(e) = validate_id(id) {
            warn!("Not caching image: {}", e);
            return;
        }

        let dir = match self.dir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!("Not caching image {}: {}", id, e);
                return;
            }
        };

        match write_entry(&dir, id, bytes).await {
            Ok(path) => debug!("Cached {} ({} bytes) at {}", id, bytes.len(), path.display()),
            Err(e) => warn!("Failed to cache image {}: {}", id, e),
        }
    }

    /// Whether an entry for `id` is present. Content is not checked.
    pub fn exists(&self, id: &str) -> bool {
        match self.entry_path(id) {
            Ok(path) => path.is_file(),
            Err(e) => {
                debug!("Cache lookup for {:?} skipped: {}", id, e);
                false
            }
        }
    }
}

fn file_name(id: &str) -> String {
    format!("{}.{}", id, IMAGE_EXTENSION)
}

/// Ids become file names, so they must stay inside the cache directory
fn validate_id(id: &str) -> SnapResult<()> {
    let escapes = id == "." || id == ".." || id.contains(['/', '\\', '\0']);
    if id.is_empty() || escapes {
        return Err(SnapError::InvalidCacheId(id.to_string()));
    }
    Ok(())
}

/// Write via a temporary sibling and rename, so readers and concurrent
/// writers of the same id only ever see a complete file.
async fn write_entry(dir: &Path, id: &str, bytes: &[u8]) -> SnapResult<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| SnapError::io(format!("creating cache dir {}", dir.display()), e))?;

    let path = dir.join(file_name(id));
    let tmp = dir.join(format!(".{}.{}.tmp", id, Uuid::new_v4().simple()));

    fs::write(&tmp, bytes)
        .await
        .map_err(|e| SnapError::io(format!("writing {}", tmp.display()), e))?;

    if let Err(e) = fs::rename(&tmp, &path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(SnapError::io(format!("replacing {}", path.display()), e));
    }

    Ok(path)
}
