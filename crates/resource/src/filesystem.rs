//! Filesystem-backed font source for native platforms.

use renshuu_traits::{FontSource, ResourceError, SharedFontData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A font source that reads a single file from the local filesystem.
///
/// The read happens lazily in [`FontSource::read_bytes`] on the tokio
/// blocking pool, so constructing the source never touches the disk.
#[derive(Debug, Clone)]
pub struct FilesystemFontSource {
    path: PathBuf,
    file_name: String,
}

impl FilesystemFontSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FontSource for FilesystemFontSource {
    async fn read_bytes(&self) -> Result<SharedFontData, ResourceError> {
        log::debug!("Reading font file {}", self.path.display());
        tokio::fs::read(&self.path)
            .await
            .map(Arc::new)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ResourceError::NotFound(self.path.display().to_string())
                } else {
                    ResourceError::LoadFailed {
                        path: self.path.display().to_string(),
                        message: e.to_string(),
                    }
                }
            })
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}
