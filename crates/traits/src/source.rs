//! `FontSource` trait for abstracting access to the uploaded font file.
//!
//! The worksheet pipeline never touches the filesystem directly; it asks a
//! `FontSource` for the raw bytes of the font once, before any drawing
//! happens. This is the only asynchronous step of a generation run.

use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// Error type for font file access.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared font data type (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

/// A handle to a single font file whose contents can be read into memory.
///
/// # Implementations
///
/// - `FilesystemFontSource` (renshuu-resource): reads a file with `tokio::fs`
/// - `InMemoryFontSource`: bytes already held in memory (tests, embedding)
pub trait FontSource: Send + Sync + Debug {
    /// Reads the whole font file.
    ///
    /// Single-shot: callers read once per generation run.
    fn read_bytes(&self) -> impl Future<Output = Result<SharedFontData, ResourceError>> + Send;

    /// The file name as supplied by the user, used as the renderer's
    /// virtual-file id and in diagnostics.
    fn file_name(&self) -> &str;
}

/// A font that is already in memory.
#[derive(Debug, Clone)]
pub struct InMemoryFontSource {
    file_name: String,
    data: SharedFontData,
}

impl InMemoryFontSource {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data: Arc::new(data),
        }
    }

    pub fn from_shared(file_name: impl Into<String>, data: SharedFontData) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

impl FontSource for InMemoryFontSource {
    async fn read_bytes(&self) -> Result<SharedFontData, ResourceError> {
        Ok(Arc::clone(&self.data))
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}
