use renshuu_traits::ResourceError;
use thiserror::Error;

/// Fatal font problems. Incomplete name metadata is not one of them: it is
/// recovered with a fallback name.
#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font file could not be read: {0}")]
    Resource(#[from] ResourceError),

    #[error("Malformed font '{file}': {message}")]
    Malformed { file: String, message: String },

    #[error("Unsupported font '{file}': {message}")]
    Unsupported { file: String, message: String },
}
