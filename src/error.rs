// src/error.rs
use renshuu_font::FontError;
use renshuu_layout::LayoutError;
use renshuu_render_core::RenderError;
use renshuu_traits::ResourceError;
use thiserror::Error;

/// A comprehensive error type for a worksheet generation run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Font failed: {0}")]
    Font(#[from] FontError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ResourceError> for PipelineError {
    fn from(e: ResourceError) -> Self {
        PipelineError::Font(FontError::Resource(e))
    }
}
