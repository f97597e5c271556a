//! Core rendering abstractions for worksheet generation.
//!
//! This crate provides the fundamental traits and types used by rendering backends:
//! - `DocumentRenderer` trait for abstracting the stateful drawing calls
//! - `RecordingRenderer`, a backend that only records calls (dry runs, tests)
//! - Error types for rendering operations
//! - Shared utility functions for coordinate conversion

mod error;
pub mod recording;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawCall, RecordingRenderer};
pub use traits::{DocumentRenderer, TextBaseline};
