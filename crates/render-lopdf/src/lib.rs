//! PDF backend for worksheet rendering built on `lopdf`.
//!
//! [`LopdfRenderer`] implements the drawing calls of
//! [`renshuu_render_core::DocumentRenderer`], embeds the user's font as a
//! composite font and saves the finished `lopdf::Document`.

mod font;
mod renderer;
mod stream;

pub use renderer::{DEFAULT_LINE_WIDTH, LopdfRenderer};
