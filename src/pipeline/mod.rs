//! Worksheet generation: configuration, font loading and page assembly.

mod builder;
mod drawing;
mod generator;

pub use builder::WorksheetBuilder;
pub use drawing::{draw_block, draw_box, place_text};
pub use generator::{AssemblyReport, DEFAULT_OUTPUT_NAME, WorksheetGenerator};
