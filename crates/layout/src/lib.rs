//! Grid layout for handwriting worksheets.
//!
//! Each character gets one block made of three grids of tracing boxes at
//! full, half and quarter scale. Eight blocks fit on a page, four across and
//! two down.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid paper profile: {0}")]
    InvalidPaper(String),
}

pub mod engine;
pub mod grid;
pub mod paper;

pub use self::engine::{
    BLOCKS_PER_PAGE, BLOCKS_PER_ROW, BlockLayout, BlockSlot, GridLayoutEngine, ROWS_PER_PAGE,
    TextOverlay, Tone,
};
pub use self::grid::{GridScale, GridSpec};
pub use self::paper::{PaperProfile, Unit};

// Re-export geometry types so callers need not depend on renshuu-types directly
pub use renshuu_types::{Point, Rect, Segment};
