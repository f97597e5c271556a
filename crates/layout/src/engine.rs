use crate::grid::{GridScale, GridSpec};
use crate::paper::PaperProfile;
use crate::LayoutError;
use renshuu_types::Point;

/// Blocks per horizontal row of a page.
pub const BLOCKS_PER_ROW: usize = 4;
/// Rows of blocks per page.
pub const ROWS_PER_PAGE: usize = 2;
/// Characters that fit on one page.
pub const BLOCKS_PER_PAGE: usize = BLOCKS_PER_ROW * ROWS_PER_PAGE;

/// Colour role of a glyph overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// The model glyph, drawn in black.
    Primary,
    /// A lighter glyph meant to be traced over.
    Trace,
}

/// Where one copy of the character is drawn inside its block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOverlay {
    /// Top-left corner of the box the glyph sits in.
    pub origin: Point,
    /// Font size, equal to the edge of that box.
    pub size: f32,
    pub tone: Tone,
}

/// Position of a block within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSlot {
    /// `0..4`, left to right.
    pub column: usize,
    /// `0..2`, top to bottom.
    pub row: usize,
}

/// Everything needed to draw one character.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub index: usize,
    pub page_index: usize,
    pub starts_new_page: bool,
    pub slot: BlockSlot,
    pub origin: Point,
    /// Large, half and quarter grids, in that order.
    pub grids: [GridSpec; 3],
    pub overlays: [TextOverlay; 4],
}

impl BlockLayout {
    pub fn grid(&self, scale: GridScale) -> &GridSpec {
        match scale {
            GridScale::Large => &self.grids[0],
            GridScale::Half => &self.grids[1],
            GridScale::Quarter => &self.grids[2],
        }
    }

    pub fn box_count(&self) -> usize {
        self.grids.iter().map(GridSpec::box_count).sum()
    }
}

/// Maps a character index to its page, slot and geometry.
///
/// Every method is a pure function of the index and the paper profile the
/// engine was built with; the engine holds no counters.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayoutEngine {
    paper: PaperProfile,
    large_edge: f32,
    grid_width: f32,
    grid_height: f32,
    vertical_gap: f32,
}

impl GridLayoutEngine {
    pub fn new(paper: PaperProfile) -> Result<Self, LayoutError> {
        paper.validate()?;
        let large_edge = paper.large_box_edge();
        if large_edge <= 0.0 {
            return Err(LayoutError::InvalidPaper(format!(
                "large box edge {} is not positive",
                large_edge
            )));
        }
        let grid_width = large_edge * 2.0;
        let grid_height = large_edge * 5.0;
        let vertical_gap = paper.available_vertical - grid_height * 2.0;
        log::debug!(
            "Grid layout for '{}': box={} grid={}x{} gap={}",
            paper.name,
            large_edge,
            grid_width,
            grid_height,
            vertical_gap
        );
        Ok(Self {
            paper,
            large_edge,
            grid_width,
            grid_height,
            vertical_gap,
        })
    }

    pub fn paper(&self) -> &PaperProfile {
        &self.paper
    }

    pub fn large_edge(&self) -> f32 {
        self.large_edge
    }

    pub fn grid_width(&self) -> f32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> f32 {
        self.grid_height
    }

    pub fn vertical_gap(&self) -> f32 {
        self.vertical_gap
    }

    pub fn page_index(&self, index: usize) -> usize {
        index / BLOCKS_PER_PAGE
    }

    /// True when the character at `index` is the first on a page other than
    /// the first one.
    pub fn starts_new_page(&self, index: usize) -> bool {
        index > 0 && index % BLOCKS_PER_PAGE == 0
    }

    /// Pages needed for `count` characters. An empty sequence still gets one
    /// (blank) page.
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(BLOCKS_PER_PAGE).max(1)
    }

    pub fn block_slot(&self, index: usize) -> BlockSlot {
        BlockSlot {
            column: index % BLOCKS_PER_ROW,
            row: (index / BLOCKS_PER_ROW) % ROWS_PER_PAGE,
        }
    }

    pub fn block_origin(&self, index: usize) -> Point {
        let slot = self.block_slot(index);
        let top = if slot.row == 0 {
            0.0
        } else {
            self.grid_height + self.vertical_gap
        };
        Point::new(
            slot.column as f32 * self.grid_width + self.paper.margin,
            top + self.paper.margin,
        )
    }

    pub fn layout_block(&self, index: usize) -> BlockLayout {
        let origin = self.block_origin(index);
        let l = self.large_edge;
        let side = origin.offset(l, 0.0);
        let below = origin.offset(l, 3.0 * l);

        let grids = [
            GridSpec::new(GridScale::Large, origin, l),
            GridSpec::new(GridScale::Half, side, l),
            GridSpec::new(GridScale::Quarter, below, l),
        ];
        let overlays = [
            TextOverlay {
                origin,
                size: l,
                tone: Tone::Primary,
            },
            TextOverlay {
                origin: origin.offset(0.0, l),
                size: l,
                tone: Tone::Trace,
            },
            TextOverlay {
                origin: side,
                size: l / 2.0,
                tone: Tone::Trace,
            },
            TextOverlay {
                origin: below,
                size: l / 4.0,
                tone: Tone::Trace,
            },
        ];

        BlockLayout {
            index,
            page_index: self.page_index(index),
            starts_new_page: self.starts_new_page(index),
            slot: self.block_slot(index),
            origin,
            grids,
            overlays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renshuu_types::Rect;

    fn letter() -> GridLayoutEngine {
        GridLayoutEngine::new(PaperProfile::letter()).unwrap()
    }

    #[test]
    fn derived_dimensions_for_letter() {
        let engine = letter();
        assert_eq!(engine.large_edge(), 58.5);
        assert_eq!(engine.grid_width(), 117.0);
        assert_eq!(engine.grid_height(), 292.5);
        assert_eq!(engine.vertical_gap(), 63.0);
    }

    #[test]
    fn page_breaks_every_eight() {
        let engine = letter();
        for i in 0..100 {
            assert_eq!(engine.page_index(i), i / 8);
            assert_eq!(engine.starts_new_page(i), i > 0 && i % 8 == 0);
        }
    }

    #[test]
    fn page_count_rounds_up_with_minimum_of_one() {
        let engine = letter();
        assert_eq!(engine.page_count(0), 1);
        assert_eq!(engine.page_count(1), 1);
        assert_eq!(engine.page_count(8), 1);
        assert_eq!(engine.page_count(9), 2);
        assert_eq!(engine.page_count(17), 3);
    }

    #[test]
    fn first_row_is_evenly_spaced() {
        let engine = letter();
        let origins: Vec<_> = (0..4).map(|i| engine.block_origin(i)).collect();
        for (i, o) in origins.iter().enumerate() {
            assert_eq!(engine.block_slot(i).row, 0);
            assert_eq!(o.y, 72.0);
            assert_eq!(o.x, 72.0 + i as f32 * 117.0);
        }
    }

    #[test]
    fn second_row_sits_below_gap() {
        let engine = letter();
        let o = engine.block_origin(4);
        assert_eq!(engine.block_slot(4), BlockSlot { column: 0, row: 1 });
        assert_eq!(o, Point::new(72.0, 72.0 + 292.5 + 63.0));
        // Bottom of the second row lands exactly on the bottom margin.
        assert_eq!(o.y + engine.grid_height(), 792.0 - 72.0);
    }

    #[test]
    fn ninth_character_restarts_at_top_left() {
        let engine = letter();
        let block = engine.layout_block(8);
        assert!(block.starts_new_page);
        assert_eq!(block.page_index, 1);
        assert_eq!(block.slot, BlockSlot { column: 0, row: 0 });
        assert_eq!(block.origin, engine.block_origin(0));
    }

    #[test]
    fn block_geometry() {
        let engine = letter();
        let block = engine.layout_block(1);
        let o = block.origin;
        assert_eq!(o, Point::new(189.0, 72.0));

        let large = block.grid(GridScale::Large);
        assert_eq!((large.origin, large.edge, large.columns, large.rows), (o, 58.5, 1, 5));
        let half = block.grid(GridScale::Half);
        assert_eq!(
            (half.origin, half.edge, half.columns, half.rows),
            (Point::new(247.5, 72.0), 29.25, 2, 6)
        );
        let quarter = block.grid(GridScale::Quarter);
        assert_eq!(
            (quarter.origin, quarter.edge, quarter.columns, quarter.rows),
            (Point::new(247.5, 72.0 + 175.5), 14.625, 4, 8)
        );

        assert_eq!(block.overlays[0], TextOverlay { origin: o, size: 58.5, tone: Tone::Primary });
        assert_eq!(block.overlays[1].origin, Point::new(189.0, 130.5));
        assert_eq!(block.overlays[1].tone, Tone::Trace);
        assert_eq!(block.overlays[2].size, 29.25);
        assert_eq!(block.overlays[3].origin, quarter.origin);
        assert_eq!(block.overlays[3].size, 14.625);
        assert_eq!(block.box_count(), 5 + 12 + 32);
    }

    #[test]
    fn grids_within_a_block_do_not_overlap() {
        let engine = letter();
        let block = engine.layout_block(6);
        let all: Vec<Rect> = block.grids.iter().flat_map(|g| g.boxes().collect::<Vec<_>>()).collect();
        assert_eq!(all.len(), 49);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn blocks_on_a_page_stay_inside_the_margins() {
        let engine = letter();
        for i in 0..8 {
            let block = engine.layout_block(i);
            for grid in &block.grids {
                let b = grid.bounds();
                assert!(b.x >= 72.0 && b.right() <= 540.0 + 1e-3, "{:?}", b);
                assert!(b.y >= 72.0 && b.bottom() <= 720.0 + 1e-3, "{:?}", b);
            }
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let engine = letter();
        for i in [0, 3, 7, 8, 1234, 99_999] {
            assert_eq!(engine.layout_block(i), engine.layout_block(i));
        }
        let again = GridLayoutEngine::new(PaperProfile::letter()).unwrap();
        assert_eq!(engine.layout_block(42), again.layout_block(42));
    }

    #[test]
    fn rejects_invalid_paper() {
        let paper = PaperProfile {
            available_vertical: 400.0,
            ..PaperProfile::letter()
        };
        assert!(GridLayoutEngine::new(paper).is_err());
    }
}
