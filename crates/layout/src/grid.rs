use renshuu_types::{Point, Rect};

/// Which of the three nested tracing scales a grid belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridScale {
    Large,
    Half,
    Quarter,
}

impl GridScale {
    /// Divisor applied to the large box edge.
    pub fn divisor(self) -> f32 {
        match self {
            GridScale::Large => 1.0,
            GridScale::Half => 2.0,
            GridScale::Quarter => 4.0,
        }
    }

    /// `(columns, rows)` of the grid at this scale.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            GridScale::Large => (1, 5),
            GridScale::Half => (2, 6),
            GridScale::Quarter => (4, 8),
        }
    }
}

/// A rectangular arrangement of same-size square boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub scale: GridScale,
    pub origin: Point,
    pub edge: f32,
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    pub fn new(scale: GridScale, origin: Point, large_edge: f32) -> Self {
        let (columns, rows) = scale.dimensions();
        Self {
            scale,
            origin,
            edge: large_edge / scale.divisor(),
            columns,
            rows,
        }
    }

    pub fn box_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Box at the given column/row, if inside the grid.
    pub fn box_at(&self, column: u32, row: u32) -> Option<Rect> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(Rect::square(
            self.origin
                .offset(column as f32 * self.edge, row as f32 * self.edge),
            self.edge,
        ))
    }

    /// All boxes, column by column, top to bottom within each column.
    pub fn boxes(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.columns)
            .flat_map(move |col| (0..self.rows).map(move |row| (col, row)))
            .filter_map(move |(col, row)| self.box_at(col, row))
    }

    /// The rectangle covered by the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.columns as f32 * self.edge,
            self.rows as f32 * self.edge,
        )
    }
}
