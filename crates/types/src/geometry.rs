/// A position in page space, in points, measured from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(origin: Point, edge: f32) -> Self {
        Self::new(origin.x, origin.y, edge, edge)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the interiors intersect. Rectangles that only share an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 1e-3;
        self.x < other.right() - EPSILON
            && other.x < self.right() - EPSILON
            && self.y < other.bottom() - EPSILON
            && other.y < self.bottom() - EPSILON
    }

    /// The four dotted guides drawn inside a tracing box, in drawing order:
    /// horizontal centre, vertical centre, then the two diagonals.
    pub fn guide_lines(&self) -> [Segment; 4] {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        [
            Segment::new(Point::new(x, y + h / 2.0), Point::new(x + w, y + h / 2.0)),
            Segment::new(Point::new(x + w / 2.0, y), Point::new(x + w / 2.0, y + h)),
            Segment::new(Point::new(x, y), Point::new(x + w, y + h)),
            Segment::new(Point::new(x + w, y), Point::new(x, y + h)),
        ]
    }
}
