/// An opaque RGB colour as used by the worksheet drawing calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Box outlines and the primary glyph.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// Dotted guide lines inside each box (`#BBBBBB`).
    pub const GUIDE_GREY: Color = Color::gray(0xBB);
    /// Traceable glyphs (`#888888`).
    pub const TRACE_GREY: Color = Color::gray(0x88);

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Components scaled to `0.0..=1.0`, the form PDF colour operators take.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}
