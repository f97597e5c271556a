/// Line height as a multiple of the font size, as used by common PDF
/// libraries when no explicit leading is set.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Line height for text of the given size.
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}
