use crate::error::RenderError;
use renshuu_font::FontDescriptor;
use renshuu_types::{Color, Rect};
use std::io::Write;

/// Vertical anchor of a text run relative to the `y` passed to
/// [`DocumentRenderer::draw_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// `y` is the middle of the font's ascender/descender box.
    Middle,
    /// `y` is the top of the ascender.
    Top,
}

/// A stateful document-drawing backend.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page. The renderer starts with one empty page; every drawing call goes to
/// the most recently created page. Callers must register and select a font
/// before the first `draw_text`.
pub trait DocumentRenderer {
    /// Starts a new page and makes it current.
    fn create_page(&mut self) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    /// Sets the stroke dash pattern. An empty pattern means solid lines.
    fn set_line_dash_pattern(&mut self, pattern: &[f32], phase: f32);

    fn set_draw_color(&mut self, color: Color);

    fn stroke_rect(&mut self, rect: Rect) -> Result<(), RenderError>;

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError>;

    fn set_font_size(&mut self, size: f32);

    fn set_text_color(&mut self, color: Color);

    /// Line height at the current font size.
    fn measure_line_height(&self) -> f32;

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        baseline: TextBaseline,
    ) -> Result<(), RenderError>;

    /// Embeds the font under `font.display_name`.
    fn register_font(&mut self, font: &FontDescriptor) -> Result<(), RenderError>;

    /// Selects a previously registered font for subsequent text.
    fn set_active_font(&mut self, display_name: &str) -> Result<(), RenderError>;

    /// Writes the finished document.
    fn export(&mut self, writer: &mut dyn Write) -> Result<(), RenderError>;
}
