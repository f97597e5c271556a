//! The drawing primitives a worksheet is built from: a tracing box, a glyph
//! placed in a box, and a whole character block.

use renshuu_layout::{BlockLayout, Tone};
use renshuu_render_core::{DocumentRenderer, RenderError, TextBaseline};
use renshuu_types::{Color, Point, Rect};

/// Dash pattern of the guides inside a box.
pub(crate) const GUIDE_DASH: [f32; 1] = [2.0];

/// Draws one tracing box: a solid outline with dashed grey centre lines and
/// diagonals. Leaves the renderer with solid black strokes.
pub fn draw_box<R: DocumentRenderer + ?Sized>(renderer: &mut R, rect: Rect) -> Result<(), RenderError> {
    renderer.stroke_rect(rect)?;

    renderer.set_line_dash_pattern(&GUIDE_DASH, 0.0);
    renderer.set_draw_color(Color::GUIDE_GREY);
    for guide in rect.guide_lines() {
        renderer.draw_line(guide.from.x, guide.from.y, guide.to.x, guide.to.y)?;
    }

    renderer.set_line_dash_pattern(&[], 0.0);
    renderer.set_draw_color(Color::BLACK);
    Ok(())
}

/// Sets `text` in the box whose top-left corner is `origin`, at a font size
/// equal to the box edge.
///
/// The glyph is centred on the average of the box centre and the centre of
/// the text line, i.e. `y + (size + line_height) / 4`.
pub fn place_text<R: DocumentRenderer + ?Sized>(
    renderer: &mut R,
    text: &str,
    origin: Point,
    size: f32,
    color: Color,
) -> Result<(), RenderError> {
    renderer.set_font_size(size);
    renderer.set_text_color(color);
    let adjust = (size + renderer.measure_line_height()) / 4.0;
    renderer.draw_text(text, origin.x, origin.y + adjust, TextBaseline::Middle)
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::BLACK,
        Tone::Trace => Color::TRACE_GREY,
    }
}

/// Draws the three grids of a block, each followed by its glyph overlays.
pub fn draw_block<R: DocumentRenderer + ?Sized>(
    renderer: &mut R,
    block: &BlockLayout,
    text: &str,
) -> Result<(), RenderError> {
    // Overlays per grid: the large grid carries the model and the first
    // trace copy, the smaller grids one trace copy each.
    let overlays_per_grid: [&[usize]; 3] = [&[0, 1], &[2], &[3]];

    for (grid, overlay_indices) in block.grids.iter().zip(overlays_per_grid) {
        for rect in grid.boxes() {
            draw_box(&mut *renderer, rect)?;
        }
        for &i in overlay_indices {
            let overlay = &block.overlays[i];
            place_text(&mut *renderer, text, overlay.origin, overlay.size, tone_color(overlay.tone))?;
        }
    }
    Ok(())
}
