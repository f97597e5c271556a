use crate::font::EmbeddedFont;
use crate::stream::maybe_deflated;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, StringFormat, dictionary};
use renshuu_font::FontDescriptor;
use renshuu_render_core::utils::{flip_y, line_height};
use renshuu_render_core::{DocumentRenderer, RenderError, TextBaseline};
use renshuu_types::{Color, Rect};
use std::io::Write;

/// Stroke width of outlines and guides.
pub const DEFAULT_LINE_WIDTH: f32 = 0.2;
const DEFAULT_FONT_SIZE: f32 = 16.0;
const PDF_VERSION: &str = "1.7";

/// Graphics state last written into a page's content stream.
#[derive(Default, Clone, PartialEq)]
struct EmittedState {
    stroke_color: Option<Color>,
    fill_color: Option<Color>,
    dash: Option<(Vec<f32>, f32)>,
    font: Option<(usize, f32)>,
}

struct PageContext {
    content: Content,
    state: EmittedState,
}

impl PageContext {
    fn new() -> Self {
        let mut content = Content { operations: vec![] };
        content
            .operations
            .push(Operation::new("w", vec![DEFAULT_LINE_WIDTH.into()]));
        Self {
            content,
            state: EmittedState::default(),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_dash(&mut self, pattern: &[f32], phase: f32) {
        let wanted = (pattern.to_vec(), phase);
        let unchanged = match &self.state.dash {
            Some(current) => *current == wanted,
            // A fresh page strokes solid lines.
            None => pattern.is_empty() && phase == 0.0,
        };
        if !unchanged {
            let array: Vec<Object> = pattern.iter().map(|v| (*v).into()).collect();
            self.push("d", vec![array.into(), phase.into()]);
            self.state.dash = Some(wanted);
        }
    }

    fn set_font(&mut self, index: usize, resource_name: &str, size: f32) {
        if self.state.font != Some((index, size)) {
            self.push(
                "Tf",
                vec![Object::Name(resource_name.as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((index, size));
        }
    }
}

/// Draws worksheets into an in-memory PDF using `lopdf` content streams.
///
/// The renderer keeps every page's content until [`DocumentRenderer::export`],
/// which builds a `lopdf::Document` from the pages and fonts and saves it.
pub struct LopdfRenderer {
    page_width: f32,
    page_height: f32,
    compress: bool,
    pages: Vec<PageContext>,
    fonts: Vec<EmbeddedFont>,
    active_font: Option<usize>,
    draw_color: Color,
    text_color: Color,
    dash: (Vec<f32>, f32),
    font_size: f32,
}

impl LopdfRenderer {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            compress: true,
            pages: vec![PageContext::new()],
            fonts: Vec::new(),
            active_font: None,
            draw_color: Color::BLACK,
            text_color: Color::BLACK,
            dash: (Vec::new(), 0.0),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Turns content and font stream compression on or off. On by default.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn page_size(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    /// Display names of the registered fonts, in registration order.
    pub fn font_names(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|f| f.display_name.as_str())
    }

    fn current_page(&mut self) -> &mut PageContext {
        // `pages` is never empty: it starts with one page and only grows.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn prepare_stroke(&mut self) {
        let color = self.draw_color;
        let (pattern, phase) = self.dash.clone();
        let page = self.current_page();
        page.set_stroke_color(color);
        page.set_dash(&pattern, phase);
    }

    /// Builds the document: one content stream and page per page, with
    /// every font in a shared resources dictionary.
    fn build_document(&self) -> Result<Document, RenderError> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in &self.fonts {
            let font_id = font.add_to_document(&mut doc, self.compress)?;
            font_dict.set(font.resource_name.as_bytes(), font_id);
        }
        doc.objects.insert(
            resources_id,
            Object::Dictionary(dictionary! { "Font" => font_dict }),
        );

        let mut kids = Vec::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            let content = maybe_deflated(dictionary! {}, page.content.encode()?, self.compress)?;
            let content_id = doc.add_object(content);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), self.page_width.into(), self.page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            log::debug!(
                "Page {} built with {} operations",
                index + 1,
                page.content.operations.len()
            );
            kids.push(Object::from(page_id));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.pages.len() as i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);
        Ok(doc)
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn create_page(&mut self) -> Result<(), RenderError> {
        self.pages.push(PageContext::new());
        log::debug!("Started page {}", self.pages.len());
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_line_dash_pattern(&mut self, pattern: &[f32], phase: f32) {
        self.dash = (pattern.to_vec(), phase);
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn stroke_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.prepare_stroke();
        let y = flip_y(rect.y + rect.height, self.page_height);
        let page = self.current_page();
        page.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        page.push("S", vec![]);
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        self.prepare_stroke();
        let height = self.page_height;
        let page = self.current_page();
        page.push("m", vec![x1.into(), flip_y(y1, height).into()]);
        page.push("l", vec![x2.into(), flip_y(y2, height).into()]);
        page.push("S", vec![]);
        Ok(())
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn measure_line_height(&self) -> f32 {
        line_height(self.font_size)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        baseline: TextBaseline,
    ) -> Result<(), RenderError> {
        let index = self.active_font.ok_or(RenderError::NoActiveFont)?;
        let size = self.font_size;
        let font = &mut self.fonts[index];
        let encoded = font.encode(text)?;
        let baseline_y = match baseline {
            TextBaseline::Alphabetic => y,
            TextBaseline::Middle => y + font.middle_offset(size),
            TextBaseline::Top => y + font.ascent(size),
        };
        let resource_name = font.resource_name.clone();

        let color = self.text_color;
        let pdf_y = flip_y(baseline_y, self.page_height);
        let page = self.current_page();
        page.set_fill_color(color);
        page.push("BT", vec![]);
        page.set_font(index, &resource_name, size);
        page.push("Td", vec![x.into(), pdf_y.into()]);
        page.push(
            "Tj",
            vec![Object::String(encoded, StringFormat::Hexadecimal)],
        );
        page.push("ET", vec![]);
        Ok(())
    }

    fn register_font(&mut self, font: &FontDescriptor) -> Result<(), RenderError> {
        if let Some(index) = self
            .fonts
            .iter()
            .position(|f| f.display_name == font.display_name)
        {
            let resource_name = self.fonts[index].resource_name.clone();
            log::debug!("Replacing font '{}' ({})", font.display_name, resource_name);
            self.fonts[index] = EmbeddedFont::new(font, resource_name)?;
            for page in &mut self.pages {
                page.state.font = None;
            }
            return Ok(());
        }

        let resource_name = format!("F{}", self.fonts.len() + 1);
        self.fonts.push(EmbeddedFont::new(font, resource_name)?);
        Ok(())
    }

    fn set_active_font(&mut self, display_name: &str) -> Result<(), RenderError> {
        let index = self
            .fonts
            .iter()
            .position(|f| f.display_name == display_name)
            .ok_or_else(|| RenderError::UnknownFont(display_name.to_string()))?;
        self.active_font = Some(index);
        Ok(())
    }

    fn export(&mut self, out: &mut dyn Write) -> Result<(), RenderError> {
        let mut doc = self.build_document()?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        out.write_all(&bytes)?;
        out.flush()?;
        log::info!(
            "Exported {} page(s), {} font(s), {} bytes",
            self.pages.len(),
            self.fonts.len(),
            bytes.len()
        );
        Ok(())
    }
}
