//! A renderer that draws nothing and remembers every call.
//!
//! Used for dry runs (count pages and shapes without producing a PDF) and
//! for asserting the exact call sequence a generation run issues.

use crate::error::RenderError;
use crate::traits::{DocumentRenderer, TextBaseline};
use crate::utils::line_height;
use renshuu_font::FontDescriptor;
use renshuu_types::{Color, Rect};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    CreatePage,
    SetLineDashPattern { pattern: Vec<f32>, phase: f32 },
    SetDrawColor(Color),
    StrokeRect(Rect),
    DrawLine { x1: f32, y1: f32, x2: f32, y2: f32 },
    SetFontSize(f32),
    SetTextColor(Color),
    DrawText { text: String, x: f32, y: f32, baseline: TextBaseline },
    RegisterFont { file_name: String, display_name: String, style: &'static str },
    SetActiveFont(String),
    Export,
}

#[derive(Debug)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
    pages: usize,
    font_size: f32,
    fonts: Vec<String>,
    active_font: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            pages: 1,
            font_size: 16.0,
            fonts: Vec::new(),
            active_font: None,
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Calls issued on each page, split at every `CreatePage`.
    pub fn calls_by_page(&self) -> Vec<&[DrawCall]> {
        let mut pages = Vec::new();
        let mut start = 0;
        for (i, call) in self.calls.iter().enumerate() {
            if *call == DrawCall::CreatePage {
                pages.push(&self.calls[start..i]);
                start = i + 1;
            }
        }
        pages.push(&self.calls[start..]);
        pages
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn create_page(&mut self) -> Result<(), RenderError> {
        self.pages += 1;
        self.calls.push(DrawCall::CreatePage);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_line_dash_pattern(&mut self, pattern: &[f32], phase: f32) {
        self.calls.push(DrawCall::SetLineDashPattern {
            pattern: pattern.to_vec(),
            phase,
        });
    }

    fn set_draw_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetDrawColor(color));
    }

    fn stroke_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.calls.push(DrawCall::StrokeRect(rect));
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        self.calls.push(DrawCall::DrawLine { x1, y1, x2, y2 });
        Ok(())
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        self.calls.push(DrawCall::SetFontSize(size));
    }

    fn set_text_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetTextColor(color));
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
        if self.active_font.is_none() {
            return Err(RenderError::NoActiveFont);
        }
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            baseline,
        });
        Ok(())
    }

    fn register_font(&mut self, font: &FontDescriptor) -> Result<(), RenderError> {
        self.fonts.push(font.display_name.clone());
        self.calls.push(DrawCall::RegisterFont {
            file_name: font.file_name.clone(),
            display_name: font.display_name.clone(),
            style: font.style.as_str(),
        });
        Ok(())
    }

    fn set_active_font(&mut self, display_name: &str) -> Result<(), RenderError> {
        if !self.fonts.iter().any(|f| f == display_name) {
            return Err(RenderError::UnknownFont(display_name.to_string()));
        }
        self.active_font = Some(display_name.to_string());
        self.calls.push(DrawCall::SetActiveFont(display_name.to_string()));
        Ok(())
    }

    fn export(&mut self, writer: &mut dyn Write) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Export);
        writeln!(writer, "pages: {}", self.pages)?;
        writeln!(writer, "calls: {}", self.calls.len())?;
        Ok(())
    }
}
