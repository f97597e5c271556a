// src/pipeline/builder.rs
use super::generator::{DEFAULT_OUTPUT_NAME, WorksheetGenerator};
use crate::error::PipelineError;
use renshuu_font::{FontParser, ParseOptions, TtfFontParser};
use renshuu_layout::{GridLayoutEngine, PaperProfile};

/// A builder for creating a `WorksheetGenerator`.
pub struct WorksheetBuilder {
    paper: PaperProfile,
    low_memory: bool,
    output_name: String,
    parser: Box<dyn FontParser>,
}

impl Default for WorksheetBuilder {
    fn default() -> Self {
        Self {
            paper: PaperProfile::letter(),
            low_memory: true,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            parser: Box::new(TtfFontParser),
        }
    }
}

impl WorksheetBuilder {
    /// Creates a builder for US Letter worksheets.
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses a custom paper profile. It is validated by [`build`](Self::build).
    pub fn with_paper(mut self, paper: PaperProfile) -> Self {
        self.paper = paper;
        self
    }

    /// Selects a built-in paper profile by name (case-insensitive).
    pub fn with_paper_name(self, name: &str) -> Result<Self, PipelineError> {
        let paper = PaperProfile::by_name(name).ok_or_else(|| {
            PipelineError::Config(format!(
                "Unknown paper '{}'. Available: {}",
                name,
                PaperProfile::preset_names().join(", ")
            ))
        })?;
        Ok(self.with_paper(paper))
    }

    /// Only read the parts of the font needed to name it. On by default;
    /// turning it off also counts the font's glyphs.
    pub fn with_low_memory(mut self, low_memory: bool) -> Self {
        self.low_memory = low_memory;
        self
    }

    /// File name used by [`WorksheetGenerator::generate_to_file`] callers that
    /// do not pick their own path.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Replaces the `ttf-parser` based font parser.
    pub fn with_font_parser(mut self, parser: impl FontParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Consumes the builder and creates the generator.
    pub fn build(self) -> Result<WorksheetGenerator, PipelineError> {
        if self.output_name.trim().is_empty() {
            return Err(PipelineError::Config(
                "Output name must not be empty".to_string(),
            ));
        }
        let layout = GridLayoutEngine::new(self.paper)?;
        Ok(WorksheetGenerator::new(
            layout,
            self.parser,
            ParseOptions {
                low_memory: self.low_memory,
            },
            self.output_name,
        ))
    }
}
