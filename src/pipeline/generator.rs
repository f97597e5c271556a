// src/pipeline/generator.rs
use super::drawing::draw_block;
use crate::error::PipelineError;
use log::{debug, info};
use renshuu_font::{FontDescriptor, FontParser, ParseOptions, resolve_font_name};
use renshuu_layout::GridLayoutEngine;
use renshuu_render_core::DocumentRenderer;
use renshuu_render_lopdf::LopdfRenderer;
use renshuu_traits::FontSource;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tokio::runtime::Builder;

/// File name the CLI writes to when no output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "renshuu-out.pdf";

/// Summary of one assembled worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub pages: usize,
    pub characters: usize,
    /// Name the font was registered under.
    pub font_name: String,
    /// Glyphs in the font, when it was parsed with `low_memory` off.
    pub glyph_count: Option<u16>,
}

/// Generates worksheets for one paper profile.
///
/// A run has two phases. [`load_font`](Self::load_font) is the only
/// asynchronous step: it reads and names the font. [`assemble`](Self::assemble)
/// then issues every drawing call synchronously, in character order. Nothing
/// touches the renderer until the font has been loaded successfully.
pub struct WorksheetGenerator {
    layout: GridLayoutEngine,
    parser: Box<dyn FontParser>,
    parse_options: ParseOptions,
    output_name: String,
}

impl WorksheetGenerator {
    pub(crate) fn new(
        layout: GridLayoutEngine,
        parser: Box<dyn FontParser>,
        parse_options: ParseOptions,
        output_name: String,
    ) -> Self {
        Self {
            layout,
            parser,
            parse_options,
            output_name,
        }
    }

    pub fn layout(&self) -> &GridLayoutEngine {
        &self.layout
    }

    pub fn parse_options(&self) -> ParseOptions {
        self.parse_options
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// A PDF renderer sized for this generator's paper.
    pub fn new_renderer(&self) -> LopdfRenderer {
        let paper = self.layout.paper();
        LopdfRenderer::new(paper.page_width, paper.page_height)
    }

    /// Reads the font once, parses it and resolves the name it will be
    /// registered under. Missing name metadata falls back to
    /// [`renshuu_font::UNKNOWN_FONT_NAME`] with a warning.
    pub async fn load_font<S: FontSource>(&self, source: &S) -> Result<FontDescriptor, PipelineError> {
        let file_name = source.file_name();
        info!("Loading font '{}'", file_name);

        let data = source.read_bytes().await?;
        let parsed = self.parser.parse(&data, file_name, self.parse_options)?;
        let display_name = resolve_font_name(parsed.names.as_ref(), file_name);
        debug!(
            "Font '{}' resolved to '{}' ({} bytes, {} units/em)",
            file_name,
            display_name,
            data.len(),
            parsed.metrics.units_per_em
        );
        if let Some(count) = parsed.glyph_count {
            info!("Font '{}' has {} glyphs", display_name, count);
        }

        Ok(FontDescriptor::new(data, file_name, display_name).with_glyph_count(parsed.glyph_count))
    }

    /// Registers `font` and draws one block per character, starting a new
    /// page before every ninth, seventeenth, ... character.
    pub fn assemble<R, C>(
        &self,
        font: &FontDescriptor,
        characters: &[C],
        renderer: &mut R,
    ) -> Result<AssemblyReport, PipelineError>
    where
        R: DocumentRenderer + ?Sized,
        C: AsRef<str>,
    {
        let start = Instant::now();
        renderer.register_font(font)?;
        renderer.set_active_font(&font.display_name)?;

        for (index, character) in characters.iter().enumerate() {
            if self.layout.starts_new_page(index) {
                renderer.create_page()?;
                debug!("Page {} started at character #{}", renderer.page_count(), index);
            }
            let block = self.layout.layout_block(index);
            draw_block(&mut *renderer, &block, character.as_ref())?;
        }

        let report = AssemblyReport {
            pages: renderer.page_count(),
            characters: characters.len(),
            font_name: font.display_name.clone(),
            glyph_count: font.glyph_count,
        };
        info!(
            "Assembled {} character(s) on {} page(s) in {:.2?}",
            report.characters,
            report.pages,
            start.elapsed()
        );
        Ok(report)
    }

    /// Loads the font, assembles the worksheet and exports it to `destination`.
    pub async fn generate<S, R, C>(
        &self,
        source: &S,
        characters: &[C],
        renderer: &mut R,
        destination: &mut dyn Write,
    ) -> Result<AssemblyReport, PipelineError>
    where
        S: FontSource,
        R: DocumentRenderer + ?Sized,
        C: AsRef<str>,
    {
        let font = self.load_font(source).await?;
        let report = self.assemble(&font, characters, &mut *renderer)?;
        renderer.export(destination)?;
        Ok(report)
    }

    /// A convenience method that runs a whole generation and writes the PDF
    /// to `path`. The file is only created once the font has loaded.
    pub fn generate_to_file<S, C, P>(
        &self,
        source: &S,
        characters: &[C],
        path: P,
    ) -> Result<AssemblyReport, PipelineError>
    where
        S: FontSource,
        C: AsRef<str>,
        P: AsRef<Path>,
    {
        let rt = Builder::new_current_thread().enable_all().build()?;
        let font = rt.block_on(self.load_font(source))?;

        let mut renderer = self.new_renderer();
        let report = self.assemble(&font, characters, &mut renderer)?;

        let output_path = path.as_ref();
        if let Some(parent_dir) = output_path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir)?;
            }
        }
        let file = fs::File::create(output_path)?;
        let mut writer = io::BufWriter::new(file);
        renderer.export(&mut writer)?;
        writer.flush()?;

        info!("Wrote {}", output_path.display());
        Ok(report)
    }
}
