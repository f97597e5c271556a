//! Printable handwriting practice worksheets.
//!
//! Give [`WorksheetGenerator`] a font file and a sequence of characters and it
//! draws one block of tracing grids per character, eight blocks to a page,
//! with every copy of the character set in the supplied font.
//!
//! ```no_run
//! use renshuu::{FilesystemFontSource, WorksheetBuilder};
//!
//! let generator = WorksheetBuilder::new().build()?;
//! let font = FilesystemFontSource::new("KleeOne-Regular.ttf");
//! let report = generator.generate_to_file(&font, &["あ", "い", "う"], "renshuu-out.pdf")?;
//! println!("{} page(s)", report.pages);
//! # Ok::<(), renshuu::PipelineError>(())
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    AssemblyReport, DEFAULT_OUTPUT_NAME, WorksheetBuilder, WorksheetGenerator, draw_block,
    draw_box, place_text,
};

pub use renshuu_font::{FontDescriptor, FontNames, ParseOptions, UNKNOWN_FONT_NAME};
pub use renshuu_layout::{GridLayoutEngine, PaperProfile};
pub use renshuu_render_core::{DocumentRenderer, RecordingRenderer, RenderError, TextBaseline};
pub use renshuu_render_lopdf::LopdfRenderer;
pub use renshuu_resource::{FilesystemFontSource, InMemoryFontSource};
pub use renshuu_traits::FontSource;
