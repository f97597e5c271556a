pub mod fixtures;

use lopdf::Document as LopdfDocument;
use renshuu::{
    DocumentRenderer, FontSource, PipelineError, RecordingRenderer, WorksheetBuilder,
    WorksheetGenerator,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// `(Subtype, BaseFont)` of every font dictionary in the file.
    pub fn fonts(&self) -> Vec<(String, String)> {
        let mut fonts = Vec::new();
        for (_, object) in self.doc.objects.iter() {
            if let Ok(dict) = object.as_dict()
                && let Ok(type_val) = dict.get(b"Type")
                && let Ok(type_name) = type_val.as_name()
                && type_name == b"Font"
                && let Ok(subtype) = dict.get(b"Subtype").and_then(|v| v.as_name())
                && let Ok(base_font) = dict.get(b"BaseFont").and_then(|v| v.as_name())
            {
                fonts.push((
                    String::from_utf8_lossy(subtype).to_string(),
                    String::from_utf8_lossy(base_font).to_string(),
                ));
            }
        }
        fonts.sort();
        fonts
    }

    /// Raw content stream of a 1-based page.
    pub fn page_content(&self, page_number: u32) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let page_id = *self
            .doc
            .get_pages()
            .get(&page_number)
            .ok_or("no such page")?;
        Ok(self.doc.get_page_content(page_id)?)
    }
}

pub fn generator() -> WorksheetGenerator {
    WorksheetBuilder::new()
        .build()
        .expect("letter paper is valid")
}

/// Runs a full generation into memory with the PDF backend. Streams are left
/// uncompressed so content can be inspected.
pub fn generate_pdf<S: FontSource>(
    source: &S,
    characters: &[String],
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let generator = generator();
    let mut renderer = generator.new_renderer().with_compression(false);
    let mut out = Vec::new();
    tokio::runtime::Runtime::new()?.block_on(generator.generate(
        source,
        characters,
        &mut renderer,
        &mut out,
    ))?;
    GeneratedPdf::from_bytes(out)
}

/// Runs a full generation against a renderer that only records calls.
pub fn generate_recorded<S: FontSource>(
    source: &S,
    characters: &[String],
) -> Result<RecordingRenderer, PipelineError> {
    let generator = generator();
    let mut renderer = RecordingRenderer::new();
    let mut out = Vec::new();
    tokio::runtime::Runtime::new()?.block_on(generator.generate(
        source,
        characters,
        &mut renderer,
        &mut out,
    ))?;
    assert!(renderer.page_count() >= 1);
    Ok(renderer)
}
