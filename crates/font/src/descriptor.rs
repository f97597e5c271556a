use renshuu_traits::SharedFontData;
use std::fmt;

/// Style tag a font is registered under. Worksheets only use one face, so
/// this is always `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
        }
    }
}

/// Everything a renderer needs to embed and select the user's font.
///
/// Built once per generation run and handed to the renderer; the pipeline
/// does not keep it afterwards.
#[derive(Clone)]
pub struct FontDescriptor {
    /// Raw font file contents.
    pub data: SharedFontData,
    /// Name of the uploaded file; renderers use it as the font's file id.
    pub file_name: String,
    /// Resolved name the font is registered and selected under.
    pub display_name: String,
    pub style: FontStyle,
    /// Number of glyphs, known only when the font was fully parsed.
    pub glyph_count: Option<u16>,
}

impl FontDescriptor {
    pub fn new(
        data: SharedFontData,
        file_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            data,
            file_name: file_name.into(),
            display_name: display_name.into(),
            style: FontStyle::Normal,
            glyph_count: None,
        }
    }

    pub fn with_glyph_count(mut self, glyph_count: Option<u16>) -> Self {
        self.glyph_count = glyph_count;
        self
    }
}

impl fmt::Debug for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontDescriptor")
            .field("data_len", &self.data.len())
            .field("file_name", &self.file_name)
            .field("display_name", &self.display_name)
            .field("style", &self.style)
            .field("glyph_count", &self.glyph_count)
            .finish()
    }
}
