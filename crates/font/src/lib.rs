//! Font handling for worksheets: parse an uploaded font file and derive the
//! name it is registered under.
//!
//! The [`names`] module is pure and works on already-parsed metadata, so
//! the fallback rules can be tested without font files. The [`parser`]
//! module fills that metadata from a real font with `ttf-parser`.

mod descriptor;
mod error;
pub mod names;
pub mod parser;
#[cfg(any(test, feature = "test-support"))]
pub mod test_font;

pub use descriptor::{FontDescriptor, FontStyle};
pub use error::FontError;
pub use names::{
    FallbackReason, FontNameResolution, FontNames, LanguageMap, NameTable, UNKNOWN_FONT_NAME,
    resolve_font_name, try_resolve_font_name,
};
pub use parser::{FontMetrics, FontParser, ParseOptions, ParsedFont, TtfFontParser};
