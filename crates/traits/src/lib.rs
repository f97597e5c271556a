pub mod source;

pub use source::{FontSource, InMemoryFontSource, ResourceError, SharedFontData};
