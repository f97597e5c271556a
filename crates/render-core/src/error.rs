use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Font error: {0}")]
    Font(String),
    #[error("No font registered under '{0}'")]
    UnknownFont(String),
    #[error("Text drawn before a font was selected")]
    NoActiveFont,
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
