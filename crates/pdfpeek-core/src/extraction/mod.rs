pub mod lopdf;
pub mod pdftotext;

use crate::error::PeekError;

/// An opened PDF whose pages can be queried one at a time.
///
/// Page indices are zero-based and follow the document's own page order.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Text of the page at `index`. `Ok(None)` means the page has no
    /// extractable text, which is not an error.
    fn page_text(&self, index: usize) -> Result<Option<String>, PeekError>;
}

/// Trait for PDF text extraction backends.
pub trait PdfBackend: Send + Sync {
    /// Parse PDF bytes into a document handle.
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfDocument>, PeekError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Backends emit line breaks or form feeds for pages without text objects;
/// those count as having no extractable text. This is intentionally stricter
/// than an emptiness check: a page of pure whitespace is reported as textless.
pub(crate) fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Backends selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Lopdf,
    Pdftotext,
}

impl BackendKind {
    pub fn build(self) -> Box<dyn PdfBackend> {
        match self {
            BackendKind::Lopdf => Box::new(self::lopdf::LopdfBackend::new()),
            BackendKind::Pdftotext => Box::new(self::pdftotext::PdftotextBackend::new()),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = PeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lopdf" => Ok(BackendKind::Lopdf),
            "pdftotext" => Ok(BackendKind::Pdftotext),
            other => Err(PeekError::InvalidConfig(format!(
                "unknown backend '{other}' (expected lopdf or pdftotext)"
            ))),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Lopdf => write!(f, "lopdf"),
            BackendKind::Pdftotext => write!(f, "pdftotext"),
        }
    }
}
