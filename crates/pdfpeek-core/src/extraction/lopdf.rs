use crate::error::PeekError;
use crate::extraction::{non_blank, PdfBackend, PdfDocument};

/// Pure-Rust extraction backend built on `lopdf`.
///
/// Pages are parsed lazily: opening only reads the document structure, and
/// each `page_text` call decodes a single page's content stream.
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        LopdfBackend
    }
}

impl Default for LopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for LopdfBackend {
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfDocument>, PeekError> {
        if pdf_bytes.is_empty() {
            return Err(PeekError::Extraction("empty input".into()));
        }
        let doc = ::lopdf::Document::load_mem(pdf_bytes)
            .map_err(|e| PeekError::Extraction(format!("invalid pdf: {e}")))?;

        // get_pages() is keyed by 1-based page number in document order.
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        tracing::debug!(pages = page_numbers.len(), "lopdf document loaded");

        Ok(Box::new(LopdfDocument { doc, page_numbers }))
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

struct LopdfDocument {
    doc: ::lopdf::Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, PeekError> {
        let number = *self.page_numbers.get(index).ok_or_else(|| {
            PeekError::Extraction(format!(
                "page index {index} out of range ({} pages)",
                self.page_numbers.len()
            ))
        })?;

        let text = self
            .doc
            .extract_text(&[number])
            .map_err(|e| PeekError::Extraction(format!("page {number}: {e}")))?;

        Ok(non_blank(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        let err = LopdfBackend::new().open(&[]).err().unwrap();
        assert!(err.to_string().contains("empty input"));
    }

    #[test]
    fn rejects_garbage_input() {
        let result = LopdfBackend::new().open(b"this is not a pdf at all");
        assert!(matches!(result, Err(PeekError::Extraction(_))));
    }
}
