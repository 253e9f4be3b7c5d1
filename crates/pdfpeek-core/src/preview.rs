use crate::config::PeekConfig;
use crate::error::PeekError;
use crate::extraction::PdfBackend;
use crate::text::{heavy_rule, light_rule, truncate_chars};
use std::io::Write;
use std::path::Path;

/// What a completed preview printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewSummary {
    pub page_count: usize,
    /// Page sections printed, with or without text.
    pub pages_shown: usize,
    pub pages_without_text: usize,
    /// Pages past the preview limit that were never read.
    pub pages_skipped: usize,
}

/// File name, page count and a heavy rule, printed once a document is open.
pub(crate) fn write_header(
    out: &mut dyn Write,
    path: &Path,
    page_count: usize,
) -> Result<(), PeekError> {
    writeln!(out, "PDF file: {}", crate::display_name(path))?;
    writeln!(out, "Pages: {page_count}")?;
    writeln!(out, "{}", heavy_rule())?;
    Ok(())
}

/// Print a bounded preview of one PDF to `out`.
///
/// Pages with index `0..=page_preview_limit` are printed; each page's text is
/// cut to `page_char_limit` characters. Any error aborts the whole file.
pub fn preview_document(
    path: &Path,
    backend: &dyn PdfBackend,
    config: &PeekConfig,
    out: &mut dyn Write,
) -> Result<PreviewSummary, PeekError> {
    let doc = {
        let bytes = crate::read_pdf(path)?;
        backend.open(&bytes)?
    };
    let page_count = doc.page_count();

    write_header(out, path, page_count)?;

    let mut summary = PreviewSummary {
        page_count,
        ..Default::default()
    };

    for index in 0..page_count {
        if index > config.page_preview_limit {
            summary.pages_skipped = page_count - index;
            writeln!(
                out,
                "... skipping remaining {} page(s) ...",
                summary.pages_skipped
            )?;
            break;
        }

        let page_number = index + 1;
        match doc.page_text(index)? {
            Some(text) if !text.is_empty() => {
                writeln!(out, "--- Page {page_number} ---")?;
                writeln!(out, "{}", truncate_chars(&text, config.page_char_limit))?;
                writeln!(out, "...")?;
            }
            _ => {
                writeln!(out, "Page {page_number} has no text.")?;
                summary.pages_without_text += 1;
            }
        }
        writeln!(out, "{}", light_rule())?;
        summary.pages_shown += 1;
    }

    tracing::debug!(
        path = %path.display(),
        shown = summary.pages_shown,
        skipped = summary.pages_skipped,
        "preview complete"
    );
    Ok(summary)
}

/// Preview one PDF, absorbing any failure into the returned flag.
///
/// On error a diagnostic is printed to `out` and `false` is returned.
pub fn extract_preview(
    path: &Path,
    backend: &dyn PdfBackend,
    config: &PeekConfig,
    out: &mut dyn Write,
) -> bool {
    match preview_document(path, backend, config, out) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "preview failed");
            let _ = writeln!(out, "Error: {e}");
            false
        }
    }
}
