use crate::config::PeekConfig;
use crate::error::PeekError;
use crate::extraction::PdfBackend;
use crate::preview::extract_preview;
use crate::text::heavy_rule;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Totals for one batch preview run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub found: usize,
    pub succeeded: usize,
    pub failed: Vec<PathBuf>,
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// PDF files directly inside `dir`, sorted by name.
pub fn find_pdfs(dir: &Path) -> Result<Vec<PathBuf>, PeekError> {
    let mut pdfs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_pdf(&path) {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

/// Preview every PDF in `dir`, one after another.
///
/// A file that fails is reported and skipped; the run continues. Only a
/// failure to list the directory itself is returned as an error.
pub fn preview_directory(
    dir: &Path,
    backend: &dyn PdfBackend,
    config: &PeekConfig,
    out: &mut dyn Write,
) -> Result<BatchReport, PeekError> {
    let pdfs = find_pdfs(dir)?;
    if pdfs.is_empty() {
        writeln!(out, "No PDF files found.")?;
        return Ok(BatchReport::default());
    }
    writeln!(out, "Found {} PDF file(s).", pdfs.len())?;

    preview_files(&pdfs, backend, config, out)
}

/// Preview the given files in order, continuing past failures.
pub fn preview_files(
    files: &[PathBuf],
    backend: &dyn PdfBackend,
    config: &PeekConfig,
    out: &mut dyn Write,
) -> Result<BatchReport, PeekError> {
    let mut report = BatchReport {
        found: files.len(),
        ..Default::default()
    };

    for path in files {
        writeln!(out)?;
        writeln!(out, "{}", heavy_rule())?;
        tracing::debug!(path = %path.display(), backend = backend.backend_name(), "previewing");

        if extract_preview(path, backend, config, out) {
            report.succeeded += 1;
        } else {
            writeln!(out, "Failed to process {}.", crate::display_name(path))?;
            report.failed.push(path.clone());
        }
    }

    tracing::info!(
        found = report.found,
        succeeded = report.succeeded,
        failed = report.failed.len(),
        "batch preview finished"
    );
    Ok(report)
}
