use crate::config::PeekConfig;
use crate::error::PeekError;
use crate::extraction::PdfBackend;
use crate::preview::write_header;
use crate::text::{page_delimiter, truncate_chars};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extract every page's text, each non-empty page preceded by its delimiter.
///
/// The document header is printed to `out` before the pages are read. Pages
/// without text contribute nothing. The result may be empty.
pub fn full_text(
    path: &Path,
    backend: &dyn PdfBackend,
    out: &mut dyn Write,
) -> Result<String, PeekError> {
    let doc = {
        let bytes = crate::read_pdf(path)?;
        backend.open(&bytes)?
    };
    write_header(out, path, doc.page_count())?;

    let mut all_text = String::new();
    for index in 0..doc.page_count() {
        if let Some(text) = doc.page_text(index)? {
            if text.is_empty() {
                continue;
            }
            all_text.push_str(&page_delimiter(index + 1));
            all_text.push_str(&text);
            all_text.push('\n');
        }
    }

    tracing::debug!(
        path = %path.display(),
        pages = doc.page_count(),
        chars = all_text.chars().count(),
        "full extraction complete"
    );
    Ok(all_text)
}

/// Extract the full text of one PDF, absorbing any failure.
///
/// On error a diagnostic is printed to `out` and `None` is returned; text
/// gathered before the failure is discarded.
pub fn extract_full(path: &Path, backend: &dyn PdfBackend, out: &mut dyn Write) -> Option<String> {
    match full_text(path, backend, out) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "extraction failed");
            let _ = writeln!(out, "Error: {e}");
            None
        }
    }
}

/// `report.pdf` with suffix `.txt` becomes `report.txt` in the same directory.
pub fn derive_output_path(source: &Path, suffix: &str) -> PathBuf {
    source.with_extension(suffix.trim_start_matches('.'))
}

/// Outcome of a single-file extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The text was written to this path.
    Written(PathBuf),
    /// The source does not exist; nothing was attempted.
    NotFound,
    /// Extraction failed; nothing was written.
    Failed,
}

/// Extract one PDF and write its text next to it.
///
/// Checks that the source exists and that the output path differs from it
/// before extracting, overwrites any previous output, then prints the output
/// path and the first `summary_char_limit` characters of the text.
pub fn extract_to_file(
    source: &Path,
    backend: &dyn PdfBackend,
    config: &PeekConfig,
    out: &mut dyn Write,
) -> Result<FileOutcome, PeekError> {
    if !source.exists() {
        writeln!(out, "File not found: {}", source.display())?;
        return Ok(FileOutcome::NotFound);
    }

    let output_path = derive_output_path(source, &config.output_suffix);
    if output_path.as_path() == source {
        return Err(PeekError::InvalidConfig(format!(
            "output suffix '{}' would overwrite the source file {}",
            config.output_suffix,
            source.display()
        )));
    }

    let Some(text) = extract_full(source, backend, out) else {
        return Ok(FileOutcome::Failed);
    };

    std::fs::write(&output_path, &text)?;
    tracing::info!(
        source = %source.display(),
        output = %output_path.display(),
        bytes = text.len(),
        "wrote extracted text"
    );

    writeln!(out, "Saved text to {}", output_path.display())?;
    writeln!(out)?;
    writeln!(out, "First {} characters:", config.summary_char_limit)?;
    writeln!(out, "{}", truncate_chars(&text, config.summary_char_limit))?;

    Ok(FileOutcome::Written(output_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(
            derive_output_path(Path::new("/ref/report.pdf"), ".txt"),
            PathBuf::from("/ref/report.txt")
        );
        assert_eq!(
            derive_output_path(Path::new("plan_v4.PDF"), "txt"),
            PathBuf::from("plan_v4.txt")
        );
    }

    #[test]
    fn output_path_only_touches_final_extension() {
        assert_eq!(
            derive_output_path(Path::new("/a.pdf.d/summit.pdf"), ".txt"),
            PathBuf::from("/a.pdf.d/summit.txt")
        );
        assert_eq!(
            derive_output_path(Path::new("notes"), ".txt"),
            PathBuf::from("notes.txt")
        );
    }
}
