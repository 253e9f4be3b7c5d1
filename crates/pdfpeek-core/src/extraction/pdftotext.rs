use crate::error::PeekError;
use crate::extraction::{non_blank, PdfBackend, PdfDocument};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

/// PDF extraction backend using pdftotext and pdfinfo (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of tables.
/// The PDF bytes are written to a temp file that lives as long as the
/// document handle; each page is extracted with its own pdftotext run.
pub struct PdftotextBackend;

impl PdftotextBackend {
    pub fn new() -> Self {
        PdftotextBackend
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdftotextBackend {
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfDocument>, PeekError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PeekError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PeekError::Extraction(e.to_string()))?;

        let output = run_tool("pdfinfo", Command::new("pdfinfo").arg(tmpfile.path()))?;
        let info = String::from_utf8_lossy(&output.stdout);
        let page_count = parse_page_count(&info).ok_or_else(|| {
            PeekError::Extraction("pdfinfo did not report a page count".into())
        })?;
        tracing::debug!(pages = page_count, "pdfinfo read page count");

        Ok(Box::new(PdftotextDocument {
            tmpfile,
            page_count,
        }))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

struct PdftotextDocument {
    tmpfile: tempfile::NamedTempFile,
    page_count: usize,
}

impl PdfDocument for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, PeekError> {
        if index >= self.page_count {
            return Err(PeekError::Extraction(format!(
                "page index {index} out of range ({} pages)",
                self.page_count
            )));
        }
        let text = extract_page(self.tmpfile.path(), index + 1)?;
        Ok(non_blank(strip_page_break(text)))
    }
}

fn extract_page(pdf_path: &Path, page_number: usize) -> Result<String, PeekError> {
    let page = page_number.to_string();
    let output = run_tool(
        "pdftotext",
        Command::new("pdftotext")
            .arg("-layout")
            .arg("-f")
            .arg(&page)
            .arg("-l")
            .arg(&page)
            .arg(pdf_path)
            .arg("-"), // output to stdout
    )?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run_tool(tool: &'static str, command: &mut Command) -> Result<Output, PeekError> {
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PeekError::PopplerNotFound { tool }
        } else {
            PeekError::Extraction(format!("{tool} failed: {e}"))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(PeekError::PdftotextFailed { tool, code, stderr });
    }
    Ok(output)
}

/// Read `Pages:` from pdfinfo output.
fn parse_page_count(info: &str) -> Option<usize> {
    info.lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|rest| rest.trim().parse().ok())
}

/// pdftotext ends every page with a form feed (\x0c).
fn strip_page_break(mut text: String) -> String {
    if text.ends_with('\x0c') {
        text.pop();
    }
    text
}
