pub mod batch;
pub mod config;
pub mod error;
pub mod extraction;
pub mod full;
pub mod preview;
pub mod text;

use error::PeekError;
use std::io::Read;
use std::path::Path;

pub use batch::{preview_directory, BatchReport};
pub use config::PeekConfig;
pub use full::{extract_full, extract_to_file, FileOutcome};
pub use preview::{extract_preview, PreviewSummary};

/// Read a PDF's bytes. The file handle is closed before returning, on
/// success and on error alike.
pub(crate) fn read_pdf(path: &Path) -> Result<Vec<u8>, PeekError> {
    let mut file = std::fs::File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// File name for console headers, falling back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
