pub mod extract;
pub mod preview;

use pdfpeek_core::config::PeekConfig;
use pdfpeek_core::error::PeekError;
use std::path::PathBuf;

fn require_source(config: &PeekConfig) -> Result<PathBuf, PeekError> {
    config.source.clone().ok_or_else(|| {
        PeekError::InvalidConfig(
            "no source given (pass a path or set `source` in the config file)".into(),
        )
    })
}
