use pdfpeek_core::config::PeekConfig;
use pdfpeek_core::error::PeekError;
use pdfpeek_core::full::{extract_to_file, FileOutcome};

pub fn run(config: &PeekConfig) -> Result<(), PeekError> {
    let source = super::require_source(config)?;
    let backend = config.backend.build();
    tracing::info!(source = %source.display(), backend = %config.backend, "starting extract");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = extract_to_file(&source, backend.as_ref(), config, &mut out)?;
    if let FileOutcome::Written(path) = outcome {
        tracing::debug!(output = %path.display(), "extraction finished");
    }
    Ok(())
}
