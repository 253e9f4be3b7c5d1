use pdfpeek_core::batch::{preview_directory, preview_files};
use pdfpeek_core::config::PeekConfig;
use pdfpeek_core::error::PeekError;

pub fn run(config: &PeekConfig) -> Result<(), PeekError> {
    let source = super::require_source(config)?;
    let backend = config.backend.build();
    tracing::info!(source = %source.display(), backend = %config.backend, "starting preview");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Per-file failures are already reported in the output and do not
    // affect the exit status.
    let report = if source.is_dir() {
        preview_directory(&source, backend.as_ref(), config, &mut out)?
    } else if source.is_file() {
        preview_files(&[source.clone()], backend.as_ref(), config, &mut out)?
    } else {
        return Err(PeekError::FileNotFound(source));
    };

    if !report.failed.is_empty() {
        tracing::warn!(
            failed = report.failed.len(),
            found = report.found,
            "some files could not be previewed"
        );
    }
    Ok(())
}
