use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PeekError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("{tool} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PopplerNotFound { tool: &'static str },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    PdftotextFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
