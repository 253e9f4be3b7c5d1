use crate::error::PeekError;
use crate::extraction::BackendKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".pdfpeek.toml";

pub const DEFAULT_PAGE_PREVIEW_LIMIT: usize = 10;
pub const DEFAULT_PAGE_CHAR_LIMIT: usize = 2000;
pub const DEFAULT_SUMMARY_CHAR_LIMIT: usize = 3000;
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".txt";

/// Partial settings, as read from a TOML file or collected from CLI flags.
/// Every field is optional so layers can be merged over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source: Option<PathBuf>,
    pub page_preview_limit: Option<usize>,
    pub page_char_limit: Option<usize>,
    pub summary_char_limit: Option<usize>,
    pub output_suffix: Option<String>,
    pub backend: Option<BackendKind>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PeekConfig {
    /// Directory (batch preview) or file (single-file extraction).
    pub source: Option<PathBuf>,
    /// Highest zero-based page index printed in preview mode.
    pub page_preview_limit: usize,
    /// Characters shown per page in preview mode.
    pub page_char_limit: usize,
    /// Characters of the single-file preview printed after writing.
    pub summary_char_limit: usize,
    /// Extension (with leading dot) of the single-file output.
    pub output_suffix: String,
    pub backend: BackendKind,
}

impl Default for PeekConfig {
    fn default() -> Self {
        PeekConfig {
            source: None,
            page_preview_limit: DEFAULT_PAGE_PREVIEW_LIMIT,
            page_char_limit: DEFAULT_PAGE_CHAR_LIMIT,
            summary_char_limit: DEFAULT_SUMMARY_CHAR_LIMIT,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            backend: BackendKind::default(),
        }
    }
}

impl PeekConfig {
    /// Overlay the values present in `layer`; absent values keep the current ones.
    pub fn apply(self, layer: ConfigFile) -> Self {
        PeekConfig {
            source: layer.source.or(self.source),
            page_preview_limit: layer.page_preview_limit.unwrap_or(self.page_preview_limit),
            page_char_limit: layer.page_char_limit.unwrap_or(self.page_char_limit),
            summary_char_limit: layer.summary_char_limit.unwrap_or(self.summary_char_limit),
            output_suffix: layer.output_suffix.unwrap_or(self.output_suffix),
            backend: layer.backend.unwrap_or(self.backend),
        }
    }

    /// Normalize the output suffix and reject unusable values.
    pub fn validated(mut self) -> Result<Self, PeekError> {
        self.output_suffix = normalize_suffix(&self.output_suffix)?;
        Ok(self)
    }
}

/// Ensure the suffix starts with a dot: `txt` becomes `.txt`.
pub fn normalize_suffix(suffix: &str) -> Result<String, PeekError> {
    let bare = suffix.trim().trim_start_matches('.');
    if bare.is_empty() {
        return Err(PeekError::InvalidConfig(format!(
            "output suffix '{suffix}' has no extension"
        )));
    }
    if bare.contains(['/', '\\']) {
        return Err(PeekError::InvalidConfig(format!(
            "output suffix '{suffix}' must not contain path separators"
        )));
    }
    Ok(format!(".{bare}"))
}

/// Load settings from a TOML file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, PeekError> {
    let content = std::fs::read_to_string(path).map_err(|e| PeekError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse settings from a TOML string.
pub fn parse_config(toml_str: &str, source: &Path) -> Result<ConfigFile, PeekError> {
    toml::from_str(toml_str).map_err(|e| PeekError::ConfigLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Find the config file to use.
///
/// An explicit path must exist. Without one, `.pdfpeek.toml` in `dir` is used
/// when present, otherwise the defaults apply.
pub fn discover_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile, PeekError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return load_config_file(path);
    }

    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "loading config");
        load_config_file(&candidate)
    } else {
        Ok(ConfigFile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let config = PeekConfig::default();
        assert_eq!(config.page_preview_limit, 10);
        assert_eq!(config.page_char_limit, 2000);
        assert_eq!(config.summary_char_limit, 3000);
        assert_eq!(config.output_suffix, ".txt");
        assert_eq!(config.backend, BackendKind::Lopdf);
        assert!(config.source.is_none());
    }

    #[test]
    fn parse_partial_toml() {
        let file = parse_config(
            r#"
source = "/srv/reference"
page_char_limit = 500
backend = "pdftotext"
"#,
            Path::new("test.toml"),
        )
        .unwrap();

        assert_eq!(file.source, Some(PathBuf::from("/srv/reference")));
        assert_eq!(file.page_char_limit, Some(500));
        assert_eq!(file.backend, Some(BackendKind::Pdftotext));
        assert_eq!(file.page_preview_limit, None);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = parse_config("pages = 3\n", Path::new("bad.toml")).unwrap_err();
        match err {
            PeekError::ConfigLoad { path, .. } => assert_eq!(path, PathBuf::from("bad.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn later_layers_override_earlier_ones() {
        let file = ConfigFile {
            page_preview_limit: Some(3),
            output_suffix: Some(".md".into()),
            ..Default::default()
        };
        let flags = ConfigFile {
            page_preview_limit: Some(5),
            ..Default::default()
        };

        let config = PeekConfig::default().apply(file).apply(flags);
        assert_eq!(config.page_preview_limit, 5);
        assert_eq!(config.output_suffix, ".md");
        assert_eq!(config.page_char_limit, 2000);
    }

    #[test]
    fn suffix_normalization() {
        assert_eq!(normalize_suffix("txt").unwrap(), ".txt");
        assert_eq!(normalize_suffix(".txt").unwrap(), ".txt");
        assert_eq!(normalize_suffix("out.txt").unwrap(), ".out.txt");
        assert!(normalize_suffix(".").is_err());
        assert!(normalize_suffix("").is_err());
        assert!(normalize_suffix("a/b").is_err());
    }

    #[test]
    fn discover_prefers_explicit_path_and_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            discover_config(None, dir.path()).unwrap(),
            ConfigFile::default()
        );

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "page_char_limit = 7\n").unwrap();
        assert_eq!(
            discover_config(None, dir.path()).unwrap().page_char_limit,
            Some(7)
        );

        let missing = dir.path().join("missing.toml");
        assert!(discover_config(Some(&missing), dir.path()).is_err());
    }
}
