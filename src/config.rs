// WHY: the source document's paths, front-matter length and boilerplate are data,
// so they live here with the known pamphlet's values as defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cleaning::OHAIR_LIBRARY_NOTICE;

pub const DEFAULT_INPUT_PATH: &str = "T5vsGemma/data/ONE-HUNDRED-AND-SEVENTY-BIBLE-LESSONS.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "T5vsGemma/data/cleaned_lessons.txt";
/// Lines of title page and table of contents before the first lesson
pub const DEFAULT_DISCARD_OFFSET: usize = 442;
/// Lesson count of the known source pamphlet
pub const DEFAULT_EXPECTED_LESSONS: usize = 170;

/// Everything one extraction run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Leading input lines dropped before cleaning
    pub discard_offset: usize,
    /// Exact substrings removed from every line
    pub blacklist: Vec<String>,
    /// Only compared against and logged, never enforced
    pub expected_lessons: Option<usize>,
    /// Read through a memory map instead of async buffered I/O
    pub use_mmap: bool,
    pub buffer_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            discard_offset: DEFAULT_DISCARD_OFFSET,
            blacklist: vec![OHAIR_LIBRARY_NOTICE.to_string()],
            expected_lessons: Some(DEFAULT_EXPECTED_LESSONS),
            use_mmap: false,
            buffer_size: 8192,
        }
    }
}

impl PipelineConfig {
    /// Parse a TOML document; missing keys keep their defaults, unknown keys are rejected
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid pipeline config")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(?config, "Loaded pipeline config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_source_document() {
        let config = PipelineConfig::default();
        assert_eq!(config.discard_offset, 442);
        assert_eq!(config.expected_lessons, Some(170));
        assert_eq!(config.blacklist, vec![OHAIR_LIBRARY_NOTICE.to_string()]);
        assert!(config.input_path.ends_with("ONE-HUNDRED-AND-SEVENTY-BIBLE-LESSONS.txt"));
        assert!(config.output_path.ends_with("cleaned_lessons.txt"));
        assert!(!config.use_mmap);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PipelineConfig::from_toml_str(
            r#"
            input_path = "book.txt"
            discard_offset = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.input_path, PathBuf::from("book.txt"));
        assert_eq!(config.discard_offset, 3);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.expected_lessons, Some(DEFAULT_EXPECTED_LESSONS));
    }

    #[test]
    fn test_full_toml() {
        let config = PipelineConfig::from_toml_str(
            r#"
            input_path = "in.txt"
            output_path = "out.txt"
            discard_offset = 0
            blacklist = ["Page header", "Footer"]
            expected_lessons = 12
            use_mmap = true
            buffer_size = 4096
            "#,
        )
        .unwrap();

        assert_eq!(config.blacklist, vec!["Page header", "Footer"]);
        assert_eq!(config.expected_lessons, Some(12));
        assert!(config.use_mmap);
        assert_eq!(config.buffer_size, 4096);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(PipelineConfig::from_toml_str("discard_offset = \"many\"").is_err());
    }

    #[test]
    fn test_unknown_key_is_error() {
        let err = PipelineConfig::from_toml_str("discard_ofset = 3").unwrap_err();
        assert!(format!("{err:#}").contains("discard_ofset"), "unexpected error: {err:#}");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lessons.toml");
        std::fs::write(&path, "discard_offset = 7\n").unwrap();

        let config = PipelineConfig::load(&path).unwrap();
        assert_eq!(config.discard_offset, 7);

        assert!(PipelineConfig::load(&temp_dir.path().join("missing.toml")).is_err());
    }
}
