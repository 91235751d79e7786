use crate::error::{Result, SiftError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// Runtime configuration.
///
/// Everything here is presentation or naming, not matching semantics:
/// sheet names, the default output filename, and the highlight fill
/// color the workbook writer applies to matched spans.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub product_sheet: String,
    pub rules_sheet: String,
    pub output_name: String,
    /// RGB fill for highlighted spans, e.g. 0xFFFF00 for yellow.
    pub highlight_color: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            product_sheet: "Product detail".to_string(),
            rules_sheet: "Rules".to_string(),
            output_name: "classified_products.xlsx".to_string(),
            highlight_color: 0xFFFF00,
        }
    }
}

impl Config {
    /// Load configuration: explicit override, then the `SIFT_CONFIG`
    /// environment variable, then `sift/sift.toml` in the XDG config
    /// directories, then built-in defaults.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let path = if let Some(path) = config_override {
            Some(path)
        } else if let Ok(env_path) = std::env::var("SIFT_CONFIG") {
            Some(PathBuf::from(env_path))
        } else {
            BaseDirectories::with_prefix("sift")
                .ok()
                .and_then(|xdg| xdg.find_config_file("sift.toml"))
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SiftError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| SiftError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}
