use crate::utils::error::{LookupError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Explicit presentation configuration, passed to the render step instead of
/// living in shared mutable state. Serialized through to JSON output so a
/// downstream UI sees the same choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub theme: Theme,
    pub show_icons: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_icons: true,
        }
    }
}

/// On-disk shape: a `[display]` table, so the file stays open for future
/// sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RenderConfigFile {
    #[serde(default)]
    display: RenderConfig,
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RenderConfigFile = toml::from_str(content)?;
        let config = file.display;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<()> {
        // Both fields are closed enums/bools; nothing further to check yet.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.theme, Theme::Light);
        assert!(config.show_icons);
    }

    #[test]
    fn test_parse_display_table() {
        let config = RenderConfig::from_toml_str(
            "[display]\ntheme = \"dark\"\nshow_icons = false\n",
        )
        .unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.show_icons);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = RenderConfig::from_toml_str("[display]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.show_icons);

        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(RenderConfig::from_toml_str("[display]\ntheme = \"sepia\"\n").is_err());
    }
}
