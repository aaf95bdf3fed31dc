//! User settings, stored as TOML
//!
//! ```toml
//! references_key = "references"
//!
//! [matching]
//! pass_threshold = 0.5
//! token_similarity = 0.88
//! author_weight = 0.5
//!
//! [format]
//! style = "blockquote"
//! placeholder = "@?"
//! normalize_quotes = true
//! ```

use std::path::{Path, PathBuf};

use paste_quote_core::MatchConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::FormatOptions;

/// All user-tunable behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Front-matter key holding the bibliography
    pub references_key: String,
    pub matching: MatchConfig,
    pub format: FormatOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            references_key: "references".to_string(),
            matching: MatchConfig::default(),
            format: FormatOptions::default(),
        }
    }
}

impl Settings {
    /// `<config dir>/paste-quote/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paste-quote").join("config.toml"))
    }

    /// Load settings from `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no settings at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let settings: Settings = toml::from_str(&contents)?;
        settings.matching.validate()?;
        Ok(settings)
    }

    /// Load from [`Settings::default_path`], falling back to the defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => {
                tracing::warn!("no config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Write settings to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::format::QuoteStyle;

    #[test]
    fn partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("[format]\nstyle = \"inline\"\n").unwrap();
        assert_eq!(settings.format.style, QuoteStyle::Inline);
        assert_eq!(settings.format.placeholder, "@?");
        assert_eq!(settings.references_key, "references");
        assert_eq!(settings.matching, MatchConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\npass_threshold = 1.5\n").unwrap();
        assert!(matches!(Settings::load(&path), Err(NotesError::Core(_))));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "references_key = [").unwrap();
        assert!(matches!(Settings::load(&path), Err(NotesError::SettingsParse(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let settings = Settings {
            references_key: "bibliography".to_string(),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
