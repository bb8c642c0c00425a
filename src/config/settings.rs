//! Form settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::form::Modality;

/// Default form title.
pub const DEFAULT_TITLE: &str = "Edit Issue";

/// Settings for the issue form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Title shown in the form border.
    pub title: String,
    /// How the form blocks the host while open.
    pub modality: Modality,
    /// Whether h/l also move pickers and tabs.
    pub vim_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            modality: Modality::default(),
            vim_mode: true,
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the title is blank.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "form title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Edit Issue");
        assert_eq!(settings.modality, Modality::Application);
        assert!(settings.vim_mode);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let settings = Settings {
            title: "   ".to_string(),
            ..Settings::default()
        };

        let result = settings.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("title cannot be empty"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("modality = \"modeless\"").unwrap();
        assert_eq!(settings.modality, Modality::Modeless);
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert!(settings.vim_mode);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            title: "New Issue".to_string(),
            modality: Modality::Document,
            vim_mode: false,
        };

        let toml_str = toml::to_string(&settings).unwrap();
        assert!(toml_str.contains("modality = \"document\""));
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }
}
