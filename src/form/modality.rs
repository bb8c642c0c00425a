//! How the form interacts with the rest of the host while it is open.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Modality of the issue form.
///
/// Every variant keeps its own meaning: only `Modeless` lets the host keep
/// receiving input while the form is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Blocks every other window of the host application.
    #[default]
    Application,
    /// Blocks only the window the form was opened from.
    Document,
    /// Blocks nothing; the host keeps handling its own input.
    Modeless,
    /// Blocks every window sharing the host's toolkit.
    Toolkit,
}

impl Modality {
    /// Whether the host should stop routing input to itself while the form is open.
    pub fn blocks_host_input(&self) -> bool {
        !matches!(self, Modality::Modeless)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Application => "application",
            Modality::Document => "document",
            Modality::Modeless => "modeless",
            Modality::Toolkit => "toolkit",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a modality name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modality '{0}' (expected application, document, modeless or toolkit)")]
pub struct ParseModalityError(pub String);

impl FromStr for Modality {
    type Err = ParseModalityError;

    /// Parse a modality name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" => Ok(Modality::Application),
            "document" => Ok(Modality::Document),
            "modeless" => Ok(Modality::Modeless),
            "toolkit" => Ok(Modality::Toolkit),
            _ => Err(ParseModalityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("Application".parse(), Ok(Modality::Application));
        assert_eq!("DOCUMENT".parse(), Ok(Modality::Document));
        assert_eq!("modeless".parse(), Ok(Modality::Modeless));
        assert_eq!("ToolKit".parse(), Ok(Modality::Toolkit));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "popup".parse::<Modality>().unwrap_err();
        assert!(err.to_string().contains("'popup'"));
    }

    #[test]
    fn test_each_modality_is_distinct() {
        assert_ne!(Modality::Modeless, Modality::Document);
        assert_ne!(Modality::Toolkit, Modality::Document);
    }

    #[test]
    fn test_only_modeless_lets_host_input_through() {
        assert!(Modality::Application.blocks_host_input());
        assert!(Modality::Document.blocks_host_input());
        assert!(Modality::Toolkit.blocks_host_input());
        assert!(!Modality::Modeless.blocks_host_input());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for modality in [
            Modality::Application,
            Modality::Document,
            Modality::Modeless,
            Modality::Toolkit,
        ] {
            assert_eq!(modality.to_string().parse(), Ok(modality));
        }
    }
}
