//! Severity vocabulary for issues.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordinal classification of an issue's impact.
///
/// The set is fixed and ordered from most to least severe. Labels are
/// case-sensitive: `"High"` parses, `"high"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// All severities in display order.
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    /// The label used by hosts and completion sinks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }

    /// Position of this severity in [`Severity::ALL`].
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// The next less severe level, stopping at `Info`.
    pub fn next(&self) -> Severity {
        Self::ALL
            .get(self.position() + 1)
            .copied()
            .unwrap_or(Severity::Info)
    }

    /// The next more severe level, stopping at `Critical`.
    pub fn prev(&self) -> Severity {
        self.position()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not part of the severity vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}' (expected one of Critical, High, Medium, Low, Info)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|severity| severity.as_str() == s)
            .copied()
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ordered() {
        let labels: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(labels, ["Critical", "High", "Medium", "Low", "Info"]);
        assert!(Severity::Critical < Severity::Info);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("High".parse::<Severity>(), Ok(Severity::High));
        assert!("high".parse::<Severity>().is_err());
        assert!("HIGH".parse::<Severity>().is_err());
        assert!(" High".parse::<Severity>().is_err());
    }

    #[test]
    fn test_parse_error_mentions_label() {
        let err = "Severe".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("'Severe'"));
    }

    #[test]
    fn test_next_and_prev_clamp() {
        assert_eq!(Severity::Critical.next(), Severity::High);
        assert_eq!(Severity::Info.next(), Severity::Info);
        assert_eq!(Severity::Info.prev(), Severity::Low);
        assert_eq!(Severity::Critical.prev(), Severity::Critical);
    }

    #[test]
    fn test_display_matches_label() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string(), severity.as_str());
        }
    }
}
