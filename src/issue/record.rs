//! Issue records and the default seed.

use serde::{Deserialize, Serialize};

use super::Severity;

/// A recorded security finding.
///
/// Records are plain values: the form reads one in and hands a new one back,
/// it never mutates a record it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Issue type or name (e.g., "SQL Injection").
    pub name: String,
    /// Host the issue was found on.
    pub host: String,
    /// Path on the host.
    pub path: String,
    /// Impact classification.
    pub severity: Severity,
    /// Free-form description.
    pub description: String,
    /// Free-form remediation advice.
    pub remediation: String,
    /// Captured request bytes. Never inspected by the form.
    #[serde(with = "payload", default)]
    pub request: Vec<u8>,
    /// Captured response bytes. Never inspected by the form.
    #[serde(with = "payload", default)]
    pub response: Vec<u8>,
}

impl IssueRecord {
    /// The default issue used for new forms and for reset.
    pub fn seed() -> Self {
        DEFAULT_ISSUE.to_record()
    }

    /// Check whether this record is the unmodified seed.
    pub fn is_seed(&self) -> bool {
        DEFAULT_ISSUE.matches(self)
    }
}

/// Static description of an issue, usable in `const` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTemplate {
    pub name: &'static str,
    pub host: &'static str,
    pub path: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub remediation: &'static str,
    pub request: &'static [u8],
    pub response: &'static [u8],
}

impl IssueTemplate {
    /// Build an owned record from this template.
    pub fn to_record(&self) -> IssueRecord {
        IssueRecord {
            name: self.name.to_string(),
            host: self.host.to_string(),
            path: self.path.to_string(),
            severity: self.severity,
            description: self.description.to_string(),
            remediation: self.remediation.to_string(),
            request: self.request.to_vec(),
            response: self.response.to_vec(),
        }
    }

    /// Field-by-field comparison against an owned record.
    pub fn matches(&self, record: &IssueRecord) -> bool {
        record.name == self.name
            && record.host == self.host
            && record.path == self.path
            && record.severity == self.severity
            && record.description == self.description
            && record.remediation == self.remediation
            && record.request == self.request
            && record.response == self.response
    }
}

/// Seed record for new issues and the reset action.
pub const DEFAULT_ISSUE: IssueTemplate = IssueTemplate {
    name: "Issue Type/Name",
    host: "Issue Host",
    path: "Issue Path",
    severity: Severity::Critical,
    description: "Description",
    remediation: "",
    request: b"",
    response: b"",
};

/// Base64 encoding for payload bytes so records survive text formats.
mod payload {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_values() {
        let seed = IssueRecord::seed();
        assert_eq!(seed.name, "Issue Type/Name");
        assert_eq!(seed.host, "Issue Host");
        assert_eq!(seed.path, "Issue Path");
        assert_eq!(seed.severity, Severity::Critical);
        assert_eq!(seed.description, "Description");
        assert!(seed.remediation.is_empty());
        assert!(seed.request.is_empty());
        assert!(seed.response.is_empty());
    }

    #[test]
    fn test_is_seed() {
        let mut record = IssueRecord::seed();
        assert!(record.is_seed());

        record.severity = Severity::Low;
        assert!(!record.is_seed());
    }

    #[test]
    fn test_payloads_serialize_as_base64() {
        let mut record = IssueRecord::seed();
        record.request = b"GET / HTTP/1.1\r\n\r\n".to_vec();
        record.response = vec![0x00, 0xff, 0x10];

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["request"], "R0VUIC8gSFRUUC8xLjENCg0K");
        assert_eq!(json["response"], "AP8Q");
        assert_eq!(json["severity"], "Critical");

        let parsed: IssueRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_payloads_default_to_empty() {
        let json = r#"{
            "name": "XSS",
            "host": "example.com",
            "path": "/search",
            "severity": "Medium",
            "description": "Reflected",
            "remediation": "Encode output"
        }"#;

        let record: IssueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.severity, Severity::Medium);
        assert!(record.request.is_empty());
        assert!(record.response.is_empty());
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let json = r#"{
            "name": "XSS", "host": "h", "path": "/", "severity": "Low",
            "description": "", "remediation": "", "request": "***"
        }"#;

        assert!(serde_json::from_str::<IssueRecord>(json).is_err());
    }

    #[test]
    fn test_lowercase_severity_rejected() {
        let json = r#"{
            "name": "XSS", "host": "h", "path": "/", "severity": "low",
            "description": "", "remediation": ""
        }"#;

        assert!(serde_json::from_str::<IssueRecord>(json).is_err());
    }
}
