// Core types for the certificate fleet

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Certificate urgency status, derived from remaining validity days
/// against the thresholds in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Safe,
    Warning,
    Critical,
}

impl Status {
    /// Marker color used by location listings and map consumers
    pub fn marker_color(&self) -> &'static str {
        match self {
            Status::Safe => "green",
            Status::Warning => "orange",
            Status::Critical => "red",
        }
    }

    /// Single-character glyph for terminal reports
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Safe => "✓",
            Status::Warning => "!",
            Status::Critical => "✗",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Safe => write!(f, "safe"),
            Status::Warning => write!(f, "warning"),
            Status::Critical => write!(f, "critical"),
        }
    }
}

/// Geographic location of the host serving a certificate
///
/// Field names follow the inventory JSON format (lat/lng/city).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(rename = "city")]
    pub label: String,
}

/// A tracked TLS certificate
///
/// `status` is derived data: it must always equal
/// `classify(days_until_expiry, thresholds)` for the thresholds in
/// force. Mutation paths go through `recompute_all` before the record
/// is observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: u32,
    pub domain: String,
    pub issuer: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub days_until_expiry: i64,
    pub status: Status,
    pub location: GeoLocation,
    pub algorithm: String,
    #[serde(default)]
    pub sans: Vec<String>,
}

/// Day-count thresholds separating the status tiers
///
/// Invariant: `critical_days < warning_days`. Enforced at the
/// configuration boundary (`AlertSettings::validate`), assumed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub warning_days: i64,
    pub critical_days: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            warning_days: 60,
            critical_days: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Safe).unwrap(), "\"safe\"");
        assert_eq!(
            serde_json::to_string(&Status::Critical).unwrap(),
            "\"critical\""
        );

        let status: Status = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(status, Status::Warning);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Safe.to_string(), "safe");
        assert_eq!(Status::Warning.to_string(), "warning");
        assert_eq!(Status::Critical.to_string(), "critical");
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(Status::Safe.marker_color(), "green");
        assert_eq!(Status::Warning.marker_color(), "orange");
        assert_eq!(Status::Critical.marker_color(), "red");
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = AlertThresholds::default();
        assert_eq!(thresholds.warning_days, 60);
        assert_eq!(thresholds.critical_days, 30);
    }

    #[test]
    fn test_certificate_serialization_uses_camel_case() {
        let cert = Certificate {
            id: 1,
            domain: "example.com".to_string(),
            issuer: "Let's Encrypt".to_string(),
            valid_from: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2025, 12, 30).unwrap(),
            days_until_expiry: 72,
            status: Status::Safe,
            location: GeoLocation {
                latitude: 37.7749,
                longitude: -122.4194,
                label: "San Francisco, CA".to_string(),
            },
            algorithm: "RSA-2048".to_string(),
            sans: vec!["www.example.com".to_string()],
        };

        let json = serde_json::to_string(&cert).unwrap();
        assert!(json.contains("daysUntilExpiry"));
        assert!(json.contains("validUntil"));
        assert!(json.contains("\"city\":\"San Francisco, CA\""));

        let roundtrip: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, cert);
    }
}
