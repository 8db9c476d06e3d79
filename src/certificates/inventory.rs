// Certificate inventory - fleet data management

use super::classifier::recompute_all;
use super::types::{AlertThresholds, Certificate, GeoLocation, Status};
use crate::Result;
use crate::error::RadarError;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Certificate inventory - owns the tracked certificate list
///
/// Insertion order is preserved: aggregation derives issuer group order
/// from it. Mutations that change day counts or thresholds go through
/// `recompute` / `replace` so a record with a stale status is never
/// observable.
#[derive(Debug, Clone, Default)]
pub struct CertificateInventory {
    certificates: Vec<Certificate>,
}

impl CertificateInventory {
    /// Create new empty inventory
    pub fn new() -> Self {
        Self {
            certificates: Vec::new(),
        }
    }

    /// Build the built-in demo fleet, classified against the default
    /// thresholds
    pub fn demo() -> Self {
        let raw = demo_certificates();
        Self {
            certificates: recompute_all(&raw, &AlertThresholds::default()),
        }
    }

    /// Add a certificate to the inventory
    ///
    /// Rejects records with an empty domain or issuer, and duplicate ids.
    pub fn add_certificate(&mut self, certificate: Certificate) -> Result<()> {
        validate_record(&certificate)?;

        if self.certificates.iter().any(|c| c.id == certificate.id) {
            return Err(RadarError::Data {
                id: certificate.id,
                field: "id",
                message: "is already present in the inventory".to_string(),
            }
            .into());
        }

        self.certificates.push(certificate);
        Ok(())
    }

    /// The tracked certificates, in insertion order
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Replace the whole certificate list atomically
    ///
    /// Used by the scan path: the new sequence is swapped in complete,
    /// never merged record by record.
    pub fn replace(&mut self, certificates: Vec<Certificate>) {
        self.certificates = certificates;
    }

    /// Recompute every status against the given thresholds
    pub fn recompute(&mut self, thresholds: &AlertThresholds) {
        self.certificates = recompute_all(&self.certificates, thresholds);
    }

    /// Get count of certificates
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Check if inventory is empty
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Load an inventory from a JSON file
    ///
    /// Every record is validated; a malformed record fails the whole
    /// load rather than being silently dropped or regrouped.
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| RadarError::FileSystem {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        let certificates: Vec<Certificate> =
            serde_json::from_str(&contents).map_err(RadarError::Serialization)?;

        let mut seen = HashSet::new();
        for cert in &certificates {
            validate_record(cert)?;
            if !seen.insert(cert.id) {
                return Err(RadarError::Data {
                    id: cert.id,
                    field: "id",
                    message: "appears more than once in the inventory file".to_string(),
                }
                .into());
            }
        }

        tracing::debug!(
            count = certificates.len(),
            "Loaded certificate inventory from {}",
            path.as_ref().display()
        );

        Ok(Self { certificates })
    }

    /// Save the inventory to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.certificates)?;

        fs::write(path.as_ref(), json).map_err(|e| RadarError::FileSystem {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}

/// Reject records that would corrupt aggregation keys
fn validate_record(cert: &Certificate) -> std::result::Result<(), RadarError> {
    if cert.domain.trim().is_empty() {
        return Err(RadarError::Data {
            id: cert.id,
            field: "domain",
            message: "must not be empty".to_string(),
        });
    }

    if cert.issuer.trim().is_empty() {
        return Err(RadarError::Data {
            id: cert.id,
            field: "issuer",
            message: "must not be empty".to_string(),
        });
    }

    Ok(())
}

/// The eight demo certificates shipped with certradar
///
/// Statuses are placeholders here; `demo()` recomputes them before the
/// data is observable.
fn demo_certificates() -> Vec<Certificate> {
    vec![
        demo_record(
            1,
            "example.com",
            "Let's Encrypt",
            (2024, 10, 1),
            (2025, 12, 30),
            72,
            (37.7749, -122.4194, "San Francisco, CA"),
            "RSA-2048",
            &["www.example.com", "api.example.com"],
        ),
        demo_record(
            2,
            "api.example.com",
            "DigiCert",
            (2024, 8, 15),
            (2025, 11, 20),
            32,
            (51.5074, -0.1278, "London, UK"),
            "ECDSA P-256",
            &["api.example.com"],
        ),
        demo_record(
            3,
            "cdn.example.net",
            "Let's Encrypt",
            (2024, 9, 1),
            (2025, 11, 5),
            17,
            (35.6762, 139.6503, "Tokyo, Japan"),
            "RSA-2048",
            &["cdn.example.net", "static.example.net"],
        ),
        demo_record(
            4,
            "shop.example.org",
            "GlobalSign",
            (2024, 7, 20),
            (2026, 1, 15),
            88,
            (40.7128, -74.0060, "New York, NY"),
            "RSA-4096",
            &["shop.example.org", "checkout.example.org"],
        ),
        demo_record(
            5,
            "mail.example.io",
            "ZeroSSL",
            (2024, 8, 1),
            (2025, 10, 28),
            9,
            (52.5200, 13.4050, "Berlin, Germany"),
            "ECDSA P-384",
            &["mail.example.io", "smtp.example.io"],
        ),
        demo_record(
            6,
            "blog.example.dev",
            "Let's Encrypt",
            (2024, 9, 10),
            (2025, 12, 8),
            50,
            (1.3521, 103.8198, "Singapore"),
            "RSA-2048",
            &["blog.example.dev"],
        ),
        demo_record(
            7,
            "internal.example.local",
            "Corporate CA",
            (2024, 6, 1),
            (2026, 3, 1),
            133,
            (29.3759, 47.9774, "Kuwait City, Kuwait"),
            "RSA-2048",
            &["*.internal.example.local"],
        ),
        demo_record(
            8,
            "vpn.example.co",
            "Sectigo",
            (2024, 7, 15),
            (2025, 11, 25),
            37,
            (48.8566, 2.3522, "Paris, France"),
            "RSA-2048",
            &["vpn.example.co"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_record(
    id: u32,
    domain: &str,
    issuer: &str,
    valid_from: (i32, u32, u32),
    valid_until: (i32, u32, u32),
    days_until_expiry: i64,
    location: (f64, f64, &str),
    algorithm: &str,
    sans: &[&str],
) -> Certificate {
    Certificate {
        id,
        domain: domain.to_string(),
        issuer: issuer.to_string(),
        valid_from: date(valid_from),
        valid_until: date(valid_until),
        days_until_expiry,
        status: Status::Safe,
        location: GeoLocation {
            latitude: location.0,
            longitude: location.1,
            label: location.2.to_string(),
        },
        algorithm: algorithm.to_string(),
        sans: sans.iter().map(|s| s.to_string()).collect(),
    }
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
