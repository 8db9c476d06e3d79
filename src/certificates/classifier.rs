// Certificate classification - status derivation and aggregation

use super::types::{AlertThresholds, Certificate, Status};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-status certificate counts across the whole fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
    pub total: usize,
}

/// Per-issuer status tallies, one entry per issuer present in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerTally {
    pub issuer: String,
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
}

/// Aggregate view of a classified certificate sequence
///
/// `by_issuer` preserves first-seen issuer order from the input; issuers
/// with no certificates never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub counts: StatusCounts,
    pub by_issuer: Vec<IssuerTally>,
}

/// Classify a day count against the given thresholds
///
/// Total over all integers: negative day counts (already expired) are
/// critical. The three branches partition the integer line with
/// boundaries at `warning_days` and `critical_days` inclusive on the
/// lower tier.
pub fn classify(days: i64, thresholds: &AlertThresholds) -> Status {
    if days > thresholds.warning_days {
        Status::Safe
    } else if days > thresholds.critical_days {
        Status::Warning
    } else {
        Status::Critical
    }
}

/// Recompute every certificate's status against the given thresholds
///
/// Returns a new sequence; all fields other than `status` are unchanged.
pub fn recompute_all(
    certificates: &[Certificate],
    thresholds: &AlertThresholds,
) -> Vec<Certificate> {
    certificates
        .iter()
        .map(|cert| {
            let mut cert = cert.clone();
            cert.status = classify(cert.days_until_expiry, thresholds);
            cert
        })
        .collect()
}

/// Aggregate a classified certificate sequence into fleet-wide counts
/// and per-issuer tallies
///
/// The issuer string is the grouping key, matched exactly and
/// case-sensitively. Total over any finite input; an empty input yields
/// zero counts and no issuer groups.
pub fn aggregate(certificates: &[Certificate]) -> ClassificationResult {
    let mut counts = StatusCounts {
        total: certificates.len(),
        ..Default::default()
    };
    let mut by_issuer: Vec<IssuerTally> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for cert in certificates {
        let slot = match slots.get(cert.issuer.as_str()) {
            Some(&index) => index,
            None => {
                slots.insert(cert.issuer.clone(), by_issuer.len());
                by_issuer.push(IssuerTally {
                    issuer: cert.issuer.clone(),
                    safe: 0,
                    warning: 0,
                    critical: 0,
                });
                by_issuer.len() - 1
            }
        };

        match cert.status {
            Status::Safe => {
                counts.safe += 1;
                by_issuer[slot].safe += 1;
            }
            Status::Warning => {
                counts.warning += 1;
                by_issuer[slot].warning += 1;
            }
            Status::Critical => {
                counts.critical += 1;
                by_issuer[slot].critical += 1;
            }
        }
    }

    ClassificationResult { counts, by_issuer }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificates::types::GeoLocation;
    use chrono::NaiveDate;

    fn cert(id: u32, issuer: &str, days: i64, status: Status) -> Certificate {
        Certificate {
            id,
            domain: format!("host{}.example.com", id),
            issuer: issuer.to_string(),
            valid_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            days_until_expiry: days,
            status,
            location: GeoLocation {
                latitude: 0.0,
                longitude: 0.0,
                label: "Nowhere".to_string(),
            },
            algorithm: "RSA-2048".to_string(),
            sans: vec![],
        }
    }

    #[test]
    fn test_classify_boundaries() {
        let thresholds = AlertThresholds {
            warning_days: 60,
            critical_days: 30,
        };

        assert_eq!(classify(61, &thresholds), Status::Safe);
        assert_eq!(classify(60, &thresholds), Status::Warning);
        assert_eq!(classify(31, &thresholds), Status::Warning);
        assert_eq!(classify(30, &thresholds), Status::Critical);
        assert_eq!(classify(0, &thresholds), Status::Critical);
    }

    #[test]
    fn test_classify_negative_days_are_critical() {
        let thresholds = AlertThresholds::default();
        assert_eq!(classify(-1, &thresholds), Status::Critical);
        assert_eq!(classify(i64::MIN, &thresholds), Status::Critical);
    }

    #[test]
    fn test_classify_partitions_integer_line() {
        let thresholds = AlertThresholds {
            warning_days: 10,
            critical_days: 3,
        };

        for days in -20..30 {
            let status = classify(days, &thresholds);
            let expected = if days > 10 {
                Status::Safe
            } else if days > 3 {
                Status::Warning
            } else {
                Status::Critical
            };
            assert_eq!(status, expected, "days = {}", days);
        }
    }

    #[test]
    fn test_recompute_all_only_touches_status() {
        let thresholds = AlertThresholds::default();
        let input = vec![cert(1, "DigiCert", 10, Status::Safe)];

        let recomputed = recompute_all(&input, &thresholds);
        assert_eq!(recomputed[0].status, Status::Critical);
        assert_eq!(recomputed[0].domain, input[0].domain);
        assert_eq!(recomputed[0].days_until_expiry, 10);
        // Input sequence untouched
        assert_eq!(input[0].status, Status::Safe);
    }

    #[test]
    fn test_recompute_all_is_idempotent() {
        let thresholds = AlertThresholds::default();
        let input = vec![
            cert(1, "DigiCert", 72, Status::Critical),
            cert(2, "ZeroSSL", 9, Status::Safe),
        ];

        let once = recompute_all(&input, &thresholds);
        let twice = recompute_all(&once, &thresholds);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_aggregate_counts_match_total() {
        let certs = vec![
            cert(1, "DigiCert", 72, Status::Safe),
            cert(2, "DigiCert", 32, Status::Warning),
            cert(3, "ZeroSSL", 9, Status::Critical),
        ];

        let result = aggregate(&certs);
        assert_eq!(result.counts.total, 3);
        assert_eq!(
            result.counts.safe + result.counts.warning + result.counts.critical,
            result.counts.total
        );
    }

    #[test]
    fn test_aggregate_empty_input() {
        let result = aggregate(&[]);
        assert_eq!(result.counts, StatusCounts::default());
        assert!(result.by_issuer.is_empty());
    }

    #[test]
    fn test_aggregate_groups_by_issuer_first_seen_order() {
        let certs = vec![
            cert(1, "ZeroSSL", 9, Status::Critical),
            cert(2, "DigiCert", 72, Status::Safe),
            cert(3, "ZeroSSL", 80, Status::Safe),
        ];

        let result = aggregate(&certs);
        assert_eq!(result.by_issuer.len(), 2);
        assert_eq!(result.by_issuer[0].issuer, "ZeroSSL");
        assert_eq!(result.by_issuer[0].safe, 1);
        assert_eq!(result.by_issuer[0].critical, 1);
        assert_eq!(result.by_issuer[1].issuer, "DigiCert");
        assert_eq!(result.by_issuer[1].safe, 1);
    }

    #[test]
    fn test_aggregate_issuer_match_is_case_sensitive() {
        let certs = vec![
            cert(1, "DigiCert", 72, Status::Safe),
            cert(2, "digicert", 72, Status::Safe),
        ];

        let result = aggregate(&certs);
        assert_eq!(result.by_issuer.len(), 2);
    }

    #[test]
    fn test_demo_fleet_vector() {
        let thresholds = AlertThresholds {
            warning_days: 60,
            critical_days: 30,
        };
        let days = [72, 32, 17, 88, 9, 50, 133, 37];
        let expected = [
            Status::Safe,
            Status::Warning,
            Status::Critical,
            Status::Safe,
            Status::Critical,
            Status::Warning,
            Status::Safe,
            Status::Warning,
        ];

        let input: Vec<Certificate> = days
            .iter()
            .enumerate()
            .map(|(i, &d)| cert(i as u32 + 1, "Let's Encrypt", d, Status::Safe))
            .collect();

        let classified = recompute_all(&input, &thresholds);
        for (cert, expected) in classified.iter().zip(expected.iter()) {
            assert_eq!(cert.status, *expected, "days = {}", cert.days_until_expiry);
        }

        let result = aggregate(&classified);
        assert_eq!(result.counts.safe, 3);
        assert_eq!(result.counts.warning, 3);
        assert_eq!(result.counts.critical, 2);
        assert_eq!(result.counts.total, 8);
    }
}
