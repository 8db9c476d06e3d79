// JSON Output Module

use crate::Result;
use crate::certificates::{Certificate, ClassificationResult};
use serde::Serialize;
use std::path::Path;

/// Full fleet report: the certificate sequence plus its aggregate view
#[derive(Debug, Serialize)]
pub struct FleetReport<'a> {
    pub certificates: &'a [Certificate],
    pub classification: &'a ClassificationResult,
}

/// Generate JSON output for the fleet
pub fn generate_json(
    certificates: &[Certificate],
    classification: &ClassificationResult,
    pretty: bool,
) -> Result<String> {
    let report = FleetReport {
        certificates,
        classification,
    };

    if pretty {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(serde_json::to_string(&report)?)
    }
}

/// Write JSON report to file
pub fn write_json_file<P: AsRef<Path>>(
    certificates: &[Certificate],
    classification: &ClassificationResult,
    path: P,
    pretty: bool,
) -> Result<()> {
    let json = generate_json(certificates, classification, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}
