// CSV Output Module

use crate::Result;
use crate::certificates::Certificate;
use csv::Writer;
use std::path::Path;

/// Generate CSV export of the certificate fleet
///
/// One row per certificate in inventory order. Fields with embedded
/// commas or quotes are quoted by the writer.
pub fn generate_csv(certificates: &[Certificate]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record([
        "Domain",
        "Issuer",
        "Valid Until",
        "Days Until Expiry",
        "Status",
        "Location",
        "Algorithm",
    ])?;

    for cert in certificates {
        wtr.write_record(&[
            cert.domain.clone(),
            cert.issuer.clone(),
            cert.valid_until.to_string(),
            cert.days_until_expiry.to_string(),
            cert.status.to_string(),
            cert.location.label.clone(),
            cert.algorithm.clone(),
        ])?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}

/// Write CSV export to file
pub fn write_csv_file<P: AsRef<Path>>(certificates: &[Certificate], path: P) -> Result<()> {
    let csv = generate_csv(certificates)?;
    std::fs::write(path, csv)?;
    Ok(())
}
