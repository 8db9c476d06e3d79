// Terminal report - summary, expiry timeline, issuer breakdown and
// location listing for the certificate fleet

use crate::certificates::{Certificate, ClassificationResult, Status};
use colored::{ColoredString, Colorize};

/// Color a piece of text according to a certificate status
pub fn colorize_status(status: Status, text: &str) -> ColoredString {
    match status {
        Status::Safe => text.green(),
        Status::Warning => text.yellow(),
        Status::Critical => text.red(),
    }
}

/// Render the full terminal report
///
/// Sections mirror the dashboard views: summary counters, the expiry
/// timeline (most urgent first), the per-issuer breakdown behind the
/// radar chart, and the location listing behind the map markers.
pub fn render_report(
    certificates: &[Certificate],
    classification: &ClassificationResult,
) -> String {
    let mut output = String::new();

    render_summary(&mut output, classification);
    render_timeline(&mut output, certificates);
    render_issuer_breakdown(&mut output, classification);
    render_locations(&mut output, certificates);

    output
}

/// Print the report to stdout
pub fn print_report(certificates: &[Certificate], classification: &ClassificationResult) {
    print!("{}", render_report(certificates, classification));
}

fn render_summary(output: &mut String, classification: &ClassificationResult) {
    let counts = &classification.counts;

    output.push_str("=== FLEET SUMMARY ===\n");
    output.push_str(&format!(
        "Total: {}  Safe: {}  Warning: {}  Critical: {}\n",
        counts.total,
        colorize_status(Status::Safe, &counts.safe.to_string()),
        colorize_status(Status::Warning, &counts.warning.to_string()),
        colorize_status(Status::Critical, &counts.critical.to_string()),
    ));
    output.push('\n');
}

fn render_timeline(output: &mut String, certificates: &[Certificate]) {
    output.push_str("=== EXPIRY TIMELINE (most urgent first) ===\n");

    let mut sorted: Vec<&Certificate> = certificates.iter().collect();
    sorted.sort_by_key(|cert| cert.days_until_expiry);

    for cert in sorted {
        let status_column = format!(
            "{} {:>4} days",
            cert.status.glyph(),
            cert.days_until_expiry
        );
        output.push_str(&format!(
            "  {}  {:<26} {:<16} expires {}\n",
            colorize_status(cert.status, &status_column),
            cert.domain,
            cert.issuer,
            cert.valid_until,
        ));
        output.push_str(&format!(
            "              {}  {}  SANs: {}\n",
            cert.location.label,
            cert.algorithm,
            cert.sans.join(", "),
        ));
    }
    output.push('\n');
}

fn render_issuer_breakdown(output: &mut String, classification: &ClassificationResult) {
    output.push_str("=== ISSUER BREAKDOWN ===\n");
    output.push_str(&format!(
        "{:<22} {:>5} {:>8} {:>9}\n",
        "Issuer", "Safe", "Warning", "Critical"
    ));

    for tally in &classification.by_issuer {
        output.push_str(&format!(
            "{:<22} {:>5} {:>8} {:>9}\n",
            tally.issuer, tally.safe, tally.warning, tally.critical
        ));
    }
    output.push('\n');
}

fn render_locations(output: &mut String, certificates: &[Certificate]) {
    output.push_str("=== LOCATIONS ===\n");

    for cert in certificates {
        let marker = format!("[{}]", cert.status.marker_color());
        output.push_str(&format!(
            "  {:<26} {:<22} ({:.4}, {:.4})  {}\n",
            cert.domain,
            cert.location.label,
            cert.location.latitude,
            cert.location.longitude,
            colorize_status(cert.status, &marker),
        ));
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificates::{CertificateInventory, aggregate};

    fn demo_report() -> String {
        colored::control::set_override(false);
        let inventory = CertificateInventory::demo();
        let classification = aggregate(inventory.certificates());
        render_report(inventory.certificates(), &classification)
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = demo_report();
        assert!(report.contains("=== FLEET SUMMARY ==="));
        assert!(report.contains("=== EXPIRY TIMELINE"));
        assert!(report.contains("=== ISSUER BREAKDOWN ==="));
        assert!(report.contains("=== LOCATIONS ==="));
    }

    #[test]
    fn test_summary_counts() {
        let report = demo_report();
        assert!(report.contains("Total: 8"));
    }

    #[test]
    fn test_timeline_sorted_most_urgent_first() {
        let report = demo_report();

        // mail.example.io (9 days) must come before internal.example.local (133 days)
        let most_urgent = report.find("mail.example.io").unwrap();
        let least_urgent = report.find("internal.example.local").unwrap();
        assert!(most_urgent < least_urgent);
    }

    #[test]
    fn test_issuer_breakdown_lists_each_issuer_once() {
        let report = demo_report();
        let breakdown = report
            .split("=== ISSUER BREAKDOWN ===")
            .nth(1)
            .unwrap()
            .split("===")
            .next()
            .unwrap();

        assert_eq!(breakdown.matches("Let's Encrypt").count(), 1);
        assert_eq!(breakdown.matches("Sectigo").count(), 1);
    }

    #[test]
    fn test_locations_carry_marker_colors() {
        let report = demo_report();
        assert!(report.contains("[green]"));
        assert!(report.contains("[orange]"));
        assert!(report.contains("[red]"));
    }
}
