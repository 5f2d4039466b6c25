//! Index run reporting

use super::IndexReport;

/// Index run reporter
pub struct IndexReporter;

impl IndexReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &IndexReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Index Summary ===\n");
        output.push_str(&format!("Indexes written: {}\n", report.written));
        output.push_str(&format!("Files listed:    {}\n", report.listed));

        if !report.errors.is_empty() {
            output.push_str(&format!("\nErrors ({}):\n", report.errors.len()));
            for error in &report.errors {
                output.push_str(&format!("  - {error}\n"));
            }
        }

        if report.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
