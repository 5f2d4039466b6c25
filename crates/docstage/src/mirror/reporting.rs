//! Mirror run reporting and statistics

use super::MirrorReport;

/// Mirror run reporter
pub struct MirrorReporter;

impl MirrorReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &MirrorReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Mirror Summary ===\n");
        output.push_str(&format!("Folders:   {}\n", report.directories));
        output.push_str(&format!("Created:   {}\n", report.created));
        output.push_str(&format!("Copied:    {}\n", report.overwritten));
        output.push_str(&format!("Updated:   {}\n", report.updated));
        output.push_str(&format!("Unchanged: {}\n", report.unchanged));
        output.push_str(&format!("Removed:   {}\n", report.removed));

        if !report.missing.is_empty() {
            output.push_str(&format!("\nMissing ({}):\n", report.missing.len()));
            for name in &report.missing {
                output.push_str(&format!("  - {name}\n"));
            }
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!("\nWarnings ({}):\n", report.warnings.len()));
            for warning in &report.warnings {
                output.push_str(&format!("  - {warning}\n"));
            }
        }

        output.push_str(&format!(
            "\nTotal operations: {}\n",
            report.total_operations()
        ));

        output
    }
}
