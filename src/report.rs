//! # Final report: classification and rendering.
//!
//! After all submission handles settle, every package lands in one of three
//! buckets:
//! - **fine** — available where it should be;
//! - **problematic** — probed successfully but missing from the registry
//!   that is supposed to serve it;
//! - **failed** — the probe itself errored (transport failure, unexpected
//!   status), so availability is unknown.
//!
//! Problematic packages are rendered as an aligned table; failed probes as a
//! list with their error messages.

use crate::error::TaskError;
use crate::registry::{Package, PackageStatus};

/// Outcome summary of one probe run.
pub struct Report {
    total: usize,
    problematic: Vec<PackageStatus>,
    failed: Vec<(Package, TaskError)>,
}

impl Report {
    /// Classifies settled outcomes into the three buckets.
    pub fn from_outcomes(outcomes: Vec<(Package, Result<PackageStatus, TaskError>)>) -> Self {
        let total = outcomes.len();
        let mut problematic = Vec::new();
        let mut failed = Vec::new();

        for (package, outcome) in outcomes {
            match outcome {
                Ok(status) => {
                    if status.is_problematic() {
                        problematic.push(status);
                    }
                }
                Err(error) => failed.push((package, error)),
            }
        }

        Self {
            total,
            problematic,
            failed,
        }
    }

    /// True when every package probed cleanly and is where it should be.
    pub fn is_clean(&self) -> bool {
        self.problematic.is_empty() && self.failed.is_empty()
    }

    /// Number of packages checked.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Packages missing from the registry that should serve them.
    pub fn problematic(&self) -> &[PackageStatus] {
        &self.problematic
    }

    /// Probes that failed outright, with their errors.
    pub fn failed(&self) -> &[(Package, TaskError)] {
        &self.failed
    }

    /// Renders the report for the console.
    pub fn render(&self) -> String {
        if self.is_clean() {
            return format!("no problematic packages found ({} checked)", self.total);
        }

        let mut out = String::new();

        if !self.problematic.is_empty() {
            out.push_str("problematic packages:\n");
            out.push_str(&self.render_table());
        }

        if !self.failed.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("failed probes:\n");
            for (package, error) in &self.failed {
                out.push_str(&format!("  {}: {error}\n", package.spec()));
            }
        }

        out.push_str(&format!(
            "\nchecked {} packages: {} problematic, {} failed\n",
            self.total,
            self.problematic.len(),
            self.failed.len()
        ));
        out
    }

    fn render_table(&self) -> String {
        const HEADER: [&str; 3] = ["Package", "Public", "Private"];

        let rows: Vec<[String; 3]> = self
            .problematic
            .iter()
            .map(|status| {
                [
                    status.package.spec(),
                    cell(status.public).to_string(),
                    cell(status.private).to_string(),
                ]
            })
            .collect();

        let mut widths = [HEADER[0].len(), HEADER[1].len(), HEADER[2].len()];
        for row in &rows {
            for (width, value) in widths.iter_mut().zip(row) {
                *width = (*width).max(value.len());
            }
        }

        let mut out = String::new();
        out.push_str(&format!(
            "  {:<w0$}  {:<w1$}  {:<w2$}\n",
            HEADER[0],
            HEADER[1],
            HEADER[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
        for row in &rows {
            out.push_str(&format!(
                "  {:<w0$}  {:<w1$}  {:<w2$}\n",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            ));
        }
        out
    }
}

/// Table cell for an availability flag; `-` marks an unchecked registry.
fn cell(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, private: bool) -> Package {
        Package {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            private,
        }
    }

    fn missing_publicly(name: &str) -> PackageStatus {
        PackageStatus {
            package: package(name, false),
            public: Some(false),
            private: Some(true),
        }
    }

    fn fine(name: &str) -> PackageStatus {
        PackageStatus {
            package: package(name, false),
            public: Some(true),
            private: None,
        }
    }

    #[test]
    fn clean_run_renders_a_single_line() {
        let report = Report::from_outcomes(vec![(package("react", false), Ok(fine("react")))]);
        assert!(report.is_clean());
        assert_eq!(report.render(), "no problematic packages found (1 checked)");
    }

    #[test]
    fn classifies_into_three_buckets() {
        let report = Report::from_outcomes(vec![
            (package("react", false), Ok(fine("react"))),
            (package("ghost", false), Ok(missing_publicly("ghost"))),
            (
                package("flaky", false),
                Err(TaskError::fail("unexpected status 503")),
            ),
        ]);

        assert!(!report.is_clean());
        assert_eq!(report.total(), 3);
        assert_eq!(report.problematic().len(), 1);
        assert_eq!(report.failed().len(), 1);
    }

    #[test]
    fn table_aligns_columns_and_marks_unchecked() {
        let report = Report::from_outcomes(vec![(
            package("ghost", false),
            Ok(PackageStatus {
                package: package("ghost", false),
                public: Some(false),
                private: None,
            }),
        )]);

        let rendered = report.render();
        assert!(rendered.contains("Package"));
        assert!(rendered.contains("ghost@1.0.0"));
        assert!(rendered.contains("no"));
        assert!(rendered.contains('-'));
        assert!(rendered.contains("1 problematic, 0 failed"));
    }
}
