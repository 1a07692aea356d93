use std::fmt;

/// Validation check result status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }

    fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }
}

/// Individual validation check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// Name of the validation check
    pub name: String,
    /// Result status of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// Complete validation report for an LCM file
#[derive(Debug)]
pub struct ValidationReport {
    /// List of individual validation check results
    pub checks: Vec<ValidationCheck>,
    /// Path of the file that was validated
    pub file_path: String,
}

impl ValidationReport {
    /// Create a new validation report for the given file path
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Add a validation check result to the report
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Look up a check by name
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Check if any validation checks failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// Check if any validation checks produced warnings
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_warning())
    }

    /// Count the number of successful checks
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Count the number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_warning()).count()
    }

    /// Count the number of failures
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    /// Format the report with colors
    #[cfg(feature = "colorized_output")]
    pub fn format_colored(&self) -> String {
        use console::{style, Emoji};

        static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
        static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
        static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

        let mut output = String::new();
        output.push_str(&format!("{}\n", style("LCM Validation Report").bold().cyan()));
        output.push_str(&format!("{}\n", style("=====================").cyan()));
        output.push_str(&format!("{}: {}\n\n", style("File").bold(), self.file_path));

        for check in &self.checks {
            let line = match &check.status {
                CheckStatus::Ok => format!("[{}] {}\n", OK, style(&check.name).green()),
                CheckStatus::Warning(msg) => format!(
                    "[{}] {} - {}: {}\n",
                    WARN,
                    style(&check.name).yellow(),
                    style("WARNING").yellow().bold(),
                    msg
                ),
                CheckStatus::Failed(msg) => format!(
                    "[{}] {} - {}: {}\n",
                    FAIL,
                    style(&check.name).red(),
                    style("FAILED").red().bold(),
                    msg
                ),
            };
            output.push_str(&line);
        }

        output.push_str(&format!(
            "\n{}: {} passed, {} warnings, {} failed\n\n",
            style("Summary").bold(),
            style(self.success_count()).green(),
            style(self.warning_count()).yellow(),
            style(self.failure_count()).red()
        ));

        let verdict = style(self.verdict()).bold();
        let verdict = if self.has_failures() {
            verdict.red()
        } else if self.has_warnings() {
            verdict.yellow()
        } else {
            verdict.green()
        };
        output.push_str(&format!("{}\n", verdict));
        output
    }

    /// Format the report as plain text (built without `colorized_output`)
    #[cfg(not(feature = "colorized_output"))]
    pub fn format_colored(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LCM Validation Report")?;
        writeln!(f, "=====================")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f)?;

        for check in &self.checks {
            match &check.status {
                CheckStatus::Ok => writeln!(f, "[✓] {}", check.name)?,
                CheckStatus::Warning(msg) => writeln!(f, "[⚠] {} - WARNING: {}", check.name, msg)?,
                CheckStatus::Failed(msg) => writeln!(f, "[✗] {} - FAILED: {}", check.name, msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.verdict())
    }
}
