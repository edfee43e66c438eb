//! Diagnostic reports produced by record validators.
//!
//! Validators never fail: they inspect a record, append one
//! [`ValidationMessage`] per problem found, and leave it to the caller to
//! decide whether to halt. Messages keep the order in which checks ran, so two
//! validations of identical input produce identical reports.

use std::fmt;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Advisory only; the record remains usable.
    Warning,
    /// The record is not usable as configured.
    Error,
}

/// A single human-readable validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    /// Name of the record that was checked, e.g. `"WEATHER LOAD CASE"`.
    pub title: String,
    /// What was wrong with it.
    pub description: String,
    pub severity: Severity,
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.description)
    }
}

/// Ordered validation findings for a record and everything it contains.
///
/// A report is valid when it holds no [`Severity::Error`] messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding that makes the record unusable.
    pub fn error(&mut self, title: &str, description: impl Into<String>) {
        self.push(title, description.into(), Severity::Error);
    }

    /// Records an advisory finding.
    pub fn warning(&mut self, title: &str, description: impl Into<String>) {
        self.push(title, description.into(), Severity::Warning);
    }

    /// Appends every message of a nested record's report, preserving order.
    pub fn extend(&mut self, other: ValidationReport) {
        self.messages.extend(other.messages);
    }

    /// Returns `true` if no error-level messages were recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.messages
            .iter()
            .all(|message| message.severity != Severity::Error)
    }

    /// Returns all messages in the order they were recorded.
    #[must_use]
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    /// Returns an iterator over the warning-level messages.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages
            .iter()
            .filter(|message| message.severity == Severity::Warning)
    }

    /// Returns an iterator over the error-level messages.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages
            .iter()
            .filter(|message| message.severity == Severity::Error)
    }

    fn push(&mut self, title: &str, description: String, severity: Severity) {
        self.messages.push(ValidationMessage {
            title: title.to_owned(),
            description,
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn warnings_do_not_invalidate() {
        let mut report = ValidationReport::new();
        report.warning("CABLE CONSTRAINT", "Limit is unusually low");

        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn errors_invalidate_and_keep_order() {
        let mut report = ValidationReport::new();
        report.error("WEATHER LOAD CASE", "Invalid ice density");
        report.warning("CABLE CONSTRAINT", "Limit is unusually low");

        let mut nested = ValidationReport::new();
        nested.error("WEATHER LOAD CASE", "Invalid wind pressure");
        report.extend(nested);

        assert!(!report.is_valid());
        let descriptions: Vec<_> = report
            .messages()
            .iter()
            .map(|message| message.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            [
                "Invalid ice density",
                "Limit is unusually low",
                "Invalid wind pressure"
            ]
        );
    }

    #[test]
    fn display_joins_title_and_description() {
        let mut report = ValidationReport::new();
        report.error("WEATHER LOAD CASE", "Invalid ice thickness");
        assert_eq!(
            report.messages()[0].to_string(),
            "WEATHER LOAD CASE - Invalid ice thickness"
        );
    }
}
