//! Validation issues and their aggregation.

use std::fmt;

/// Severity of a validation issue.
///
/// Only errors block a calculation; warnings are informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Questionable but usable value.
    Warning,
    /// Invalid value, the calculation cannot run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single problem found while validating or assembling input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationIssue {
    /// How severe the problem is.
    pub severity: Severity,
    /// Human readable description.
    pub message: String,
}

impl ValidationIssue {
    /// Create an error issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning issue.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Whether this issue blocks the calculation.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Prefix the message with a context string, e.g. the location it belongs to.
    pub fn with_context(mut self, context: &str) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Aggregated outcome of a set of checks.
///
/// Issues keep the order in which the checks were given. The result is
/// successful as long as none of them is an [`Severity::Error`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty (successful) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the outcome of many checks, dropping the ones without an issue.
    pub fn from_checks<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = Option<ValidationIssue>>,
    {
        Self {
            issues: checks.into_iter().flatten().collect(),
        }
    }

    /// True if no error was found.
    pub fn successful(&self) -> bool {
        !self.issues.iter().any(ValidationIssue::is_error)
    }

    /// All issues in check order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Iterate over the errors only.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    /// Iterate over the warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    /// Add a single issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Add the outcome of further checks.
    pub fn extend<I>(&mut self, checks: I)
    where
        I: IntoIterator<Item = Option<ValidationIssue>>,
    {
        self.issues.extend(checks.into_iter().flatten());
    }

    /// Append all issues of another result.
    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
    }

    /// Consume the result, returning its issues.
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_successful() {
        let result = ValidationResult::from_checks(vec![None, None]);
        assert!(result.successful());
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_warnings_do_not_block() {
        let result = ValidationResult::from_checks(vec![
            Some(ValidationIssue::warning("first")),
            None,
            Some(ValidationIssue::warning("second")),
        ]);

        assert!(result.successful());
        assert_eq!(result.warnings().count(), 2);
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_error_blocks_and_order_is_preserved() {
        let result = ValidationResult::from_checks(vec![
            Some(ValidationIssue::warning("a")),
            None,
            Some(ValidationIssue::error("b")),
            Some(ValidationIssue::warning("c")),
        ]);

        assert!(!result.successful());
        let messages: Vec<&str> = result.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, ["a", "b", "c"]);
    }

    #[test]
    fn test_merge_and_context() {
        let mut result = ValidationResult::new();
        result.push(ValidationIssue::warning("w"));

        let other = ValidationResult::from_checks(vec![Some(
            ValidationIssue::error("bad").with_context("Location 1"),
        )]);
        result.merge(other);

        assert!(!result.successful());
        assert_eq!(result.issues()[1].message, "Location 1: bad");
        assert_eq!(result.issues()[1].to_string(), "[Error] Location 1: bad");
    }
}
