//! Error returned by [`parse`](crate::parse) when validation fails.

use crate::types::issue::Issue;
use crate::types::issues::Issues;
use crate::types::issue_formatter::{IssueFormatConfig, IssueFormatter};
use core::fmt::{self, Display};

/// All issues of a failed run, usable as a `std::error::Error`.
///
/// `Display` shows the first issue's message, the alternate form (`{:#}`)
/// shows a summary of every issue. A run that ended untyped without
/// reporting anything has no issue to show and displays
/// `validation failed`.
#[must_use]
#[derive(Debug, Clone)]
pub struct ValiError {
    issues: Issues,
}

impl ValiError {
    #[inline]
    pub fn new(issues: Issues) -> Self {
        Self { issues }
    }

    #[inline]
    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    /// The first reported issue, if any.
    #[inline]
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    #[inline]
    pub fn into_issues(self) -> Issues {
        self.issues
    }

    /// Renders every issue with a custom formatter.
    pub fn format_with<F: IssueFormatter>(&self, formatter: &F) -> String {
        formatter.format_issues(&self.issues)
    }
}

impl Display for ValiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.format_with(&IssueFormatConfig::default()));
        }
        match self.first() {
            Some(issue) => f.write_str(issue.message()),
            None => f.write_str("validation failed"),
        }
    }
}

impl std::error::Error for ValiError {}

impl From<Issues> for ValiError {
    fn from(issues: Issues) -> Self {
        Self::new(issues)
    }
}
