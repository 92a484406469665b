//! Rendering issue lists for humans.

use crate::types::issue::Issue;

/// Trait for customizing how an issue list is rendered.
pub trait IssueFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        issue.message().to_owned()
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_issues<'a>(&self, issues: impl IntoIterator<Item = &'a Issue>) -> String {
        issues
            .into_iter()
            .map(|issue| self.format_issue(issue))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based issue formatter.
///
/// # Examples
///
/// ```
/// use vali_rail::{Issue, IssueKind, IssueFormatConfig, IssueFormatter, Value};
///
/// let issue = Issue::builder(IssueKind::Validation, "cron", Value::from("x"))
///     .label("cron expression")
///     .build();
///
/// let text = IssueFormatConfig::compact().format_issues([&issue]);
/// assert_eq!(text, "Invalid cron expression: Received \"x\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFormatConfig {
    pub separator: String,
    pub bullet: Option<String>,
    pub show_path: bool,
    /// Put the path on its own indented line instead of after the message.
    pub path_on_new_line: bool,
    pub show_type: bool,
}

impl Default for IssueFormatConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            bullet: Some("× ".into()),
            show_path: true,
            path_on_new_line: true,
            show_type: false,
        }
    }
}

impl IssueFormatConfig {
    /// One issue per line, with its kind and type in brackets.
    #[inline]
    pub fn pretty() -> Self {
        Self { bullet: Some("- ".into()), show_type: true, path_on_new_line: false, ..Default::default() }
    }

    /// Messages only, separated by `; `.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: "; ".into(), bullet: None, show_path: false, path_on_new_line: false, show_type: false }
    }
}

impl IssueFormatter for IssueFormatConfig {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut result = String::new();
        if let Some(bullet) = &self.bullet {
            result.push_str(bullet);
        }
        if self.show_type {
            result.push_str(&format!("[{}:{}] ", issue.kind(), issue.issue_type()));
        }
        result.push_str(issue.message());

        if self.show_path {
            if let Some(path) = issue.dot_path() {
                if self.path_on_new_line {
                    result.push_str("\n  → at ");
                    result.push_str(&path);
                } else {
                    result.push_str(&format!(" (at {path})"));
                }
            }
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}

/// Renders every issue as `× message`, followed by `→ at path` when the issue
/// has a dot path.
///
/// ```
/// use vali_rail::{summarize, Issue, IssueKind, Value};
///
/// let a = Issue::builder(IssueKind::Validation, "isbn", Value::from("1")).label("ISBN").build();
/// let b = Issue::builder(IssueKind::Validation, "cron", Value::from("2")).label("cron expression").build();
///
/// assert_eq!(
///     summarize([&a, &b]),
///     "× Invalid ISBN: Received \"1\"\n× Invalid cron expression: Received \"2\""
/// );
/// ```
pub fn summarize<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> String {
    IssueFormatConfig::default().format_issues(issues)
}
