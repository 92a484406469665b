//! Shorthand for assembling pipelines and messages.
//!
//! - [`macro@crate::pipe`] builds a [`Pipe`](crate::Pipe) from a list of actions.
//! - [`macro@crate::message`] builds a computed [`ErrorMessage`](crate::ErrorMessage)
//!   whose text is only formatted when an issue is rendered.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{actions::cron, message, pipe, schemas::string, safe_parse, Config, Value};
//!
//! let schedule = pipe!(string(), cron().with_message(message!("bad schedule for {}", "backup")));
//! let result = safe_parse(&schedule, Value::from("daily"), &Config::default());
//!
//! assert_eq!(result.iter_issues().next().map(|i| i.message()), Some("bad schedule for backup"));
//! ```

/// Builds a [`Pipe`](crate::Pipe) running the given actions in order.
///
/// Any action can be used, including another pipe. A trailing comma is
/// accepted and `pipe!()` yields an empty pipe.
///
/// # Examples
///
/// ```
/// use vali_rail::{actions::{to_number, to_string}, pipe, schemas::unknown, Action};
///
/// let inner = pipe!(to_string());
/// let outer = pipe!(unknown(), inner, to_number(),);
///
/// assert_eq!(outer.len(), 3);
/// assert_eq!(outer.action_type(), "unknown");
/// ```
#[macro_export]
macro_rules! pipe {
    ($($item:expr),* $(,)?) => {
        $crate::Pipe::new()$(.then($item))*
    };
}

/// Builds a computed [`ErrorMessage`](crate::ErrorMessage) from format
/// arguments.
///
/// Arguments are moved into the message and formatted each time the message
/// is rendered, which happens at most once per issue. The issue itself is
/// available as `|issue| ...` with the closure form.
///
/// # Examples
///
/// ```
/// use vali_rail::{message, Issue, IssueKind, Value};
///
/// let fixed = message!("expected {} digits", 13);
/// let dynamic = message!(|issue| format!("got {}", issue.received()));
///
/// let issue = Issue::builder(IssueKind::Validation, "isbn", Value::from("12")).build();
/// assert_eq!(fixed.render(&issue), "expected 13 digits");
/// assert_eq!(dynamic.render(&issue), "got \"12\"");
/// ```
#[macro_export]
macro_rules! message {
    (|$issue:ident| $body:expr) => {
        $crate::ErrorMessage::computed(move |$issue: &$crate::Issue| $body)
    };
    ($($arg:tt)*) => {
        $crate::ErrorMessage::computed(move |_: &$crate::Issue| format!($($arg)*))
    };
}
