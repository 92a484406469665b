//! Error messages attached to actions and issues.
//!
//! A message is either a fixed string or a closure computing the text from the
//! issue it describes. Computed messages are only invoked when the issue's
//! message is actually read, so expensive formatting never runs on issues
//! nobody looks at.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{ErrorMessage, Issue};
//!
//! let fixed = ErrorMessage::from("must be a cron expression");
//! let computed = ErrorMessage::computed(|issue: &Issue| format!("bad input {}", issue.received()));
//!
//! assert!(fixed.is_static());
//! assert!(!computed.is_static());
//! ```
use crate::types::issue::Issue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Closure form of an [`ErrorMessage`].
pub type MessageFn = dyn Fn(&Issue) -> String + Send + Sync;

/// A static or lazily computed issue message.
#[derive(Clone)]
pub enum ErrorMessage {
    Static(Cow<'static, str>),
    Computed(Arc<MessageFn>),
}

impl ErrorMessage {
    /// Wraps a closure that renders the message from the issue.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Issue) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Produces the message text for `issue`.
    ///
    /// A panicking closure propagates to the caller.
    pub fn render(&self, issue: &Issue) -> String {
        match self {
            Self::Static(text) => text.clone().into_owned(),
            Self::Computed(f) => f(issue),
        }
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<&'static str> for ErrorMessage {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::Static(Cow::Borrowed(text))
    }
}

impl From<String> for ErrorMessage {
    #[inline]
    fn from(text: String) -> Self {
        Self::Static(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for ErrorMessage {
    #[inline]
    fn from(text: Cow<'static, str>) -> Self {
        Self::Static(text)
    }
}

/// Builds the built-in message used when neither the call nor the action
/// supplies one.
///
/// ```
/// use vali_rail::types::message::default_message;
///
/// assert_eq!(default_message("ISBN", None, "\"123\""), "Invalid ISBN: Received \"123\"");
/// assert_eq!(
///     default_message("type", Some("string"), "123"),
///     "Invalid type: Expected string but received 123"
/// );
/// ```
pub fn default_message(label: &str, expected: Option<&str>, received: &str) -> String {
    match expected {
        Some(expected) => format!("Invalid {label}: Expected {expected} but received {received}"),
        None => format!("Invalid {label}: Received {received}"),
    }
}
