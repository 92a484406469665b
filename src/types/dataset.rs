//! The mutable carrier threaded through a pipeline.
//!
//! A [`Dataset`] holds the current value, whether that value still conforms
//! to the type expected at this point of the pipeline, and every issue
//! reported so far. It is created fresh for each validation call.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{Dataset, Value};
//!
//! let mut dataset = Dataset::new(Value::from("42"));
//! assert!(dataset.is_typed());
//! assert!(!dataset.has_issues());
//!
//! dataset.set_value(Value::from(42));
//! dataset.mark_untyped();
//! assert!(!dataset.is_typed());
//! ```
use crate::traits::action::Action;
use crate::types::config::Config;
use crate::types::issue::{Issue, IssuePath};
use crate::types::issues::Issues;
use crate::types::message::ErrorMessage;
use crate::types::value::Value;
use std::borrow::Cow;

/// Current value, typed flag and accumulated issues of one run.
#[derive(Debug, Clone)]
pub struct Dataset<V = Value> {
    value: V,
    typed: bool,
    issues: Issues,
}

impl<V> Dataset<V> {
    /// A dataset whose value is accepted as typed.
    #[inline]
    pub fn new(value: V) -> Self {
        Self { value, typed: true, issues: Issues::new() }
    }

    /// A dataset that starts out untyped. Validations on it are skipped.
    ///
    /// It carries no issue, so it converts to an `Invalid` outcome with an
    /// empty issue list unless a step reports one.
    #[inline]
    pub fn untyped(value: V) -> Self {
        Self { value, typed: false, issues: Issues::new() }
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value in place. Does not touch the typed flag.
    #[inline]
    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }

    #[inline]
    pub fn is_typed(&self) -> bool {
        self.typed
    }

    /// Flags the value as no longer conforming. There is no way back.
    #[inline]
    pub fn mark_untyped(&mut self) {
        self.typed = false;
    }

    #[inline]
    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    #[inline]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Appends a pre-built issue.
    #[inline]
    pub fn push_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// `true` when the value is typed and no issue was reported.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.typed && self.issues.is_empty()
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (V, bool, Issues) {
        (self.value, self.typed, self.issues)
    }
}

impl<V: Default> Dataset<V> {
    /// Moves the value out, leaving the default in its place.
    #[inline]
    pub fn take_value(&mut self) -> V {
        core::mem::take(&mut self.value)
    }
}

impl Dataset<Value> {
    /// Records a failure raised by `action`.
    ///
    /// Fields not supplied through `info` are derived: the input defaults to
    /// the current value, `expected` to the action's expectation, `received`
    /// to the description of the input. The message source is picked in
    /// order: config override, `info.message`, the action's own message, and
    /// finally the built-in message using `label`.
    pub fn add_issue<A>(
        &mut self,
        action: &A,
        label: impl Into<Cow<'static, str>>,
        config: &Config,
        info: IssueInfo,
    )
    where
        A: Action + ?Sized,
    {
        let input = info.input.unwrap_or_else(|| self.value.clone());
        let expected = info.expected.as_deref().or_else(|| action.expects());
        let message = config
            .message()
            .or(info.message.as_ref())
            .or_else(|| action.message())
            .cloned();

        let mut builder = Issue::builder(action.kind().issue_kind(), action.action_type(), input)
            .label(label)
            .expected(expected)
            .requirement(action.requirement())
            .path(info.path)
            .lang(config.lang())
            .message(message);
        if let Some(received) = info.received {
            builder = builder.received(received);
        }

        self.issues.push(builder.build());
    }
}

/// Optional overrides for [`Dataset::add_issue`].
///
/// # Examples
///
/// ```
/// use vali_rail::{IssueInfo, Value};
///
/// let info = IssueInfo::default()
///     .with_received("\"Invalid Date\"")
///     .with_input(Value::Null);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IssueInfo {
    pub input: Option<Value>,
    pub expected: Option<String>,
    pub received: Option<String>,
    pub message: Option<ErrorMessage>,
    pub path: Option<IssuePath>,
}

impl IssueInfo {
    #[must_use]
    pub fn with_input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    #[must_use]
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: IssuePath) -> Self {
        self.path = Some(path);
        self
    }
}
