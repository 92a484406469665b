//! Validations with full access to the dataset and config.

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::IssuePath;
use crate::types::message::ErrorMessage;
use crate::types::value::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// Details of an issue reported from a raw step.
///
/// Unset fields fall back to the same defaults as any other action: label
/// `input`, the current value as input, and the description of that input as
/// `received`.
#[derive(Debug, Clone, Default)]
pub struct RawIssueInfo {
    pub label: Option<Cow<'static, str>>,
    pub input: Option<Value>,
    pub expected: Option<String>,
    pub received: Option<String>,
    pub message: Option<ErrorMessage>,
    pub path: Option<IssuePath>,
}

impl RawIssueInfo {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

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

    pub(crate) fn into_parts(self) -> (Cow<'static, str>, IssueInfo) {
        let info = IssueInfo {
            input: self.input,
            expected: self.expected,
            received: self.received,
            message: self.message,
            path: self.path,
        };
        (self.label.unwrap_or(Cow::Borrowed("input")), info)
    }
}

/// What a [`raw_check`] callback sees.
pub struct RawCheckContext<'a> {
    action: &'a RawCheckAction,
    dataset: &'a mut Dataset,
    config: &'a Config,
}

impl RawCheckContext<'_> {
    /// The value under validation.
    #[inline]
    pub fn value(&self) -> &Value {
        self.dataset.value()
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &*self.dataset
    }

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Reports a `raw_check` issue. May be called any number of times.
    pub fn add_issue(&mut self, info: RawIssueInfo) {
        let (label, info) = info.into_parts();
        self.dataset.add_issue(self.action, label, self.config, info);
    }
}

type RawCheckFn = dyn Fn(&mut RawCheckContext<'_>) + Send + Sync;

/// Validation created by [`raw_check`].
#[derive(Clone)]
pub struct RawCheckAction {
    check: Arc<RawCheckFn>,
}

/// Creates a validation that reports its own issues.
///
/// The callback only runs while the dataset is typed. It can report several
/// issues, each with its own label, path and message.
///
/// ```
/// use vali_rail::{actions::{raw_check, RawIssueInfo}, Action, Config, Dataset, Value};
///
/// let no_spaces = raw_check(|ctx| {
///     if ctx.value().as_str().is_some_and(|s| s.contains(' ')) {
///         ctx.add_issue(RawIssueInfo::default().with_label("spacing"));
///     }
/// });
///
/// let mut dataset = Dataset::new(Value::from("a b"));
/// no_spaces.run(&mut dataset, &Config::default());
/// assert_eq!(dataset.issues()[0].message(), "Invalid spacing: Received \"a b\"");
/// assert!(dataset.is_typed());
/// ```
pub fn raw_check<F>(check: F) -> RawCheckAction
where
    F: Fn(&mut RawCheckContext<'_>) + Send + Sync + 'static,
{
    RawCheckAction { check: Arc::new(check) }
}

impl Action for RawCheckAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Validation
    }

    fn action_type(&self) -> &'static str {
        "raw_check"
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() {
            let mut ctx = RawCheckContext { action: self, dataset, config };
            (self.check)(&mut ctx);
        }
    }
}

impl core::fmt::Debug for RawCheckAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RawCheckAction")
    }
}
