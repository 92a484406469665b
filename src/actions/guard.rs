//! Type-narrowing checks with a caller-supplied predicate.

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::{Predicate, Requirement};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;
use std::sync::Arc;

/// Narrowing step created by [`guard`].
///
/// Unlike ordinary validations, a failing guard also marks the dataset
/// untyped: the value does not satisfy the narrowed type it promised.
#[derive(Clone)]
pub struct GuardAction {
    predicate: Arc<Predicate>,
    pub(crate) message: Option<ErrorMessage>,
}

/// Creates a guard from a type predicate.
///
/// ```
/// use vali_rail::{actions::guard, Action, Config, Dataset, Value};
///
/// let positive = guard(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0));
///
/// let mut dataset = Dataset::new(Value::from(-1));
/// positive.run(&mut dataset, &Config::default());
/// assert!(!dataset.is_typed());
/// assert_eq!(dataset.issues()[0].message(), "Invalid input: Received -1");
/// ```
pub fn guard<F>(predicate: F) -> GuardAction
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    GuardAction { predicate: Arc::new(predicate), message: None }
}

impl Action for GuardAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "guard"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn requirement(&self) -> Option<Requirement> {
        Some(Requirement::Predicate(Arc::clone(&self.predicate)))
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() && !(self.predicate)(dataset.value()) {
            dataset.add_issue(self, "input", config, IssueInfo::default());
            dataset.mark_untyped();
        }
    }
}

impl core::fmt::Debug for GuardAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GuardAction")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
