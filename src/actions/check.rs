use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::{Predicate, Requirement};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;
use std::sync::Arc;

/// Custom validation created by [`check`].
#[derive(Clone)]
pub struct CheckAction {
    requirement: Arc<Predicate>,
    pub(crate) message: Option<ErrorMessage>,
}

/// Creates a validation from a caller-supplied requirement.
///
/// ```
/// use vali_rail::{actions::check, pipe, schemas::number, safe_parse, Config, Value};
///
/// let even = pipe!(
///     number(),
///     check(|v: &Value| v.as_f64().is_some_and(|n| n % 2.0 == 0.0)).with_message("must be even"),
/// );
///
/// let result = safe_parse(&even, Value::from(3), &Config::default());
/// assert_eq!(result.iter_issues().next().map(|i| i.message()), Some("must be even"));
/// ```
pub fn check<F>(requirement: F) -> CheckAction
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    CheckAction { requirement: Arc::new(requirement), message: None }
}

impl Action for CheckAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Validation
    }

    fn action_type(&self) -> &'static str {
        "check"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn requirement(&self) -> Option<Requirement> {
        Some(Requirement::Predicate(Arc::clone(&self.requirement)))
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() && !(self.requirement)(dataset.value()) {
            dataset.add_issue(self, "input", config, IssueInfo::default());
        }
    }
}

impl core::fmt::Debug for CheckAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CheckAction")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
