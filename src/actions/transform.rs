use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::Dataset;
use crate::types::value::Value;
use std::sync::Arc;

type TransformFn = dyn Fn(Value) -> Value + Send + Sync;

/// Infallible transformation created by [`transform`].
#[derive(Clone)]
pub struct TransformAction {
    operation: Arc<TransformFn>,
}

/// Replaces the value with the result of `operation`.
///
/// Skipped once the dataset is untyped.
///
/// ```
/// use vali_rail::{actions::transform, pipe, schemas::string, run, Config, Value};
///
/// let shout = pipe!(
///     string(),
///     transform(|v| Value::from(v.as_str().unwrap_or_default().to_uppercase())),
/// );
/// let dataset = run(&shout, Value::from("hi"), &Config::default());
/// assert_eq!(dataset.value(), &Value::from("HI"));
/// ```
pub fn transform<F>(operation: F) -> TransformAction
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    TransformAction { operation: Arc::new(operation) }
}

impl Action for TransformAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "transform"
    }

    fn run(&self, dataset: &mut Dataset, _config: &Config) {
        if dataset.is_typed() {
            let value = dataset.take_value();
            dataset.set_value((self.operation)(value));
        }
    }
}

impl core::fmt::Debug for TransformAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("TransformAction")
    }
}
