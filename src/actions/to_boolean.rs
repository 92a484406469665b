use crate::traits::action::{Action, ActionKind};
use crate::types::coerce;
use crate::types::config::Config;
use crate::types::dataset::Dataset;
use crate::types::value::Value;

/// Boolean coercion created by [`to_boolean`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToBooleanAction;

/// Converts the value to a boolean using host truthiness.
///
/// `""`, `0`, `-0`, `0n`, `NaN`, `false`, `null` and `undefined` become
/// `false`; everything else becomes `true`.
#[inline]
pub fn to_boolean() -> ToBooleanAction {
    ToBooleanAction
}

impl Action for ToBooleanAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "to_boolean"
    }

    fn run(&self, dataset: &mut Dataset, _config: &Config) {
        let truthy = coerce::to_boolean(dataset.value());
        dataset.set_value(Value::Bool(truthy));
    }
}
