use crate::traits::action::{Action, ActionKind};
use crate::types::coerce;
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;

/// Bigint coercion created by [`to_bigint`].
#[derive(Debug, Clone, Default)]
pub struct ToBigintAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Converts the value to a bigint.
///
/// On failure the value is left untouched.
///
/// ```
/// use vali_rail::{actions::to_bigint, Action, Config, Dataset, Value};
///
/// let mut dataset = Dataset::new(Value::from("-17"));
/// to_bigint().run(&mut dataset, &Config::default());
/// assert_eq!(dataset.value(), &Value::BigInt(-17));
///
/// let mut dataset = Dataset::new(Value::from(123.45));
/// to_bigint().run(&mut dataset, &Config::default());
/// assert_eq!(dataset.value(), &Value::from(123.45));
/// assert_eq!(dataset.issues()[0].message(), "Invalid bigint: Received 123.45");
/// ```
#[inline]
pub fn to_bigint() -> ToBigintAction {
    ToBigintAction::default()
}

impl Action for ToBigintAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "to_bigint"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        match coerce::to_bigint(dataset.value()) {
            Ok(n) => dataset.set_value(Value::BigInt(n)),
            Err(_) => {
                dataset.add_issue(self, "bigint", config, IssueInfo::default());
                dataset.mark_untyped();
            }
        }
    }
}
