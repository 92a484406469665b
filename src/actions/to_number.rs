use crate::traits::action::{Action, ActionKind};
use crate::types::coerce;
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;

/// Number coercion created by [`to_number`].
#[derive(Debug, Clone, Default)]
pub struct ToNumberAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Converts the value to a number.
///
/// A conversion yielding `NaN` still replaces the value but is reported.
/// Values that cannot be converted at all, such as symbols, are left in place.
///
/// ```
/// use vali_rail::{actions::to_number, Action, Config, Dataset, Value};
///
/// let mut dataset = Dataset::new(Value::from(" 42 "));
/// to_number().run(&mut dataset, &Config::default());
/// assert_eq!(dataset.value(), &Value::from(42));
///
/// let mut dataset = Dataset::new(Value::object([("a", Value::from(1))]));
/// to_number().run(&mut dataset, &Config::default());
/// assert!(dataset.value().is_nan());
/// assert_eq!(dataset.issues()[0].message(), "Invalid number: Received NaN");
/// ```
#[inline]
pub fn to_number() -> ToNumberAction {
    ToNumberAction::default()
}

impl Action for ToNumberAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "to_number"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        match coerce::to_number(dataset.value()) {
            Ok(n) => {
                dataset.set_value(Value::Number(n));
                if n.is_nan() {
                    dataset.add_issue(self, "number", config, IssueInfo::default());
                    dataset.mark_untyped();
                }
            }
            Err(_) => {
                dataset.add_issue(self, "number", config, IssueInfo::default());
                dataset.mark_untyped();
            }
        }
    }
}
