use crate::traits::action::{Action, ActionKind};
use crate::types::coerce;
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;

/// String coercion created by [`to_string`].
#[derive(Debug, Clone, Default)]
pub struct ToStringAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Converts the value to its host string form.
///
/// ```
/// use vali_rail::{actions::to_string, Action, Config, Dataset, Object, Value};
///
/// let mut dataset = Dataset::new(Value::array([Value::from(1), Value::Null, Value::from("a")]));
/// to_string().run(&mut dataset, &Config::default());
/// assert_eq!(dataset.value(), &Value::from("1,,a"));
///
/// let bare = Object::null_prototype(Vec::<(String, Value)>::new());
/// let mut dataset = Dataset::new(Value::from(bare));
/// to_string().run(&mut dataset, &Config::default());
/// assert_eq!(dataset.issues()[0].message(), "Invalid string: Received null");
/// ```
#[inline]
pub fn to_string() -> ToStringAction {
    ToStringAction::default()
}

impl Action for ToStringAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "to_string"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        match coerce::to_string(dataset.value()) {
            Ok(s) => dataset.set_value(Value::String(s)),
            Err(_) => {
                dataset.add_issue(self, "string", config, IssueInfo::default());
                dataset.mark_untyped();
            }
        }
    }
}
