use crate::traits::action::{Action, ActionKind};
use crate::types::coerce;
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;

/// Issue `received` text for an unparseable date.
const INVALID_DATE_RECEIVED: &str = "\"Invalid Date\"";

/// Date coercion created by [`to_date`].
#[derive(Debug, Clone, Default)]
pub struct ToDateAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Converts the value to a date.
///
/// Input that parses to an invalid date replaces the value with the invalid
/// date sentinel and is reported. Input the conversion rejects outright,
/// bigints and symbols, is left in place.
///
/// ```
/// use vali_rail::{actions::to_date, Action, Config, Dataset, Value};
///
/// let mut dataset = Dataset::new(Value::from("invalid"));
/// to_date().run(&mut dataset, &Config::default());
///
/// assert!(dataset.value().as_date().is_some_and(|d| !d.is_valid()));
/// assert_eq!(dataset.issues()[0].received(), "\"Invalid Date\"");
/// ```
#[inline]
pub fn to_date() -> ToDateAction {
    ToDateAction::default()
}

impl Action for ToDateAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "to_date"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        match coerce::to_date(dataset.value()) {
            Ok(date) if date.is_valid() => dataset.set_value(Value::Date(date)),
            Ok(date) => {
                dataset.set_value(Value::Date(date));
                dataset.add_issue(
                    self,
                    "date",
                    config,
                    IssueInfo::default().with_received(INVALID_DATE_RECEIVED),
                );
                dataset.mark_untyped();
            }
            Err(_) => {
                dataset.add_issue(self, "date", config, IssueInfo::default());
                dataset.mark_untyped();
            }
        }
    }
}
