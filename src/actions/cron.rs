//! Five-field cron expression validation.

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::Requirement;
use crate::types::message::ErrorMessage;
use core::fmt;

/// Inclusive value range of each field: minute, hour, day, month, weekday.
const CRON_FIELD_RANGES: [(u128, u128); 5] = [(0, 59), (0, 23), (1, 31), (1, 12), (0, 6)];

/// Parses a non-empty run of ASCII digits, saturating on overflow.
fn parse_digits(s: &str) -> Option<u128> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.bytes().fold(0u128, |acc, b| {
        acc.saturating_mul(10).saturating_add(u128::from(b - b'0'))
    }))
}

fn in_range(value: &str, min: u128, max: u128) -> Option<u128> {
    parse_digits(value).filter(|n| (min..=max).contains(n))
}

fn is_valid_item(item: &str, min: u128, max: u128) -> bool {
    let base = match item.split_once('/') {
        Some((base, step)) => {
            if !parse_digits(step).is_some_and(|step| step >= 1) {
                return false;
            }
            base
        }
        None => item,
    };

    if base == "*" {
        return true;
    }

    match base.split_once('-') {
        Some((from, to)) => match (in_range(from, min, max), in_range(to, min, max)) {
            (Some(from), Some(to)) => from <= to,
            _ => false,
        },
        None => in_range(base, min, max).is_some(),
    }
}

fn is_valid_field(field: &str, min: u128, max: u128) -> bool {
    !field.is_empty() && field.split(',').all(|item| is_valid_item(item, min, max))
}

/// Returns `true` if `input` is a standard five-field cron expression.
///
/// Fields are separated by exactly one space. Each field is a comma-separated
/// list of `*`, `N` or `N-M`, optionally followed by `/step` with a positive
/// step.
///
/// ```
/// use vali_rail::actions::is_cron;
///
/// assert!(is_cron("*/15 9-17 * * 1-5"));
/// assert!(!is_cron("*  * * * *"));
/// assert!(!is_cron("30-10 * * * *"));
/// ```
pub fn is_cron(input: &str) -> bool {
    let fields: Vec<&str> = input.split(' ').collect();
    fields.len() == CRON_FIELD_RANGES.len()
        && fields
            .iter()
            .zip(CRON_FIELD_RANGES)
            .all(|(field, (min, max))| is_valid_field(field, min, max))
}

/// Validation action for cron expressions. Created by [`cron`].
#[derive(Debug, Clone, Default)]
pub struct CronAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Creates a cron expression validation.
///
/// ```
/// use vali_rail::{actions::cron, Action, Config, Dataset, Value};
///
/// let mut ok = Dataset::new(Value::from("* * * * *"));
/// cron().run(&mut ok, &Config::default());
/// assert!(ok.is_success());
///
/// let mut bad = Dataset::new(Value::from("*/0 * * * *"));
/// cron().run(&mut bad, &Config::default());
/// assert_eq!(bad.issues()[0].issue_type(), "cron");
/// ```
#[inline]
pub fn cron() -> CronAction {
    CronAction::default()
}

impl Action for CronAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Validation
    }

    fn action_type(&self) -> &'static str {
        "cron"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn requirement(&self) -> Option<Requirement> {
        Some(Requirement::predicate(|value| value.as_str().is_some_and(is_cron)))
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() && !dataset.value().as_str().is_some_and(is_cron) {
            dataset.add_issue(self, "cron expression", config, IssueInfo::default());
        }
    }
}

/// The five fields of a cron expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronFields {
    pub minute: String,
    pub hour: String,
    pub day: String,
    pub month: String,
    pub weekday: String,
}

impl Default for CronFields {
    fn default() -> Self {
        Self {
            minute: "*".into(),
            hour: "*".into(),
            day: "*".into(),
            month: "*".into(),
            weekday: "*".into(),
        }
    }
}

/// A string that is meant to hold a cron expression.
///
/// This is a naming device only. Constructing one, including through
/// [`build_cron`], does not check the expression; run it through [`cron`] for
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CronExpression(String);

impl CronExpression {
    /// Wraps a string without checking it.
    pub fn new_unchecked(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CronExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Joins the fields with single spaces.
///
/// ```
/// use vali_rail::actions::{build_cron, is_cron, CronFields};
///
/// let expr = build_cron(&CronFields { minute: "0".into(), hour: "9".into(), ..Default::default() });
/// assert_eq!(expr.as_str(), "0 9 * * *");
/// assert!(is_cron(expr.as_str()));
/// ```
pub fn build_cron(fields: &CronFields) -> CronExpression {
    CronExpression(format!(
        "{} {} {} {} {}",
        fields.minute, fields.hour, fields.day, fields.month, fields.weekday
    ))
}
