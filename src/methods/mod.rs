//! Entry points that run an action against raw input.
//!
//! [`run`] returns the full dataset, [`safe_parse`] a [`Validation`],
//! [`parse`] a `Result`, and [`is`] a plain boolean. The metadata readers
//! ([`get_examples`], [`get_title`], [`get_description`]) walk a pipeline
//! without running it.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{actions::iso_currency_code, parse, pipe, schemas::string, Config, Value};
//!
//! let currency = pipe!(string(), iso_currency_code());
//!
//! assert_eq!(parse(&currency, Value::from("EUR"), &Config::default()).ok(), Some(Value::from("EUR")));
//!
//! let err = parse(&currency, Value::from("EURO"), &Config::default()).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid iso_currency_code: Received \"EURO\"");
//! ```
mod metadata;

pub use metadata::{get_description, get_examples, get_title};

use crate::traits::action::Action;
use crate::types::config::Config;
use crate::types::dataset::Dataset;
use crate::types::vali_error::ValiError;
use crate::types::value::Value;
use crate::validation::core::Validation;

/// Runs `action` on a fresh, typed dataset holding `input`.
pub fn run<A>(action: &A, input: impl Into<Value>, config: &Config) -> Dataset
where
    A: Action + ?Sized,
{
    let mut dataset = Dataset::new(input.into());
    action.run(&mut dataset, config);
    dataset
}

/// Runs `action` and returns the output value or every reported issue.
#[inline]
pub fn safe_parse<A>(action: &A, input: impl Into<Value>, config: &Config) -> Validation
where
    A: Action + ?Sized,
{
    Validation::from_dataset(run(action, input, config))
}

/// Runs `action` and returns the output value or a [`ValiError`].
///
/// # Errors
///
/// Returns a [`ValiError`] carrying all issues when the run did not succeed.
pub fn parse<A>(action: &A, input: impl Into<Value>, config: &Config) -> Result<Value, ValiError>
where
    A: Action + ?Sized,
{
    match safe_parse(action, input, config) {
        Validation::Valid(value) => Ok(value),
        Validation::Invalid(issues) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                action = action.action_type(),
                issues = issues.len(),
                first = issues.first().map(|issue| issue.message()),
                "parse failed"
            );
            Err(ValiError::new(issues))
        }
    }
}

/// Returns `true` if `input` passes `action`. Stops at the first issue.
///
/// ```
/// use vali_rail::{actions::cron, is, pipe, schemas::string, Value};
///
/// let schedule = pipe!(string(), cron());
/// assert!(is(&schedule, Value::from("0 0 * * 0")));
/// assert!(!is(&schedule, Value::from(0)));
/// ```
pub fn is<A>(action: &A, input: impl Into<Value>) -> bool
where
    A: Action + ?Sized,
{
    run(action, input, &Config::fail_fast()).is_success()
}
