//! Transformations with full access to the dataset and config.

use crate::actions::raw_check::RawIssueInfo;
use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::Dataset;
use crate::types::value::Value;
use std::sync::Arc;

/// What a [`raw_transform`] callback sees.
pub struct RawTransformContext<'a> {
    action: &'a RawTransformAction,
    dataset: &'a mut Dataset,
    config: &'a Config,
    failed: bool,
}

impl RawTransformContext<'_> {
    /// The value being transformed.
    #[inline]
    pub fn value(&self) -> &Value {
        self.dataset.value()
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &*self.dataset
    }

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Reports a `raw_transform` issue. The returned value is then discarded.
    pub fn add_issue(&mut self, info: RawIssueInfo) {
        let (label, info) = info.into_parts();
        self.dataset.add_issue(self.action, label, self.config, info);
        self.failed = true;
    }
}

type RawTransformFn = dyn Fn(&mut RawTransformContext<'_>) -> Value + Send + Sync;

/// Transformation created by [`raw_transform`].
#[derive(Clone)]
pub struct RawTransformAction {
    operation: Arc<RawTransformFn>,
}

/// Creates a transformation that may report its own issues.
///
/// The callback returns the new value. If it reported an issue, the dataset
/// keeps its old value and becomes untyped.
///
/// ```
/// use vali_rail::{actions::{raw_transform, RawIssueInfo}, Action, Config, Dataset, Value};
///
/// let halve = raw_transform(|ctx| match ctx.value().as_f64() {
///     Some(n) if n % 2.0 == 0.0 => Value::from(n / 2.0),
///     _ => {
///         ctx.add_issue(RawIssueInfo::default().with_expected("even number"));
///         Value::Undefined
///     }
/// });
///
/// let mut dataset = Dataset::new(Value::from(3));
/// halve.run(&mut dataset, &Config::default());
/// assert_eq!(dataset.value(), &Value::from(3));
/// assert!(!dataset.is_typed());
/// assert_eq!(
///     dataset.issues()[0].message(),
///     "Invalid input: Expected even number but received 3"
/// );
/// ```
pub fn raw_transform<F>(operation: F) -> RawTransformAction
where
    F: Fn(&mut RawTransformContext<'_>) -> Value + Send + Sync + 'static,
{
    RawTransformAction { operation: Arc::new(operation) }
}

impl Action for RawTransformAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transformation
    }

    fn action_type(&self) -> &'static str {
        "raw_transform"
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if !dataset.is_typed() {
            return;
        }

        let mut ctx =
            RawTransformContext { action: self, dataset: &mut *dataset, config, failed: false };
        let output = (self.operation)(&mut ctx);
        let failed = ctx.failed;
        if failed {
            dataset.mark_untyped();
        } else {
            dataset.set_value(output);
        }
    }
}

impl core::fmt::Debug for RawTransformAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RawTransformAction")
    }
}
