use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::Dataset;

/// Folds `dataset` through `items` in declared order.
///
/// Metadata items are skipped. When the config asks to abort early (either
/// flag), the fold stops as soon as the dataset carries an issue, so later
/// items never run. Otherwise every item runs and issues accumulate in
/// encounter order. An empty slice leaves the dataset untouched.
///
/// # Examples
///
/// ```
/// use vali_rail::{actions::{cron, isbn}, pipeline::run_items, BoxedAction, Config, Dataset, IntoAction, Value};
///
/// let items: Vec<BoxedAction> = vec![cron().into_action(), isbn().into_action()];
///
/// let mut all = Dataset::new(Value::from("nope"));
/// run_items(&items, &mut all, &Config::default());
/// assert_eq!(all.issues().len(), 2);
///
/// let mut first = Dataset::new(Value::from("nope"));
/// run_items(&items, &mut first, &Config::fail_fast());
/// assert_eq!(first.issues().len(), 1);
/// ```
pub fn run_items<A: Action>(items: &[A], dataset: &mut Dataset, config: &Config) {
    for (_index, item) in items.iter().enumerate() {
        if item.kind() == ActionKind::Metadata {
            continue;
        }

        if config.stops_on_issue() && dataset.has_issues() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                step = _index,
                skipped = item.action_type(),
                issues = dataset.issues().len(),
                abort_early = config.abort_early(),
                "pipeline aborted"
            );
            break;
        }

        item.run(dataset, config);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            step = _index,
            action = item.action_type(),
            typed = dataset.is_typed(),
            issues = dataset.issues().len(),
            "pipeline step finished"
        );
    }
}
