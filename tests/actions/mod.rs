use vali_rail::{Action, Config, Dataset, Value};

pub mod check;
pub mod isbn;
pub mod metadata;
pub mod raw;

/// Runs a single action on a fresh typed dataset with the default config.
pub(crate) fn apply<A: Action>(action: &A, input: impl Into<Value>) -> Dataset {
    let mut dataset = Dataset::new(input.into());
    action.run(&mut dataset, &Config::default());
    dataset
}
