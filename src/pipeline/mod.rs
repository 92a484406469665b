//! Ordered composition of pipeline steps.
//!
//! A [`Pipe`] owns a sequence of actions and is itself an [`Action`], so pipes
//! nest freely. Nested pipes run recursively with the same config, which keeps
//! execution order identical to the flattened sequence.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{actions::{iso_country_code, to_string}, pipe, schemas::unknown, run, Config, Value};
//!
//! let country = pipe!(unknown(), to_string(), iso_country_code());
//!
//! let dataset = run(&country, Value::from("USA"), &Config::default());
//! assert!(dataset.is_success());
//! ```
mod executor;

pub use executor::run_items;

use crate::traits::action::{Action, ActionKind, BoxedAction, IntoAction};
use crate::types::config::Config;
use crate::types::dataset::Dataset;

/// An ordered sequence of actions sharing one config and one dataset.
#[derive(Default)]
pub struct Pipe {
    items: Vec<BoxedAction>,
}

impl Pipe {
    /// An empty pipe. Running it leaves the dataset unchanged.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn from_actions(items: Vec<BoxedAction>) -> Self {
        Self { items }
    }

    /// Appends a step.
    #[inline]
    pub fn then<A: IntoAction>(mut self, action: A) -> Self {
        self.items.push(action.into_action());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, BoxedAction> {
        self.items.iter()
    }
}

impl Action for Pipe {
    /// A pipe starting with a schema is a schema, anything else may transform.
    fn kind(&self) -> ActionKind {
        match self.items.first().map(|item| item.kind()) {
            Some(ActionKind::Schema) => ActionKind::Schema,
            _ => ActionKind::Transformation,
        }
    }

    fn action_type(&self) -> &'static str {
        match self.items.first() {
            Some(first) if first.kind() == ActionKind::Schema => first.action_type(),
            _ => "pipe",
        }
    }

    fn expects(&self) -> Option<&str> {
        self.items.first().and_then(|first| first.expects())
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        run_items(&self.items, dataset, config);
    }

    fn items(&self) -> Option<&[BoxedAction]> {
        Some(&self.items)
    }
}

impl core::fmt::Debug for Pipe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.items.iter().map(|item| item.action_type()))
            .finish()
    }
}

impl<A: IntoAction> FromIterator<A> for Pipe {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self { items: iter.into_iter().map(IntoAction::into_action).collect() }
    }
}
