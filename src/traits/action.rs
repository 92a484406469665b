use crate::types::config::Config;
use crate::types::dataset::Dataset;
use crate::types::issue::{IssueKind, Requirement};
use crate::types::message::ErrorMessage;
use crate::actions::metadata::Metadata;
use std::sync::Arc;

/// What a pipeline step does to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Checks the base shape of the input.
    Schema,
    /// Refines an already typed value; never changes it.
    Validation,
    /// May replace the value, possibly with one of a different type.
    Transformation,
    /// Describes the pipeline; running it does nothing.
    Metadata,
}

impl ActionKind {
    /// Issue kind reported by steps of this kind.
    pub fn issue_kind(self) -> IssueKind {
        match self {
            Self::Schema => IssueKind::Schema,
            Self::Transformation => IssueKind::Transformation,
            Self::Validation | Self::Metadata => IssueKind::Validation,
        }
    }
}

/// A boxed, shareable pipeline step.
pub type BoxedAction = Box<dyn Action>;

/// The uniform contract every pipeline step implements.
///
/// An action is an immutable policy value. [`Action::run`] receives the
/// dataset produced by the previous step and may:
///
/// - append issues (never remove or reorder them),
/// - replace the value (transformations only),
/// - flip `typed` to `false` when reporting a failure.
///
/// Actions hold no per-run state, so one instance can serve any number of
/// datasets concurrently.
///
/// # Examples
///
/// ```
/// use vali_rail::{Action, ActionKind, Config, Dataset, IssueInfo, Value};
///
/// struct NonEmpty;
///
/// impl Action for NonEmpty {
///     fn kind(&self) -> ActionKind {
///         ActionKind::Validation
///     }
///
///     fn action_type(&self) -> &'static str {
///         "non_empty"
///     }
///
///     fn run(&self, dataset: &mut Dataset, config: &Config) {
///         if dataset.is_typed() && dataset.value().as_str() == Some("") {
///             dataset.add_issue(self, "length", config, IssueInfo::default());
///         }
///     }
/// }
///
/// let mut dataset = Dataset::new(Value::from(""));
/// NonEmpty.run(&mut dataset, &Config::default());
/// assert_eq!(dataset.issues()[0].message(), "Invalid length: Received \"\"");
/// ```
pub trait Action: Send + Sync {
    fn kind(&self) -> ActionKind;

    /// Stable name of the step, e.g. `cron` or `to_number`.
    fn action_type(&self) -> &'static str;

    /// Description of the expected input, used as the issue's `expected`.
    fn expects(&self) -> Option<&str> {
        None
    }

    /// Message configured on this action, if any.
    fn message(&self) -> Option<&ErrorMessage> {
        None
    }

    /// The predicate this action enforces, exposed on the issues it raises.
    fn requirement(&self) -> Option<Requirement> {
        None
    }

    /// Applies the step to `dataset`.
    fn run(&self, dataset: &mut Dataset, config: &Config);

    /// Nested steps, for composite actions.
    fn items(&self) -> Option<&[BoxedAction]> {
        None
    }

    /// Descriptive payload, for metadata actions.
    fn metadata(&self) -> Option<&Metadata> {
        None
    }
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn kind(&self) -> ActionKind {
        (**self).kind()
    }

    fn action_type(&self) -> &'static str {
        (**self).action_type()
    }

    fn expects(&self) -> Option<&str> {
        (**self).expects()
    }

    fn message(&self) -> Option<&ErrorMessage> {
        (**self).message()
    }

    fn requirement(&self) -> Option<Requirement> {
        (**self).requirement()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        (**self).run(dataset, config)
    }

    fn items(&self) -> Option<&[BoxedAction]> {
        (**self).items()
    }

    fn metadata(&self) -> Option<&Metadata> {
        (**self).metadata()
    }
}

impl<A: Action + ?Sized> Action for Arc<A> {
    fn kind(&self) -> ActionKind {
        (**self).kind()
    }

    fn action_type(&self) -> &'static str {
        (**self).action_type()
    }

    fn expects(&self) -> Option<&str> {
        (**self).expects()
    }

    fn message(&self) -> Option<&ErrorMessage> {
        (**self).message()
    }

    fn requirement(&self) -> Option<Requirement> {
        (**self).requirement()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        (**self).run(dataset, config)
    }

    fn items(&self) -> Option<&[BoxedAction]> {
        (**self).items()
    }

    fn metadata(&self) -> Option<&Metadata> {
        (**self).metadata()
    }
}

/// Conversion into a [`BoxedAction`], used by pipeline builders.
pub trait IntoAction {
    fn into_action(self) -> BoxedAction;
}

impl<A: Action + 'static> IntoAction for A {
    #[inline]
    fn into_action(self) -> BoxedAction {
        Box::new(self)
    }
}
