use crate::types::dataset::Dataset;
use crate::types::issue::Issue;
use crate::types::issues::Issues;
use crate::types::value::Value;

/// Outcome of a completed validation run.
///
/// `Validation<A>` is either the typed output of a run, or every issue the run
/// reported, in the order they were reported. Unlike `Result`, the failure side
/// always carries the full issue list.
///
/// # Examples
///
/// ```
/// use vali_rail::{actions::isbn, safe_parse, schemas::string, Config, Value};
/// use vali_rail::pipe;
///
/// let schema = pipe!(string(), isbn());
///
/// let ok = safe_parse(&schema, Value::from("0306406152"), &Config::default());
/// assert!(ok.is_valid());
///
/// let bad = safe_parse(&schema, Value::from("0306406153"), &Config::default());
/// assert_eq!(bad.issues().map(|i| i.len()), Some(1));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub enum Validation<A = Value> {
    Valid(A),
    Invalid(Issues),
}

impl<A> Validation<A> {
    /// Creates a valid value.
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single issue.
    #[inline]
    pub fn invalid(issue: Issue) -> Self {
        Self::Invalid(core::iter::once(issue).collect())
    }

    /// Creates an invalid value from many issues.
    #[inline]
    pub fn invalid_many<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = Issue>,
    {
        Self::Invalid(issues.into_iter().collect())
    }

    /// Converts a finished dataset. The run succeeded when the value is
    /// typed and no issue was reported.
    ///
    /// Every built-in step reports an issue whenever it marks a dataset
    /// untyped. A dataset that is untyped without any issue, such as one
    /// made with [`Dataset::untyped`] or by a custom [`Action`] that only
    /// calls [`Dataset::mark_untyped`], still fails: it becomes `Invalid`
    /// with an empty issue list.
    ///
    /// ```
    /// use vali_rail::{Dataset, Validation, Value};
    ///
    /// let silent = Validation::from_dataset(Dataset::untyped(Value::Null));
    /// assert!(silent.is_invalid());
    /// assert_eq!(silent.issues().map(|i| i.is_empty()), Some(true));
    /// ```
    ///
    /// [`Action`]: crate::Action
    pub fn from_dataset(dataset: Dataset<A>) -> Self {
        let (value, typed, issues) = dataset.into_parts();
        if typed && issues.is_empty() {
            Self::Valid(value)
        } else {
            Self::Invalid(issues)
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the issues of an invalid outcome.
    #[must_use]
    #[inline]
    pub fn issues(&self) -> Option<&Issues> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(issues) => Some(issues),
        }
    }

    /// Iterates over the issues; empty for a valid outcome.
    pub fn iter_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues().into_iter().flat_map(Issues::iter)
    }

    /// Maps the valid value, preserving issues unchanged.
    ///
    /// ```
    /// use vali_rail::Validation;
    ///
    /// let v: Validation<i32> = Validation::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(issues) => Validation::Invalid(issues),
        }
    }

    /// Chains a further fallible step on the valid value.
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<B>
    where
        F: FnOnce(A) -> Validation<B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(issues) => Validation::Invalid(issues),
        }
    }

    /// Combines two outcomes, concatenating issues when both failed.
    #[inline]
    pub fn zip<B>(self, other: Validation<B>) -> Validation<(A, B)> {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Self::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Self::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Self::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            }
        }
    }

    #[inline]
    pub fn to_result(self) -> Result<A, Issues> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(issues) => Err(issues),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_issues(self) -> Option<Issues> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(issues) => Some(issues),
        }
    }
}

impl<A> From<Dataset<A>> for Validation<A> {
    fn from(dataset: Dataset<A>) -> Self {
        Self::from_dataset(dataset)
    }
}

impl<A> From<Validation<A>> for Result<A, Issues> {
    fn from(validation: Validation<A>) -> Self {
        validation.to_result()
    }
}
