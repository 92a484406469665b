//! Grouping issue messages by where they occurred.

use crate::types::issue::Issue;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Issue messages split into path-less ones and ones keyed by dot path.
///
/// Issues whose path contains a key that is neither a string nor a number are
/// left out, as they have no dot path to be filed under.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatErrors {
    pub root: Vec<String>,
    pub nested: BTreeMap<String, Vec<String>>,
}

impl FlatErrors {
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.nested.is_empty()
    }
}

/// Flattens issues into [`FlatErrors`], keeping the order within each group.
///
/// ```
/// use vali_rail::{flatten, Issue, IssueKind, IssuePath, PathItem, Value};
///
/// let root = Issue::builder(IssueKind::Validation, "check", Value::Null).build();
/// let nested = Issue::builder(IssueKind::Validation, "isbn", Value::from("x"))
///     .path(Some(IssuePath::new(PathItem::object(Value::Null, "isbn", Value::from("x")))))
///     .build();
///
/// let flat = flatten([&root, &nested]);
/// assert_eq!(flat.root.len(), 1);
/// assert_eq!(flat.nested["isbn"].len(), 1);
/// ```
pub fn flatten<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> FlatErrors {
    let mut flat = FlatErrors::default();
    for issue in issues {
        match issue.path() {
            None => flat.root.push(issue.message().to_owned()),
            Some(path) => {
                if let Some(dot_path) = path.dot_path() {
                    flat.nested.entry(dot_path).or_default().push(issue.message().to_owned());
                }
            }
        }
    }
    flat
}
