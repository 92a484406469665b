use crate::types::issue::Issue;
use crate::types::IssueVec;

/// Append-only, ordered collection of issues.
///
/// Issues are kept in the order they were reported. There is no
/// way to remove or reorder entries once pushed.
///
/// # Examples
///
/// ```
/// use vali_rail::{Issue, IssueKind, Issues, Value};
///
/// let mut issues = Issues::new();
/// issues.push(Issue::builder(IssueKind::Validation, "cron", Value::from("x")).build());
/// issues.push(Issue::builder(IssueKind::Validation, "isbn", Value::from("y")).build());
///
/// let types: Vec<_> = issues.iter().map(|i| i.issue_type()).collect();
/// assert_eq!(types, ["cron", "isbn"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Issues {
    items: IssueVec<Issue>,
}

impl Issues {
    /// Creates a new empty collection.
    #[inline]
    pub fn new() -> Self {
        Self { items: IssueVec::new() }
    }

    /// Appends a single issue.
    #[inline]
    pub fn push(&mut self, issue: Issue) {
        self.items.push(issue);
    }

    /// Appends issues from an iterator, preserving their order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = Issue>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The first reported issue.
    #[inline]
    pub fn first(&self) -> Option<&Issue> {
        self.items.first()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Issue> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Issue> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Issue] {
        &self.items
    }

    /// Consumes the collection and returns the underlying storage.
    #[inline]
    pub fn into_inner(self) -> IssueVec<Issue> {
        self.items
    }
}

impl core::ops::Index<usize> for Issues {
    type Output = Issue;

    fn index(&self, index: usize) -> &Issue {
        &self.items[index]
    }
}

impl From<IssueVec<Issue>> for Issues {
    fn from(items: IssueVec<Issue>) -> Self {
        Self { items }
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = smallvec::IntoIter<[Issue; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = core::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Issues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
