//! Validation failure records.
//!
//! An [`Issue`] is created exactly once by the step that detects a failure and
//! is never modified afterwards. The only deferred part is the message text,
//! which is rendered on first access and then memoised.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{Issue, IssueKind, Value};
//!
//! let issue = Issue::builder(IssueKind::Validation, "isbn", Value::from("123"))
//!     .label("ISBN")
//!     .build();
//!
//! assert_eq!(issue.received(), "\"123\"");
//! assert_eq!(issue.message(), "Invalid ISBN: Received \"123\"");
//! ```
use crate::types::message::{default_message, ErrorMessage};
use crate::types::received::stringify;
use crate::types::value::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

/// Which phase produced an issue.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    Schema,
    Validation,
    Transformation,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Validation => "validation",
            Self::Transformation => "transformation",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate form of a requirement.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// The predicate or threshold an issue failed, kept for introspection.
#[derive(Clone)]
pub enum Requirement {
    Predicate(Arc<Predicate>),
    Value(Value),
}

impl Requirement {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Re-evaluates a predicate requirement. Value requirements compare by equality.
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match self {
            Self::Predicate(f) => f(value),
            Self::Value(expected) => expected == value,
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(<fn>)"),
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

/// Kind of container a path segment descends into.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Object,
    Array,
    Map,
    Set,
    Unknown,
}

/// One step from a container to the value that failed.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    pub kind: PathKind,
    pub input: Value,
    pub key: Value,
    pub value: Value,
}

impl PathItem {
    pub fn new(kind: PathKind, input: Value, key: impl Into<Value>, value: Value) -> Self {
        Self { kind, input, key: key.into(), value }
    }

    /// Shorthand for an object property segment.
    pub fn object(input: Value, key: &str, value: Value) -> Self {
        Self::new(PathKind::Object, input, key, value)
    }

    /// Shorthand for an array index segment.
    pub fn array(input: Value, index: usize, value: Value) -> Self {
        Self::new(PathKind::Array, input, index, value)
    }
}

/// Non-empty ordered sequence of [`PathItem`]s.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct IssuePath {
    items: SmallVec<[PathItem; 2]>,
}

impl IssuePath {
    pub fn new(first: PathItem) -> Self {
        let mut items = SmallVec::new();
        items.push(first);
        Self { items }
    }

    /// Builds a path from an iterator, returning `None` when it is empty.
    pub fn from_items<I: IntoIterator<Item = PathItem>>(items: I) -> Option<Self> {
        let items: SmallVec<[PathItem; 2]> = items.into_iter().collect();
        (!items.is_empty()).then_some(Self { items })
    }

    #[must_use]
    pub fn push(mut self, item: PathItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn first(&self) -> &PathItem {
        &self.items[0]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, PathItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Joins string and number keys with `.`. Returns `None` when any key is
    /// of another type.
    ///
    /// ```
    /// use vali_rail::{IssuePath, PathItem, Value};
    ///
    /// let path = IssuePath::new(PathItem::object(Value::Null, "tags", Value::Null))
    ///     .push(PathItem::array(Value::Null, 2, Value::Null));
    /// assert_eq!(path.dot_path().as_deref(), Some("tags.2"));
    /// ```
    pub fn dot_path(&self) -> Option<String> {
        let mut segments = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match &item.key {
                Value::String(s) => segments.push(s.clone()),
                Value::Number(n) => segments.push(crate::types::received::format_number(*n)),
                _ => return None,
            }
        }
        Some(segments.join("."))
    }
}

impl<'a> IntoIterator for &'a IssuePath {
    type Item = &'a PathItem;
    type IntoIter = core::slice::Iter<'a, PathItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One validation or transformation failure.
#[derive(Debug, Clone)]
pub struct Issue {
    kind: IssueKind,
    issue_type: Cow<'static, str>,
    label: Cow<'static, str>,
    input: Value,
    expected: Option<String>,
    received: String,
    requirement: Option<Requirement>,
    path: Option<IssuePath>,
    lang: Option<String>,
    message_source: Option<ErrorMessage>,
    rendered: OnceLock<String>,
}

impl Issue {
    /// Starts building an issue for `input`.
    pub fn builder(
        kind: IssueKind,
        issue_type: impl Into<Cow<'static, str>>,
        input: Value,
    ) -> IssueBuilder {
        IssueBuilder {
            kind,
            issue_type: issue_type.into(),
            label: None,
            input,
            expected: None,
            received: None,
            requirement: None,
            path: None,
            lang: None,
            message: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    /// The action or schema name, e.g. `cron` or `to_number`.
    #[inline]
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    #[inline]
    pub fn input(&self) -> &Value {
        &self.input
    }

    #[inline]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    #[inline]
    pub fn received(&self) -> &str {
        &self.received
    }

    #[inline]
    pub fn requirement(&self) -> Option<&Requirement> {
        self.requirement.as_ref()
    }

    #[inline]
    pub fn path(&self) -> Option<&IssuePath> {
        self.path.as_ref()
    }

    /// Locale tag of the call that produced this issue.
    #[inline]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Dot-joined path, if the issue has a path made of string or number keys.
    pub fn dot_path(&self) -> Option<String> {
        self.path.as_ref().and_then(IssuePath::dot_path)
    }

    /// Returns `true` once the message text has been produced.
    pub fn is_message_rendered(&self) -> bool {
        self.rendered.get().is_some()
    }

    /// The rendered message.
    ///
    /// A computed message is invoked on the first call only. Calling
    /// `message()` from inside that same closure deadlocks.
    pub fn message(&self) -> &str {
        self.rendered.get_or_init(|| match &self.message_source {
            Some(source) => source.render(self),
            None => default_message(&self.label, self.expected.as_deref(), &self.received),
        })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Issue", 7)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("type", self.issue_type())?;
        state.serialize_field("input", &self.input)?;
        state.serialize_field("expected", &self.expected)?;
        state.serialize_field("received", &self.received)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("path", &self.path)?;
        state.end()
    }
}

/// Builder for [`Issue`].
#[must_use]
pub struct IssueBuilder {
    kind: IssueKind,
    issue_type: Cow<'static, str>,
    label: Option<Cow<'static, str>>,
    input: Value,
    expected: Option<String>,
    received: Option<String>,
    requirement: Option<Requirement>,
    path: Option<IssuePath>,
    lang: Option<String>,
    message: Option<ErrorMessage>,
}

impl IssueBuilder {
    /// Noun used by the default message (`Invalid {label}: ...`).
    /// Defaults to the issue type.
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn expected(mut self, expected: Option<&str>) -> Self {
        self.expected = expected.map(str::to_owned);
        self
    }

    /// Overrides the description derived from the input.
    pub fn received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }

    pub fn requirement(mut self, requirement: Option<Requirement>) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn path(mut self, path: Option<IssuePath>) -> Self {
        self.path = path;
        self
    }

    pub fn lang(mut self, lang: Option<&str>) -> Self {
        self.lang = lang.map(str::to_owned);
        self
    }

    pub fn message(mut self, message: Option<ErrorMessage>) -> Self {
        self.message = message;
        self
    }

    pub fn build(self) -> Issue {
        let received = self.received.unwrap_or_else(|| stringify(&self.input));
        Issue {
            label: self.label.unwrap_or_else(|| self.issue_type.clone()),
            kind: self.kind,
            issue_type: self.issue_type,
            input: self.input,
            expected: self.expected,
            received,
            requirement: self.requirement,
            path: self.path,
            lang: self.lang,
            message_source: self.message,
            rendered: OnceLock::new(),
        }
    }
}
