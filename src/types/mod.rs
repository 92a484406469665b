//! Data model shared by every pipeline step.
//!
//! This module provides the values, issues and datasets that flow through a
//! pipeline, together with the helpers that describe and render them.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{Config, Dataset, Issue, IssueKind, Value};
//!
//! let mut dataset = Dataset::new(Value::from("abc"));
//! dataset.push_issue(Issue::builder(IssueKind::Validation, "check", Value::from("abc")).build());
//!
//! assert_eq!(dataset.issues().len(), 1);
//! assert_eq!(dataset.issues()[0].message(), "Invalid check: Received \"abc\"");
//! ```
use smallvec::SmallVec;

pub mod coerce;
pub mod config;
pub mod dataset;
pub mod flatten;
pub mod issue;
pub mod issue_formatter;
pub mod issues;
pub mod message;
pub mod received;
pub mod vali_error;
pub mod value;
#[cfg(feature = "serde")]
mod value_serde;

pub use config::*;
pub use dataset::*;
pub use flatten::*;
pub use issue::*;
pub use issue_formatter::*;
pub use issues::*;
pub use message::*;
pub use received::stringify;
pub use vali_error::*;
pub use value::*;

/// SmallVec-backed collection used for accumulating issues.
///
/// Uses inline storage for one element, the common case for a failing
/// scalar pipeline.
pub type IssueVec<T> = SmallVec<[T; 1]>;
