//! Composable validation and transformation pipelines for dynamic values.
//!
//! A pipeline is an ordered list of small steps ([`Action`]s) applied to an
//! input [`Value`]. Each step receives a [`Dataset`] holding the current
//! value, a `typed` flag and the issues reported so far. Validations append
//! [`Issue`]s, transformations replace the value, and the run ends with either
//! a typed output or every issue in the order it was found.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `vali_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Validating a value
//!
//! ```
//! use vali_rail::{actions::isbn, pipe, safe_parse, schemas::string, Config, Value};
//!
//! let book = pipe!(string(), isbn());
//!
//! assert!(safe_parse(&book, Value::from("978-0-306-40615-7"), &Config::default()).is_valid());
//! assert!(safe_parse(&book, Value::from(9780306406157_i64), &Config::default()).is_invalid());
//! ```
//!
//! ## Coercing and accumulating
//!
//! ```
//! use vali_rail::{actions::{check, to_number}, pipe, run, schemas::unknown, Config, Value};
//!
//! let port = pipe!(
//!     unknown(),
//!     to_number(),
//!     check(|v: &Value| v.as_f64().is_some_and(|n| n >= 1024.0)).with_message("port too low"),
//! );
//!
//! let dataset = run(&port, Value::from("80"), &Config::default());
//! assert_eq!(dataset.value(), &Value::from(80));
//! assert_eq!(dataset.issues()[0].message(), "port too low");
//! ```
//!
//! ## Stopping at the first issue
//!
//! ```
//! use vali_rail::{actions::{cron, isbn}, pipe, run, Config, Value};
//!
//! let both = pipe!(cron(), isbn());
//!
//! assert_eq!(run(&both, Value::from("x"), &Config::default()).issues().len(), 2);
//! assert_eq!(run(&both, Value::from("x"), &Config::fail_fast()).issues().len(), 1);
//! ```

/// Concrete validation, transformation and metadata steps
pub mod actions;
/// Pipeline and message construction macros
pub mod macros;
/// Entry points running an action against input
pub mod methods;
/// Ordered composition of actions
pub mod pipeline;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Base parsing steps
pub mod schemas;
/// The action contract
pub mod traits;
/// Values, issues, datasets and their helpers
pub mod types;
/// Caller-facing outcome of a run
pub mod validation;

pub use methods::{get_description, get_examples, get_title, is, parse, run, safe_parse};
pub use pipeline::Pipe;
pub use traits::*;
pub use types::coerce;
pub use types::{
    flatten, summarize, stringify, Config, Dataset, Date, ErrorMessage, FlatErrors, Function,
    Issue, IssueFormatConfig, IssueFormatter, IssueInfo, IssueKind, IssuePath, IssueVec, Issues,
    Object, PathItem, PathKind, Requirement, Symbol, ValiError, Value,
};
pub use validation::*;
