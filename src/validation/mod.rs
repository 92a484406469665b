//! Caller-facing outcome of a validation run.
//!
//! [`Validation`] is what a finished [`Dataset`](crate::Dataset) turns into:
//! the typed output on success, or every reported issue on failure.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{Dataset, Validation, Value};
//!
//! let ok: Validation = Dataset::new(Value::from(1)).into();
//! assert!(ok.is_valid());
//!
//! let failed: Validation = Dataset::untyped(Value::Null).into();
//! assert!(failed.is_invalid());
//! ```
pub mod core;

pub use self::core::*;
