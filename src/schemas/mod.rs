//! Base parsing steps that open a pipeline.
//!
//! A schema checks the shape of the raw input. On mismatch it reports a
//! `schema` issue labelled `type` and marks the dataset untyped, so the
//! validations that follow are skipped.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{schemas::string, Action, Config, Dataset, Value};
//!
//! let mut dataset = Dataset::new(Value::from(42));
//! string().run(&mut dataset, &Config::default());
//!
//! assert!(!dataset.is_typed());
//! assert_eq!(
//!     dataset.issues()[0].message(),
//!     "Invalid type: Expected string but received 42"
//! );
//! ```
mod primitive;

pub use primitive::{
    bigint, boolean, date, number, string, unknown, PrimitiveSchema, PrimitiveType, UnknownSchema,
};
