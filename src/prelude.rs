//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use vali_rail::prelude::*;
//!
//! let country = pipe!(string(), iso_country_code());
//! assert!(is(&country, "DE"));
//! ```

// Macros
pub use crate::{message, pipe};

// Core types
pub use crate::types::{Config, Dataset, ErrorMessage, Issue, Issues, ValiError, Value};
pub use crate::validation::Validation;
pub use crate::Pipe;

// Traits
pub use crate::traits::{Action, IntoAction};

// Steps and entry points
pub use crate::actions::{
    check, cron, guard, isbn, iso_country_code, iso_currency_code, to_bigint, to_boolean,
    to_date, to_number, to_string, transform,
};
pub use crate::methods::{is, parse, run, safe_parse};
pub use crate::schemas::{bigint, boolean, date, number, string, unknown};
