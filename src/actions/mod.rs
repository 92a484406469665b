//! Concrete pipeline steps.
//!
//! Each function returns an immutable action value closing over its
//! configuration. Actions fall into three groups:
//!
//! - pure validations ([`cron`], [`isbn`], [`iso_country_code`],
//!   [`iso_currency_code`], [`check`], [`raw_check`]) that only append issues
//!   and are skipped once the dataset is untyped,
//! - transformations ([`to_bigint`], [`to_boolean`], [`to_date`],
//!   [`to_number`], [`to_string`], [`transform`], [`raw_transform`]) that
//!   replace the value and mark the dataset untyped when conversion fails,
//! - [`guard`], a type-narrowing check that reports like a validation but
//!   also marks the dataset untyped.
//!
//! Metadata steps ([`examples`], [`title`], [`description`]) only describe
//! a pipeline.
//!
//! # Examples
//!
//! ```
//! use vali_rail::{actions::cron, Action, Config, Dataset, Value};
//!
//! let action = cron().with_message("not a cron expression");
//! let mut dataset = Dataset::new(Value::from("60 0 1 1 0"));
//! action.run(&mut dataset, &Config::default());
//!
//! assert_eq!(dataset.issues()[0].message(), "not a cron expression");
//! ```

/// Implements `with_message` for actions storing an optional message.
macro_rules! impl_with_message {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Replaces the built-in message of issues raised by this action.
                #[must_use]
                pub fn with_message(
                    mut self,
                    message: impl Into<$crate::types::message::ErrorMessage>,
                ) -> Self {
                    self.message = Some(message.into());
                    self
                }
            }
        )*
    };
}

pub mod check;
pub mod cron;
pub mod guard;
pub mod isbn;
pub mod iso_country_code;
pub mod iso_currency_code;
pub mod metadata;
pub mod raw_check;
pub mod raw_transform;
pub mod to_bigint;
pub mod to_boolean;
pub mod to_date;
pub mod to_number;
pub mod to_string;
pub mod transform;

pub use check::{check, CheckAction};
pub use cron::{build_cron, cron, is_cron, CronAction, CronExpression, CronFields};
pub use guard::{guard, GuardAction};
pub use isbn::{is_isbn, isbn, IsbnAction};
pub use iso_country_code::{iso_country_code, IsoCountryCodeAction, ISO_3166_ENTRIES};
pub use iso_currency_code::{iso_currency_code, IsoCurrencyCodeAction, ISO_4217_CURRENCY_CODES};
pub use metadata::{description, examples, title, Metadata, MetadataAction};
pub use raw_check::{raw_check, RawCheckAction, RawCheckContext, RawIssueInfo};
pub use raw_transform::{raw_transform, RawTransformAction, RawTransformContext};
pub use to_bigint::{to_bigint, ToBigintAction};
pub use to_boolean::{to_boolean, ToBooleanAction};
pub use to_date::{to_date, ToDateAction};
pub use to_number::{to_number, ToNumberAction};
pub use to_string::{to_string, ToStringAction};
pub use transform::{transform, TransformAction};

impl_with_message!(
    CheckAction,
    CronAction,
    GuardAction,
    IsbnAction,
    IsoCountryCodeAction,
    IsoCurrencyCodeAction,
    ToBigintAction,
    ToDateAction,
    ToNumberAction,
    ToStringAction,
);
