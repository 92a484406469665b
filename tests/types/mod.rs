pub mod coerce;
pub mod issue;
pub mod received;
#[cfg(feature = "serde")]
pub mod serde;
