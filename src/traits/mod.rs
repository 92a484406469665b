//! The contract every pipeline step implements.
pub mod action;

pub use action::{Action, ActionKind, BoxedAction, IntoAction};
