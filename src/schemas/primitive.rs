use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::message::ErrorMessage;
use crate::types::value::Value;

/// Accepts any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownSchema;

#[inline]
pub fn unknown() -> UnknownSchema {
    UnknownSchema
}

impl Action for UnknownSchema {
    fn kind(&self) -> ActionKind {
        ActionKind::Schema
    }

    fn action_type(&self) -> &'static str {
        "unknown"
    }

    fn expects(&self) -> Option<&str> {
        Some("unknown")
    }

    fn run(&self, _dataset: &mut Dataset, _config: &Config) {}
}

/// Primitive type a [`PrimitiveSchema`] checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Number,
    Bigint,
    Boolean,
    Date,
}

impl PrimitiveType {
    /// Issue type raised on mismatch.
    pub fn action_type(self) -> &'static str {
        match self {
            Self::Date => "date",
            other => other.name(),
        }
    }

    /// Type name reported as `expected`.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bigint => "bigint",
            Self::Boolean => "boolean",
            Self::Date => "Date",
        }
    }

    /// `NaN` is not a number and an invalid date is not a date.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Number, Value::Number(n)) => !n.is_nan(),
            (Self::Bigint, Value::BigInt(_)) => true,
            (Self::Boolean, Value::Bool(_)) => true,
            (Self::Date, Value::Date(d)) => d.is_valid(),
            _ => false,
        }
    }
}

/// Schema for one primitive type.
#[derive(Debug, Clone)]
pub struct PrimitiveSchema {
    ty: PrimitiveType,
    message: Option<ErrorMessage>,
}

impl PrimitiveSchema {
    #[inline]
    pub fn new(ty: PrimitiveType) -> Self {
        Self { ty, message: None }
    }

    #[inline]
    pub fn primitive_type(&self) -> PrimitiveType {
        self.ty
    }

    /// Replaces the built-in message of the type mismatch issue.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[inline]
pub fn string() -> PrimitiveSchema {
    PrimitiveSchema::new(PrimitiveType::String)
}

/// Number schema. Rejects `NaN`.
#[inline]
pub fn number() -> PrimitiveSchema {
    PrimitiveSchema::new(PrimitiveType::Number)
}

#[inline]
pub fn bigint() -> PrimitiveSchema {
    PrimitiveSchema::new(PrimitiveType::Bigint)
}

#[inline]
pub fn boolean() -> PrimitiveSchema {
    PrimitiveSchema::new(PrimitiveType::Boolean)
}

/// Date schema. Rejects the invalid date.
#[inline]
pub fn date() -> PrimitiveSchema {
    PrimitiveSchema::new(PrimitiveType::Date)
}

impl Action for PrimitiveSchema {
    fn kind(&self) -> ActionKind {
        ActionKind::Schema
    }

    fn action_type(&self) -> &'static str {
        self.ty.action_type()
    }

    fn expects(&self) -> Option<&str> {
        Some(self.ty.name())
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if !self.ty.accepts(dataset.value()) {
            dataset.add_issue(self, "type", config, IssueInfo::default());
            dataset.mark_untyped();
        }
    }
}
