//! Descriptive pipeline steps.
//!
//! Metadata steps never touch the dataset. They are read back with
//! [`get_examples`](crate::methods::get_examples),
//! [`get_title`](crate::methods::get_title) and
//! [`get_description`](crate::methods::get_description).

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::Dataset;
use crate::types::value::Value;

/// Payload carried by a [`MetadataAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    Examples(Vec<Value>),
    Title(String),
    Description(String),
}

impl Metadata {
    /// Type name of the step carrying this payload.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Examples(_) => "examples",
            Self::Title(_) => "title",
            Self::Description(_) => "description",
        }
    }
}

/// A no-op step describing the pipeline it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataAction {
    metadata: Metadata,
}

impl MetadataAction {
    #[inline]
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

/// Attaches example values.
pub fn examples<I>(values: I) -> MetadataAction
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    MetadataAction::new(Metadata::Examples(values.into_iter().map(Into::into).collect()))
}

/// Attaches a title.
pub fn title(title: impl Into<String>) -> MetadataAction {
    MetadataAction::new(Metadata::Title(title.into()))
}

/// Attaches a description.
pub fn description(description: impl Into<String>) -> MetadataAction {
    MetadataAction::new(Metadata::Description(description.into()))
}

impl Action for MetadataAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Metadata
    }

    fn action_type(&self) -> &'static str {
        self.metadata.action_type()
    }

    fn run(&self, _dataset: &mut Dataset, _config: &Config) {}

    fn metadata(&self) -> Option<&Metadata> {
        Some(&self.metadata)
    }
}
