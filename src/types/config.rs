//! Per-call configuration threaded unchanged to every step of a run.

use crate::types::message::ErrorMessage;

/// Options for a single validation call.
///
/// # Examples
///
/// ```
/// use vali_rail::Config;
///
/// let config = Config::default().with_abort_early(true).with_lang("de");
/// assert!(config.abort_early());
/// assert_eq!(config.lang(), Some("de"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    message: Option<ErrorMessage>,
    abort_early: bool,
    abort_pipe_early: bool,
    lang: Option<String>,
}

impl Config {
    /// Equivalent to `Config::default()`: every step runs, all issues are kept.
    #[inline]
    pub fn collect_all() -> Self {
        Self::default()
    }

    /// Stops at the first issue anywhere.
    #[inline]
    pub fn fail_fast() -> Self {
        Self { abort_early: true, ..Self::default() }
    }

    /// Overrides the message of every issue raised during the call.
    #[inline]
    pub fn with_message(mut self, message: impl Into<ErrorMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[inline]
    pub fn with_abort_early(mut self, abort_early: bool) -> Self {
        self.abort_early = abort_early;
        self
    }

    #[inline]
    pub fn with_abort_pipe_early(mut self, abort_pipe_early: bool) -> Self {
        self.abort_pipe_early = abort_pipe_early;
        self
    }

    #[inline]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[inline]
    pub fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    #[inline]
    pub fn abort_early(&self) -> bool {
        self.abort_early
    }

    #[inline]
    pub fn abort_pipe_early(&self) -> bool {
        self.abort_pipe_early
    }

    #[inline]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Whether a pipeline should stop once the dataset carries an issue.
    #[inline]
    pub fn stops_on_issue(&self) -> bool {
        self.abort_early || self.abort_pipe_early
    }
}
