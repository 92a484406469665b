//! ISBN-10 and ISBN-13 checksum validation.

use crate::traits::action::{Action, ActionKind};
use crate::types::config::Config;
use crate::types::dataset::{Dataset, IssueInfo};
use crate::types::issue::Requirement;
use crate::types::message::ErrorMessage;

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

/// Nine digits followed by a digit or an uppercase `X`.
fn looks_like_isbn10(s: &[u8]) -> bool {
    s.len() == 10
        && s[..9].iter().all(u8::is_ascii_digit)
        && (s[9].is_ascii_digit() || s[9] == b'X')
}

fn looks_like_isbn13(s: &[u8]) -> bool {
    s.len() == 13 && s.iter().all(u8::is_ascii_digit)
}

/// Weights 10 down to 1, `X` counts as 10, sum divisible by 11.
fn isbn10_checksum(s: &[u8]) -> bool {
    let sum: u32 = s
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let value = if b == b'X' { 10 } else { digit(b) };
            value * (10 - i as u32)
        })
        .sum();
    sum % 11 == 0
}

/// Alternating weights 1 and 3, sum divisible by 10.
fn isbn13_checksum(s: &[u8]) -> bool {
    let sum: u32 = s
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

/// Returns `true` if `input` is a valid ISBN-10 or ISBN-13.
///
/// Hyphens and spaces are ignored. The ISBN-10 check character must be an
/// uppercase `X`.
///
/// ```
/// use vali_rail::actions::is_isbn;
///
/// assert!(is_isbn("0-306-40615-2"));
/// assert!(is_isbn("978 0 306 40615 7"));
/// assert!(!is_isbn("020530902x"));
/// ```
pub fn is_isbn(input: &str) -> bool {
    let stripped: Vec<u8> = input.bytes().filter(|b| !matches!(b, b'-' | b' ')).collect();
    if looks_like_isbn10(&stripped) {
        isbn10_checksum(&stripped)
    } else if looks_like_isbn13(&stripped) {
        isbn13_checksum(&stripped)
    } else {
        false
    }
}

/// Validation action for ISBNs. Created by [`isbn`].
#[derive(Debug, Clone, Default)]
pub struct IsbnAction {
    pub(crate) message: Option<ErrorMessage>,
}

/// Creates an ISBN validation.
#[inline]
pub fn isbn() -> IsbnAction {
    IsbnAction::default()
}

impl Action for IsbnAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Validation
    }

    fn action_type(&self) -> &'static str {
        "isbn"
    }

    fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    fn requirement(&self) -> Option<Requirement> {
        Some(Requirement::predicate(|value| value.as_str().is_some_and(is_isbn)))
    }

    fn run(&self, dataset: &mut Dataset, config: &Config) {
        if dataset.is_typed() && !dataset.value().as_str().is_some_and(is_isbn) {
            dataset.add_issue(self, "ISBN", config, IssueInfo::default());
        }
    }
}
