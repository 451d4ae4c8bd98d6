//! Field validation shared by the auth forms and the employee form.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static LETTERS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"))
}

fn letters_pattern() -> &'static Regex {
    LETTERS_PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z ]+$").expect("valid letters pattern"))
}

/// Loose `local@domain.tld` check.
///
/// The pattern is unanchored: any run of non-whitespace, an `@`, more
/// non-whitespace, a dot and at least one more non-whitespace character.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// ASCII letters and spaces only, at least one character.
pub fn is_letters_and_spaces(value: &str) -> bool {
    letters_pattern().is_match(value)
}

/// Parses a finite number, ignoring surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

pub fn email_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(value) {
        Some("Invalid email format")
    } else {
        None
    }
}

/// Per-field error messages for one form.
///
/// Keys are the form's own field enum, so an error can never refer to a
/// field the form does not have. Empty messages are not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    entries: BTreeMap<F, String>,
}

impl<F: Ord + Copy> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: F, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.entries.remove(&field);
        } else {
            self.entries.insert(field, message);
        }
    }

    pub fn clear(&mut self, field: F) {
        self.entries.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.entries.keys().copied()
    }
}
