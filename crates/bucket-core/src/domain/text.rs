//! Non-empty display text

use std::fmt;
use std::ops::Deref;

use super::entity::{DomainError, DomainResult};

/// A trimmed string with at least one character
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("text is empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NonEmptyText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = DomainError;

    fn try_from(raw: String) -> DomainResult<Self> {
        Self::new(&raw)
    }
}

impl TryFrom<&str> for NonEmptyText {
    type Error = DomainError;

    fn try_from(raw: &str) -> DomainResult<Self> {
        Self::new(raw)
    }
}

impl From<NonEmptyText> for String {
    fn from(text: NonEmptyText) -> Self {
        text.0
    }
}
