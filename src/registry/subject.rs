//! Subject record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier assigned by the registry. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl From<u64> for SubjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<SubjectId> for u64 {
    fn from(id: SubjectId) -> Self {
        id.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected title input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    /// Nothing left after trimming whitespace.
    #[error("title is empty")]
    Empty,
}

/// A trimmed, non-empty subject title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Trim `raw` and accept it if anything remains.
    pub fn parse(raw: &str) -> Result<Self, TitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = TitleError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subject record as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique, immutable identifier.
    pub id: SubjectId,
    /// Display title.
    #[serde(rename = "titulo")]
    pub title: Title,
    /// Completion flag.
    #[serde(rename = "hecho")]
    pub done: bool,
}

/// Convert a path token into an id.
///
/// Follows numeric-conversion rules: surrounding whitespace is ignored and
/// any decimal or exponent spelling of a positive integer is accepted
/// (`"6"`, `"6.0"`, `"6e0"`). Tokens that are not numbers, or that denote a
/// fractional, non-finite or non-positive value, yield `None`, which matches
/// no record.
pub fn parse_id(token: &str) -> Option<SubjectId> {
    let token = token.trim();
    if let Ok(id) = token.parse::<u64>() {
        return (id >= 1).then_some(SubjectId(id));
    }

    let value = token.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u64::MAX as f64 {
        return None;
    }
    Some(SubjectId(value as u64))
}
