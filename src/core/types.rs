// src/core/types.rs
use crate::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which resource dictionary a translation belongs to, e.g. `pl-PL`.
/// The empty tag is the neutral culture (the default resource file).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CultureTag(String);

impl CultureTag {
    pub fn neutral() -> Self {
        Self(String::new())
    }

    /// Parses and normalizes a tag: the language subtag is lower-cased and a
    /// two-letter region subtag is upper-cased (`PL-pl` -> `pl-PL`).
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::neutral());
        }
        let mut normalized = Vec::new();
        for (i, subtag) in raw.split('-').enumerate() {
            if subtag.is_empty() || subtag.len() > 8 || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(FinderError::InvalidCulture(raw.to_string()));
            }
            let subtag = if i == 0 {
                subtag.to_ascii_lowercase()
            } else if subtag.len() == 2 {
                subtag.to_ascii_uppercase()
            } else {
                subtag.to_string()
            };
            normalized.push(subtag);
        }
        Ok(Self(normalized.join("-")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_neutral(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CultureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neutral() {
            write!(f, "neutral")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for CultureTag {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CultureTag {
    type Error = FinderError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CultureTag> for String {
    fn from(tag: CultureTag) -> Self {
        tag.0
    }
}

/// A single entry of a resource dictionary: key and localized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub key: String,
    pub text: String,
    pub culture: CultureTag,
}

impl Translation {
    pub fn new(key: impl Into<String>, text: impl Into<String>, culture: CultureTag) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            culture,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.culture, self.key, self.text)
    }
}

/// A candidate together with its distance to the query it was ranked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTranslation {
    pub translation: Translation,
    pub distance: f64,
}
