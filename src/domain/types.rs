//! Strongly-typed value objects used by the publishing pipeline.
//!
//! Pipeline structs carry these wrappers and enums instead of raw strings so
//! that categorical inputs are enforced at the boundary. The template
//! registry is the one place that accepts an arbitrary category label and
//! falls back instead of failing.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ISO language codes like `en` or `en-US`.
static LANGUAGE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2}(-[a-z]{2})?$").expect("valid language regex"));

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A category label outside the closed set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// A monetization preference outside the closed set.
    #[error("unknown monetization preference: {0}")]
    UnknownMonetization(String),
    /// Language code failed the `xx` / `xx-XX` pattern.
    #[error("language must be an ISO code like en or en-US, got '{0}'")]
    InvalidLanguageCode(String),
}

/// Content category of an upload.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Vlog,
    Shorts,
    Gaming,
    Tutorial,
}

impl Category {
    /// Every known category, in registry order.
    pub const ALL: [Category; 5] = [
        Category::Tech,
        Category::Vlog,
        Category::Shorts,
        Category::Gaming,
        Category::Tutorial,
    ];

    /// String representation used on the wire and in keyword lists.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Vlog => "vlog",
            Self::Shorts => "shorts",
            Self::Gaming => "gaming",
            Self::Tutorial => "tutorial",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "tech" => Ok(Self::Tech),
            "vlog" => Ok(Self::Vlog),
            "shorts" => Ok(Self::Shorts),
            "gaming" => Ok(Self::Gaming),
            "tutorial" => Ok(Self::Tutorial),
            other => Err(TypeConstraintError::UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Monetization preference selected by the uploader.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Monetization {
    Enabled,
    Disabled,
    Limited,
}

impl Monetization {
    /// String representation used on the wire and in keyword lists.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Limited => "limited",
        }
    }
}

impl Display for Monetization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Monetization {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            "limited" => Ok(Self::Limited),
            other => Err(TypeConstraintError::UnknownMonetization(other.to_string())),
        }
    }
}

impl TryFrom<String> for Monetization {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Validated ISO language code (`en`, `en-US`, ...). Case is preserved as
/// supplied; composers lowercase where the keyword list needs it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Trims the input and validates the `xx` / `xx-XX` pattern.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if LANGUAGE_CODE_RE.is_match(&trimmed) {
            Ok(Self(trimmed))
        } else {
            Err(TypeConstraintError::InvalidLanguageCode(trimmed))
        }
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned code.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}
