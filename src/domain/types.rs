//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the invariants the rest of the application takes
//! for granted (non-empty identifiers, a known portfolio category) so that a
//! value reaching the domain layer can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided portfolio type is not one of the known categories.
    #[error("unknown portfolio type: {0}")]
    UnknownItemType(String),
}

/// Portfolio category. The wire form is the legacy single-digit string
/// ("1".."4") stored on every document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemType {
    Promotion,
    Operation,
    Development,
    BannerSns,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Promotion,
        ItemType::Operation,
        ItemType::Development,
        ItemType::BannerSns,
    ];

    /// Legacy wire/storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Promotion => "1",
            ItemType::Operation => "2",
            ItemType::Development => "3",
            ItemType::BannerSns => "4",
        }
    }

    /// Human-readable label shown in list badges and dashboard cards.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Promotion => "Promotion",
            ItemType::Operation => "Operation",
            ItemType::Development => "Development",
            ItemType::BannerSns => "Banner/SNS",
        }
    }
}

impl Display for ItemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ItemType::Promotion),
            "2" => Ok(ItemType::Operation),
            "3" => Ok(ItemType::Development),
            "4" => Ok(ItemType::BannerSns),
            other => Err(TypeConstraintError::UnknownItemType(other.to_string())),
        }
    }
}

impl TryFrom<String> for ItemType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for ItemType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemType> for String {
    fn from(value: ItemType) -> Self {
        value.as_str().to_string()
    }
}

/// String identifier shared by the document id and its `idx` field.
///
/// Historically the public site joined on `idx`, so every item is created
/// with `idx` equal to its document id and all lookups go through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemIdx(String);

impl ItemIdx {
    /// Wraps an existing identifier, rejecting empty input.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Generates a fresh identifier for a newly created item.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
