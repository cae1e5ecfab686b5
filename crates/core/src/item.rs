//! Validated item name.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of a stocked item.
///
/// Non-empty after trimming; the stored form is the trimmed name. Serializes
/// as a plain string so it can key a JSON object, and deserialization
/// re-validates, so a persisted file with an invalid key fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        let name = ItemName::new("apple").unwrap();
        assert_eq!(name.as_str(), "apple");
        assert_eq!(name.to_string(), "apple");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = ItemName::new("  apple \n").unwrap();
        assert_eq!(name.as_str(), "apple");
    }

    #[test]
    fn rejects_empty_name() {
        let err = ItemName::new("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = ItemName::new("   \t").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Result<ItemName, _> = serde_json::from_str("\"apple\"");
        assert_eq!(ok.unwrap().as_str(), "apple");

        let bad: Result<ItemName, _> = serde_json::from_str("\"  \"");
        assert!(bad.is_err());
    }
}
