//! Crate error types
//!
//! All recoverable errors surfaced by snapshot construction and by the
//! config/catalog loaders.

use thiserror::Error;

use crate::section::SectionKind;
use crate::snapshot::ItemId;

/// Main storefront error type
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Section appended twice to the same snapshot
    #[error("section already present in snapshot: {0:?}")]
    DuplicateSection(SectionKind),

    /// Items appended to a section the snapshot does not contain
    #[error("unknown section: {0:?}")]
    UnknownSection(SectionKind),

    /// Item id appended twice within one section
    #[error("duplicate item id within section: {0}")]
    DuplicateItem(ItemId),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// TOML parse error (layout metrics file)
    #[error("config parse error: {0}")]
    ConfigParseError(String),

    /// JSON parse error (catalog file)
    #[error("catalog parse error: {0}")]
    CatalogParseError(String),
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        StorefrontError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for StorefrontError {
    fn from(err: toml::de::Error) -> Self {
        StorefrontError::ConfigParseError(err.to_string())
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::CatalogParseError(err.to_string())
    }
}
