//! Shared types used across badgepress.
//! Includes `PageSize`, `TemplatePair` and the `DataRow` alias.
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One CSV record keyed by header name.
pub type DataRow = HashMap<String, String>;

/// Page size handed to the renderer.
///
/// `Named` carries a preset understood by the backend (`A4`, `A6`, `Letter`, ...).
/// `Custom` makes the renderer use the explicit width/height from the options.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PageSize {
    Named(String),
    Custom,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Named("A4".to_string())
    }
}

impl PageSize {
    pub fn is_custom(&self) -> bool {
        matches!(self, PageSize::Custom)
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("page size must not be empty".to_string());
        }
        if s.eq_ignore_ascii_case("custom") {
            return Ok(PageSize::Custom);
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("invalid page size '{}'", s));
        }
        Ok(PageSize::Named(s.to_string()))
    }
}

impl TryFrom<String> for PageSize {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageSize> for String {
    fn from(value: PageSize) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageSize::Named(name) => write!(f, "{}", name),
            PageSize::Custom => write!(f, "Custom"),
        }
    }
}

/// An HTML template and the stylesheet inlined in front of it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TemplatePair {
    pub html: PathBuf,
    pub css: PathBuf,
}

impl TemplatePair {
    pub fn new(html: impl Into<PathBuf>, css: impl Into<PathBuf>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_custom_sizes() {
        assert_eq!("A6".parse::<PageSize>().unwrap(), PageSize::Named("A6".into()));
        assert_eq!("custom".parse::<PageSize>().unwrap(), PageSize::Custom);
        assert_eq!("CUSTOM".parse::<PageSize>().unwrap(), PageSize::Custom);
        assert!("".parse::<PageSize>().is_err());
        assert!("A4; rm".parse::<PageSize>().is_err());
    }

    #[test]
    fn page_size_serializes_as_string() {
        let json = serde_json::to_string(&PageSize::default()).unwrap();
        assert_eq!(json, "\"A4\"");
        let back: PageSize = serde_json::from_str("\"Custom\"").unwrap();
        assert!(back.is_custom());
    }
}
