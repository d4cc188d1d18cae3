use serde::{Deserialize, Serialize};

use crate::normalize::parse_terms;

/// Term group classification, in fixed priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GroupClass {
    Brand,
    Keyword,
    Location,
}

impl GroupClass {
    /// All classes in processing order: brand first, then keyword, then location
    pub fn all() -> &'static [GroupClass] {
        &[GroupClass::Brand, GroupClass::Keyword, GroupClass::Location]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupClass::Brand => "brand",
            GroupClass::Keyword => "keyword",
            GroupClass::Location => "location",
        }
    }

    /// CSS class used on marker nodes in serialized markup
    pub fn css_class(&self) -> &'static str {
        match self {
            GroupClass::Brand => "hl-brand",
            GroupClass::Keyword => "hl-keyword",
            GroupClass::Location => "hl-location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupClass::Brand => "Brand",
            GroupClass::Keyword => "Keyword",
            GroupClass::Location => "Location",
        }
    }
}

/// A classed, ordered, deduplicated set of terms to annotate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermGroup {
    pub class: GroupClass,
    pub terms: Vec<String>,
}

impl TermGroup {
    /// Build a group from raw delimited input (comma, newline or tab separated)
    pub fn parse(class: GroupClass, raw: &str) -> Self {
        Self {
            class,
            terms: parse_terms(raw),
        }
    }
}
