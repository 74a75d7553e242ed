//! Data model for extracted property documentation — format-agnostic.

use serde::Serialize;
use std::collections::BTreeMap;

/// One documented property of a `PropTypes` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisItem {
    /// Property identifier as written (empty for a fallback item)
    pub name: String,
    /// Type annotation text, trailing `,`/`;` stripped
    #[serde(rename = "type")]
    pub ty: String,
    pub optional: bool,
    /// Tags parsed from the attached doc block, in source order
    pub comment: Vec<Tag>,
}

impl AnalysisItem {
    /// The item emitted in place of a member whose derivation failed.
    pub fn fallback() -> Self {
        Self::default()
    }
}

/// One fragment of a doc block: `@title {type} name description`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Tag {
    /// Free-text tag synthesized for a doc block without `@` markers.
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            title: "description".to_string(),
            description: text.into(),
            ..Default::default()
        }
    }
}

/// File path → items. Ordered by path so repeated runs print identically.
pub type AnalysisResults = BTreeMap<String, Vec<AnalysisItem>>;
