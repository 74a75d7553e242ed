//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the results mapping directly: file path → property items.

use crate::parser::Analysis;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, analysis: &Analysis) -> String {
        match serde_json::to_string_pretty(&analysis.results) {
            Ok(mut out) => {
                out.push('\n');
                out
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize results");
                String::from("{}\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisItem, Tag};
    use serde_json::{json, Value};

    #[test]
    fn serializes_results_mapping() {
        let mut analysis = Analysis::default();
        analysis.results.insert(
            "src/panel.tsx".into(),
            vec![AnalysisItem {
                name: "visible".into(),
                ty: "boolean".into(),
                optional: false,
                comment: vec![Tag::description("shows the panel")],
            }],
        );

        let value: Value = serde_json::from_str(&JsonRenderer.render(&analysis)).unwrap();
        assert_eq!(
            value,
            json!({
                "src/panel.tsx": [{
                    "name": "visible",
                    "type": "boolean",
                    "optional": false,
                    "comment": [{ "title": "description", "description": "shows the panel" }]
                }]
            })
        );
    }

    #[test]
    fn tag_type_and_name_when_present() {
        let mut analysis = Analysis::default();
        analysis.results.insert(
            "a.ts".into(),
            vec![AnalysisItem {
                comment: vec![Tag {
                    title: "param".into(),
                    description: "d".into(),
                    ty: Some("string".into()),
                    name: Some("x".into()),
                }],
                ..AnalysisItem::fallback()
            }],
        );
        let value: Value = serde_json::from_str(&JsonRenderer.render(&analysis)).unwrap();
        assert_eq!(value["a.ts"][0]["comment"][0]["type"], "string");
        assert_eq!(value["a.ts"][0]["comment"][0]["name"], "x");
    }

    #[test]
    fn empty_results_are_an_empty_object() {
        assert_eq!(JsonRenderer.render(&Analysis::default()).trim(), "{}");
    }
}
