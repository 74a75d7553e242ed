//! Plain console renderer.
//!
//! Every section is a banner block: `\n[propdoc]<title>\n<body>\n`.

use crate::model::{AnalysisItem, Tag};
use crate::parser::Analysis;
use crate::render::Renderer;

pub struct TextRenderer;

const PREFIX: &str = "[propdoc]";

impl Renderer for TextRenderer {
    fn render(&self, analysis: &Analysis) -> String {
        let mut output = String::new();

        if analysis.results.is_empty() {
            output.push_str(&banner("no PropTypes found", ""));
        }

        for (path, items) in &analysis.results {
            let body: Vec<String> = items.iter().map(render_item).collect();
            output.push_str(&banner(path, &body.join("\n")));
        }

        if !analysis.diagnostics.is_empty() {
            let body: Vec<String> = analysis.diagnostics.iter().map(|d| d.to_string()).collect();
            output.push_str(&banner("fallback items:", &body.join("\n")));
        }

        output
    }

    fn render_files(&self, files: &[String]) -> String {
        banner("found files:", &files.join("\n"))
    }
}

fn banner(title: &str, body: &str) -> String {
    format!("\n{}{}\n{}\n", PREFIX, title, body)
}

fn render_item(item: &AnalysisItem) -> String {
    let mut out = format!(
        "{}{}: {}",
        item.name,
        if item.optional { "?" } else { "" },
        item.ty
    );
    for tag in &item.comment {
        out.push_str("\n    ");
        out.push_str(&render_tag(tag));
    }
    out
}

fn render_tag(tag: &Tag) -> String {
    let mut parts = vec![format!("@{}", tag.title)];
    if let Some(ref ty) = tag.ty {
        parts.push(format!("{{{}}}", ty));
    }
    if let Some(ref name) = tag.name {
        parts.push(name.clone());
    }
    if !tag.description.is_empty() {
        // Continuation lines line up under the tag
        parts.push(tag.description.replace('\n', "\n      "));
    }
    parts.join(" ")
}
