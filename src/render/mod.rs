//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;

use crate::parser::Analysis;
use anyhow::{anyhow, Result};

/// Trait for rendering analysis results into a specific output format.
pub trait Renderer {
    fn render(&self, analysis: &Analysis) -> String;

    /// Listing of the matched input files, printed before the results.
    fn render_files(&self, _files: &[String]) -> String {
        String::new()
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}
