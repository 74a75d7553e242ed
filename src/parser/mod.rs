//! Extraction pipeline — locate `PropTypes` members, derive each one, and
//! collect the per-file item lists.

pub mod comment;
pub mod locate;
pub mod property;

use crate::model::{AnalysisItem, AnalysisResults};
use crate::source::SourceFile;
use property::{ExtractError, Extraction};
use rayon::prelude::*;
use std::fmt;

/// A member that degraded to the fallback item.
#[derive(Debug)]
pub struct Diagnostic {
    pub path: String,
    /// Position of the member among the file's property members
    pub index: usize,
    pub error: ExtractError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: member #{}: {}", self.path, self.index, self.error)
    }
}

/// Results of one run plus the causes behind any fallback items.
#[derive(Debug, Default)]
pub struct Analysis {
    pub results: AnalysisResults,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the extraction over `files`. Files are processed in parallel and
/// merged in one pass; a file without items gets no entry.
pub fn analyze(files: &[SourceFile]) -> Analysis {
    let per_file: Vec<(String, Vec<Extraction>)> = files
        .par_iter()
        .map(|file| (file.path.clone(), analyze_file(file)))
        .collect();

    let mut analysis = Analysis::default();
    for (path, extractions) in per_file {
        if extractions.is_empty() {
            tracing::debug!(%path, "no PropTypes members");
            continue;
        }
        let mut items: Vec<AnalysisItem> = Vec::with_capacity(extractions.len());
        for (index, extraction) in extractions.into_iter().enumerate() {
            let (item, error) = extraction.into_parts();
            if let Some(error) = error {
                tracing::warn!(%path, index, %error, "member fell back to an empty item");
                analysis.diagnostics.push(Diagnostic {
                    path: path.clone(),
                    index,
                    error,
                });
            }
            items.push(item);
        }
        tracing::debug!(%path, count = items.len(), "extracted properties");
        analysis.results.insert(path, items);
    }
    analysis
}

/// Every property member of one file, derived in declaration order.
pub fn analyze_file(file: &SourceFile) -> Vec<Extraction> {
    locate::property_members(file)
        .into_iter()
        .map(|member| property::extract(file, member))
        .collect()
}
