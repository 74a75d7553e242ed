//! Glob expansion — patterns relative to a root into a sorted file list.

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Expand `patterns` under `root`. Patterns prefixed with `!` remove matches
/// from the union of the others. Returned paths are relative to `root`,
/// `/`-separated, sorted and de-duplicated.
pub fn match_files(patterns: &[String], root: &Path) -> Result<Vec<String>> {
    let mut excludes = Vec::new();
    let mut includes = Vec::new();
    for pattern in patterns {
        match pattern.strip_prefix('!') {
            Some(negated) => excludes.push(
                Pattern::new(negated)
                    .with_context(|| format!("invalid glob pattern: {}", pattern))?,
            ),
            None => includes.push(pattern),
        }
    }

    let base = Pattern::escape(&root.to_string_lossy());
    let mut files = Vec::new();
    for pattern in includes {
        let absolute = format!("{}/{}", base.trim_end_matches('/'), pattern);
        let matches: Vec<String> = glob::glob_with(&absolute, MATCH_OPTIONS)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .filter_map(|p| relative(&p, root))
            .collect();
        if matches.is_empty() {
            tracing::warn!(%pattern, "no files matched");
        }
        files.extend(matches);
    }

    files.retain(|file| {
        !excludes
            .iter()
            .any(|exclude| exclude.matches_with(file, MATCH_OPTIONS))
    });
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn relative(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
