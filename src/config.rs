//! Run options decoded from the command line.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Validated inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory the patterns are resolved against
    pub root: PathBuf,
    /// Glob patterns; a leading `!` excludes
    pub patterns: Vec<String>,
}

impl Options {
    /// Build options from the raw `--pattern` JSON and optional `--root`.
    /// A missing or empty root means the current working directory.
    pub fn from_args(pattern: Option<&str>, root: Option<&str>) -> Result<Self> {
        let patterns = parse_patterns(pattern)?;
        let root = match root.map(str::trim).filter(|r| !r.is_empty()) {
            Some(r) => PathBuf::from(r),
            None => env::current_dir().context("failed to resolve working directory")?,
        };
        Ok(Self { root, patterns })
    }
}

/// Decode the pattern argument: a non-empty JSON array of glob strings.
pub fn parse_patterns(pattern: Option<&str>) -> Result<Vec<String>> {
    let raw = match pattern.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => bail!("params error: pattern is required"),
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(patterns) if !patterns.is_empty() => Ok(patterns),
        _ => bail!("params error: pattern must be array"),
    }
}
