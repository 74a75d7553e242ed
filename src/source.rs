//! TypeScript source parsing on top of tree-sitter.
//!
//! `.tsx` files are parsed with the TSX grammar so embedded markup is
//! accepted; `.ts`/`.mts`/`.cts` use the plain TypeScript grammar. Untyped
//! script files are rejected: their props carry no type annotations.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load {dialect} grammar: {message}")]
    Language {
        dialect: &'static str,
        message: String,
    },
    #[error("parser produced no tree for {0}")]
    NoTree(String),
    #[error("span {start}..{end} is outside the source text")]
    Span { start: usize, end: usize },
}

/// Grammar selected from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    pub fn from_path(path: &str) -> Result<Self, SourceError> {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some("tsx") => Ok(Dialect::Tsx),
            Some("ts" | "mts" | "cts") => Ok(Dialect::TypeScript),
            _ => Err(SourceError::Unsupported(path.to_string())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }

    fn language(self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// A parsed file: its path as reported, raw text, and syntax tree.
pub struct SourceFile {
    pub path: String,
    pub text: String,
    tree: Tree,
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("len", &self.text.len())
            .finish()
    }
}

impl SourceFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Trimmed text of `node`.
    pub fn text_of(&self, node: Node<'_>) -> Result<&str, SourceError> {
        Ok(self.slice(node.start_byte(), node.end_byte())?.trim())
    }

    /// Text of `node` including its leading trivia: every comment and blank
    /// line back to the end of the previous non-comment token.
    pub fn full_text_of(&self, node: Node<'_>) -> Result<&str, SourceError> {
        self.slice(leading_trivia_start(node), node.end_byte())
    }

    fn slice(&self, start: usize, end: usize) -> Result<&str, SourceError> {
        self.text
            .get(start..end)
            .ok_or(SourceError::Span { start, end })
    }
}

fn leading_trivia_start(node: Node<'_>) -> usize {
    let mut prev = node.prev_sibling();
    while let Some(sibling) = prev {
        if !sibling.is_extra() && sibling.kind() != "comment" {
            return sibling.end_byte();
        }
        prev = sibling.prev_sibling();
    }
    node.parent().map_or(0, |parent| parent.start_byte())
}

/// Reusable parser; one per thread since tree-sitter parsers are stateful.
pub struct SourceParser {
    parser: Parser,
    dialect: Option<Dialect>,
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            dialect: None,
        }
    }

    /// Read `root/path` and parse it. `path` is kept verbatim as the file key.
    pub fn parse_path(&mut self, root: &Path, path: &str) -> Result<SourceFile, SourceError> {
        let dialect = Dialect::from_path(path)?;
        let text = fs::read_to_string(root.join(path)).map_err(|source| SourceError::Read {
            path: path.to_string(),
            source,
        })?;
        self.parse_with(dialect, path, text)
    }

    /// Parse in-memory text, picking the dialect from `path`.
    pub fn parse_source(&mut self, path: &str, text: impl Into<String>) -> Result<SourceFile, SourceError> {
        let dialect = Dialect::from_path(path)?;
        self.parse_with(dialect, path, text.into())
    }

    fn parse_with(&mut self, dialect: Dialect, path: &str, text: String) -> Result<SourceFile, SourceError> {
        if self.dialect != Some(dialect) {
            self.parser
                .set_language(&dialect.language())
                .map_err(|e| SourceError::Language {
                    dialect: dialect.name(),
                    message: e.to_string(),
                })?;
            self.dialect = Some(dialect);
        }
        let tree = self
            .parser
            .parse(&text, None)
            .ok_or_else(|| SourceError::NoTree(path.to_string()))?;
        Ok(SourceFile {
            path: path.to_string(),
            text,
            tree,
        })
    }
}

/// One-shot convenience around [`SourceParser::parse_source`].
pub fn parse_source(path: &str, text: impl Into<String>) -> Result<SourceFile, SourceError> {
    SourceParser::new().parse_source(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_member(file: &SourceFile) -> Node<'_> {
        let decl = file.root().named_child(0).unwrap();
        let body = decl.child_by_field_name("body").unwrap();
        body.named_children(&mut body.walk())
            .find(|n| n.kind() == "property_signature")
            .unwrap()
    }

    #[test]
    fn dialect_from_extension() {
        assert_eq!(Dialect::from_path("a/b.tsx").unwrap(), Dialect::Tsx);
        assert_eq!(Dialect::from_path("a/b.ts").unwrap(), Dialect::TypeScript);
        assert_eq!(Dialect::from_path("a/b.d.ts").unwrap(), Dialect::TypeScript);
    }

    #[test]
    fn untyped_scripts_rejected() {
        for path in ["a.js", "a.jsx", "a.mjs", "README.md"] {
            assert!(matches!(
                Dialect::from_path(path),
                Err(SourceError::Unsupported(_))
            ));
        }
    }

    #[test]
    fn tsx_accepts_markup() {
        let file = parse_source("x.tsx", "const a = <View style={s} />;\n").unwrap();
        assert!(!file.root().has_error());
    }

    #[test]
    fn full_text_includes_leading_comment() {
        let src = "interface A {\n  /** doc */\n  a: string;\n}\n";
        let file = parse_source("x.ts", src).unwrap();
        let member = first_member(&file);
        assert_eq!(file.text_of(member).unwrap(), "a: string");
        let full = file.full_text_of(member).unwrap();
        assert!(full.contains("/** doc */"), "got: {full:?}");
        assert!(!full.contains('{'), "got: {full:?}");
    }

    #[test]
    fn full_text_stops_at_previous_member() {
        let src = "interface A {\n  a: string;\n  // note\n  b: number;\n}\n";
        let file = parse_source("x.ts", src).unwrap();
        let body = file.root().named_child(0).unwrap().child_by_field_name("body").unwrap();
        let members: Vec<_> = body
            .named_children(&mut body.walk())
            .filter(|n| n.kind() == "property_signature")
            .collect();
        let full = file.full_text_of(members[1]).unwrap();
        assert_eq!(full.trim(), "// note\n  b: number");
    }
}
