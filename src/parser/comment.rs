//! Doc block parser — `/** ... */` text into an ordered list of tags.
//!
//! The block is unwrapped (delimiters and `*` decoration removed), split at
//! every line that starts with `@`, and each chunk becomes one [`Tag`].
//! Text before the first marker is the free-text description; it only
//! surfaces as a synthesized `description` tag when the block has no tags.
//! Never fails: anything unexpected is kept as description text.

use crate::model::Tag;
use regex::Regex;
use std::sync::LazyLock;

// Leading whitespace, one `*` and one blank after it (per line)
static RE_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:\*[ \t]?)?").unwrap());

// Tag marker: `@` as the first non-blank character of a line
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*@(\S+)").unwrap());

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\[([^\]=]+)(?:=[^\]]*)?\]|(\S+))").unwrap());

/// Tags that may open with a `{type}`; elsewhere braces are description text.
const TYPED_TAGS: &[&str] = &[
    "param", "arg", "argument", "property", "prop", "returns", "return", "type", "typedef",
    "callback", "throws", "exception", "enum", "this", "define", "constant", "const", "member",
    "var", "namespace",
];

/// Tags whose content carries a name token after the optional `{type}`.
const NAMED_TAGS: &[&str] = &[
    "param", "arg", "argument", "property", "prop", "typedef", "callback", "name", "alias",
    "event",
];

/// Parse a comment span into tags.
pub fn parse(span: &str) -> Vec<Tag> {
    let Some(block) = doc_block(span) else {
        return Vec::new();
    };
    let body = unwrap(block);
    let (description, tags) = split(&body);

    if !tags.is_empty() {
        return tags;
    }
    if !description.is_empty() {
        return vec![Tag::description(description)];
    }
    Vec::new()
}

/// The last `/** ... */` block in the span, i.e. the one touching the member.
fn doc_block(span: &str) -> Option<&str> {
    let start = span.rfind("/**")?;
    let rest = &span[start..];
    if rest.starts_with("/**/") {
        return None;
    }
    let end = rest[3..].find("*/").map_or(rest.len(), |i| i + 5);
    Some(&rest[..end])
}

fn unwrap(block: &str) -> String {
    let inner = block.strip_prefix("/**").unwrap_or(block);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);
    RE_DECORATION
        .replace_all(inner, "")
        .replace('\r', "")
        .trim_end()
        .to_string()
}

fn split(body: &str) -> (String, Vec<Tag>) {
    let markers: Vec<_> = RE_TAG.captures_iter(body).collect();

    let description_end = markers
        .first()
        .and_then(|caps| caps.get(0))
        .map_or(body.len(), |m| m.start());
    let description = body[..description_end].trim().to_string();

    let mut tags = Vec::with_capacity(markers.len());
    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let content_end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |m| m.start());
        tags.push(parse_tag(title.as_str(), &body[whole.end()..content_end]));
    }

    (description, tags)
}

fn parse_tag(title: &str, content: &str) -> Tag {
    let mut tag = Tag {
        title: title.to_string(),
        ..Default::default()
    };
    let mut rest = content.trim_start();

    if TYPED_TAGS.contains(&title) {
        if let Some((ty, after)) = braced_type(rest) {
            tag.ty = Some(ty.trim().to_string());
            rest = after.trim_start();
        }
    }

    if NAMED_TAGS.contains(&title) {
        if let Some(caps) = RE_NAME.captures(rest) {
            let name = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str().trim());
            if let (Some(name), Some(whole)) = (name, caps.get(0)) {
                tag.name = Some(name.to_string());
                rest = &rest[whole.end()..];
            }
        }
    }

    let rest = rest.trim();
    tag.description = rest.strip_prefix("- ").unwrap_or(rest).trim_start().to_string();
    tag
}

/// Split off a leading `{...}` with balanced braces. Inline tags such as
/// `{@link Foo}` are description text, not a type.
fn braced_type(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with('{') || text.starts_with("{@") {
        return None;
    }
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[1..i], &text[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}
