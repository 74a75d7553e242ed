//! Property signature extraction.
//!
//! Derives `name`, `type` and `optional` from the raw text of one
//! `property_signature` member and hands its leading doc block to the
//! comment parser. A member that cannot be derived becomes an
//! [`Extraction::Fallback`] carrying the cause.

use crate::model::AnalysisItem;
use crate::parser::comment;
use crate::source::{SourceError, SourceFile};
use thiserror::Error;
use tree_sitter::Node;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no `{separator}` separator in `{text}`")]
    MissingSeparator {
        separator: &'static str,
        text: String,
    },
    #[error("member contains a syntax error: `{0}`")]
    Malformed(String),
    #[error("member text `{0}` does not end its leading span")]
    DetachedText(String),
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Outcome of deriving one member.
#[derive(Debug)]
pub enum Extraction {
    Derived(AnalysisItem),
    Fallback(ExtractError),
}

impl Extraction {
    /// The item to report, plus the cause when it is the fallback item.
    pub fn into_parts(self) -> (AnalysisItem, Option<ExtractError>) {
        match self {
            Extraction::Derived(item) => (item, None),
            Extraction::Fallback(err) => (AnalysisItem::fallback(), Some(err)),
        }
    }

    /// The item to report; a failure degrades to [`AnalysisItem::fallback`].
    pub fn into_item(self) -> AnalysisItem {
        self.into_parts().0
    }
}

/// Extract one property member of `file`.
pub fn extract(file: &SourceFile, member: Node<'_>) -> Extraction {
    match derive(file, member) {
        Ok(item) => Extraction::Derived(item),
        Err(err) => Extraction::Fallback(err),
    }
}

fn derive(file: &SourceFile, member: Node<'_>) -> Result<AnalysisItem, ExtractError> {
    let text = file.text_of(member)?;
    if member.has_error() {
        return Err(ExtractError::Malformed(text.to_string()));
    }

    let full = file.full_text_of(member)?;
    // Declaration text always closes the span; only that copy is removed
    let comment_span = full
        .trim_end()
        .strip_suffix(text)
        .ok_or_else(|| ExtractError::DetachedText(text.to_string()))?;

    let optional = is_optional(member);
    let separator = if optional { "?:" } else { ":" };
    let (name, ty) = text
        .split_once(separator)
        .ok_or_else(|| ExtractError::MissingSeparator {
            separator,
            text: text.to_string(),
        })?;

    Ok(AnalysisItem {
        name: name.trim().to_string(),
        ty: ty.trim().trim_end_matches([',', ';']).trim_end().to_string(),
        optional,
        comment: comment::parse(comment_span.trim()),
    })
}

/// True when a `?` token sits between the property name and its type.
fn is_optional(member: Node<'_>) -> bool {
    let type_start = member
        .child_by_field_name("type")
        .map_or(member.end_byte(), |ty| ty.start_byte());
    let mut cursor = member.walk();
    let optional = member
        .children(&mut cursor)
        .any(|child| child.kind() == "?" && child.end_byte() <= type_start);
    optional
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;
    use crate::source::parse_source;

    fn extract_all(src: &str) -> Vec<Extraction> {
        let file = parse_source("props.tsx", src).unwrap();
        let body = file
            .root()
            .named_child(0)
            .and_then(|n| n.child_by_field_name("body"))
            .unwrap();
        let members: Vec<_> = body
            .named_children(&mut body.walk())
            .filter(|n| n.kind() == "property_signature")
            .collect();
        members.into_iter().map(|m| extract(&file, m)).collect()
    }

    fn items(src: &str) -> Vec<AnalysisItem> {
        extract_all(src).into_iter().map(Extraction::into_item).collect()
    }

    #[test]
    fn documented_required_property() {
        let got = items("interface PropTypes {\n  /** @description shows the panel */\n  visible: boolean;\n}\n");
        assert_eq!(
            got,
            vec![AnalysisItem {
                name: "visible".into(),
                ty: "boolean".into(),
                optional: false,
                comment: vec![Tag::description("shows the panel")],
            }]
        );
    }

    #[test]
    fn doc_text_repeating_the_declaration_survives() {
        let got = items("interface PropTypes {\n  /** @description label: string */\n  label: string;\n}\n");
        assert_eq!(got[0].name, "label");
        assert_eq!(got[0].comment, vec![Tag::description("label: string")]);
    }

    #[test]
    fn undocumented_optional_property() {
        let got = items("interface PropTypes {\n  modalProps?: ModalProps;\n}\n");
        assert_eq!(
            got,
            vec![AnalysisItem {
                name: "modalProps".into(),
                ty: "ModalProps".into(),
                optional: true,
                comment: vec![],
            }]
        );
    }

    #[test]
    fn free_text_comment() {
        let got = items("interface PropTypes {\n  /** click handler */\n  onPress: () => void;\n}\n");
        assert_eq!(got[0].comment, vec![Tag::description("click handler")]);
        assert_eq!(got[0].ty, "() => void");
    }

    #[test]
    fn type_split_on_first_separator_only() {
        let got = items("interface PropTypes {\n  style?: { color: string };\n}\n");
        assert_eq!(got[0].name, "style");
        assert_eq!(got[0].ty, "{ color: string }");
        assert!(got[0].optional);
    }

    #[test]
    fn interior_commas_kept() {
        let got = items("interface PropTypes {\n  map: Record<string, number>,\n}\n");
        assert_eq!(got[0].ty, "Record<string, number>");
    }

    #[test]
    fn question_mark_inside_type_is_not_optional() {
        let got = items("interface PropTypes {\n  cb: (a?: string) => void;\n}\n");
        assert!(!got[0].optional);
        assert_eq!(got[0].ty, "(a?: string) => void");
    }

    #[test]
    fn readonly_modifier_stays_in_name() {
        let got = items("interface PropTypes {\n  readonly id: string;\n}\n");
        assert_eq!(got[0].name, "readonly id");
    }

    #[test]
    fn untyped_member_falls_back() {
        let all = extract_all("interface PropTypes {\n  /** @description lost */\n  bare;\n  next: number;\n}\n");
        assert_eq!(all.len(), 2);
        assert!(matches!(
            &all[0],
            Extraction::Fallback(ExtractError::MissingSeparator { separator: ":", .. })
        ));
        let items: Vec<_> = all.into_iter().map(Extraction::into_item).collect();
        assert_eq!(items[0], AnalysisItem::fallback());
        assert_eq!(items[1].name, "next");
        assert_eq!(items[1].ty, "number");
    }

    #[test]
    fn spaced_optional_marker_falls_back() {
        let all = extract_all("interface PropTypes {\n  size ? : number;\n}\n");
        assert!(matches!(
            &all[0],
            Extraction::Fallback(ExtractError::MissingSeparator { separator: "?:", .. })
        ));
        assert_eq!(all.into_iter().next().unwrap().into_item(), AnalysisItem::fallback());
    }
}
