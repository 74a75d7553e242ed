//! Finds `PropTypes` interfaces among a file's top-level statements and
//! returns their property members.

use crate::source::SourceFile;
use tree_sitter::Node;

/// Identifier of the interface that describes a component's props.
pub const SENTINEL: &str = "PropTypes";

/// Property signatures of every sentinel interface, in source order.
/// Methods, call/construct and index signatures are skipped.
pub fn property_members(file: &SourceFile) -> Vec<Node<'_>> {
    let root = file.root();
    let mut cursor = root.walk();
    let bodies: Vec<Node<'_>> = root
        .named_children(&mut cursor)
        .filter_map(|node| sentinel_body(file, node))
        .collect();

    let mut members = Vec::new();
    for body in bodies {
        let mut cursor = body.walk();
        members.extend(
            body.named_children(&mut cursor)
                .filter(|member| member.kind() == "property_signature"),
        );
    }
    members
}

/// Body of `node` when it is (or exports, or declares) an interface named
/// [`SENTINEL`].
fn sentinel_body<'a>(file: &SourceFile, node: Node<'a>) -> Option<Node<'a>> {
    let decl = interface_of(node)?;
    let name = decl.child_by_field_name("name")?;
    if file.text_of(name).ok()? != SENTINEL {
        return None;
    }
    decl.child_by_field_name("body")
}

/// Unwrap `export` and `declare` down to an interface declaration.
fn interface_of(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "interface_declaration" => Some(node),
        "export_statement" => interface_of(node.child_by_field_name("declaration")?),
        "ambient_declaration" => {
            let mut cursor = node.walk();
            let inner = node.named_children(&mut cursor).next()?;
            interface_of(inner)
        }
        _ => None,
    }
}
