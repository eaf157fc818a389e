//! Indented plain-text rendering of the documentation tree.

use crate::tree::{ConfigNode, NodeKind};

/// Indentation unit per depth level.
pub const INDENT: &str = "  ";

/// Renders `tree` as a brace-delimited text tree.
///
/// Branches print as `name {` followed by one indented line per child and
/// a closing `}`; empty branches print as `name {}`. Leaves print as
/// `name: type`, followed by ` -flag=default` when a flag is bound.
#[must_use]
pub fn render_text(tree: &ConfigNode) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, 0);
    out
}

fn write_node(out: &mut String, node: &ConfigNode, depth: usize) {
    out.push_str(&node.name);

    match &node.kind {
        NodeKind::Leaf(_) => {
            out.push_str(": ");
            out.push_str(&node.type_label());
            if let Some(flag) = &node.bound_flag {
                out.push_str(" -");
                out.push_str(&flag.name);
                out.push('=');
                out.push_str(&flag.default_value);
            }
        }
        NodeKind::Branch(children) if children.is_empty() => out.push_str(" {}"),
        NodeKind::Branch(children) => {
            out.push_str(" {\n");
            for child in children {
                out.push_str(&INDENT.repeat(depth + 1));
                write_node(out, child, depth + 1);
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
    }
}
