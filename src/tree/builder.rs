//! Derives the documentation tree from a configuration value's shape.

use std::collections::HashSet;

use crate::schema::{Describe, FieldShape, Tag, visible_fields};

use super::node::{ConfigNode, StorageKey};

/// Builds the full documentation tree for a configuration value.
///
/// The root is named `"root"` and carries no type.
#[must_use]
pub fn build_tree(config: &dyn Describe) -> ConfigNode {
    let tree = populate(ConfigNode::root(), config, &[]);
    tracing::debug!(nodes = tree.node_count(), "Built configuration tree");
    tree
}

/// Appends one child to `node` per documentable visible field of `value`.
///
/// `base` is the identifier path of `value` from the root configuration,
/// used to derive leaf storage keys.
#[must_use]
fn populate(mut node: ConfigNode, value: &dyn Describe, base: &[&'static str]) -> ConfigNode {
    let mut seen = HashSet::new();

    for visible in visible_fields(value) {
        let field = visible.field;
        let tag = Tag::parse(field.tag);
        if tag.is_excluded() {
            tracing::trace!(field = field.ident, "Skipping undocumented field");
            continue;
        }

        if !seen.insert(tag.name.clone()) {
            tracing::warn!(
                parent = %node.name,
                name = %tag.name,
                "Duplicate documentation name among siblings"
            );
        }

        let mut path = base.to_vec();
        path.extend_from_slice(&visible.path);

        let child = match field.shape {
            FieldShape::Nested(inner) | FieldShape::Embedded(inner) => populate(
                ConfigNode::branch(tag.name, Some(field.ty), tag.modifiers),
                inner,
                &path,
            ),
            FieldShape::Leaf => ConfigNode::leaf(
                tag.name,
                field.ty,
                tag.modifiers,
                StorageKey::from_path(&path),
            ),
        };
        node.push_child(child);
    }

    node
}
