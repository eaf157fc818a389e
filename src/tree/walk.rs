//! Bottom-up tree transforms.
//!
//! Both operations visit children before their parent and never reorder
//! siblings.

use super::node::{ConfigNode, NodeKind};

/// Rewrites every node of `tree`, children first.
///
/// `f` receives each node with its children already rewritten and returns
/// the replacement node.
pub fn walk<F>(mut tree: ConfigNode, f: &mut F) -> ConfigNode
where
    F: FnMut(ConfigNode) -> ConfigNode,
{
    if let NodeKind::Branch(children) = &mut tree.kind {
        let old = std::mem::take(children);
        children.reserve(old.len());
        for child in old {
            children.push(walk(child, f));
        }
    }
    f(tree)
}

/// Folds `tree` into another representation, children first.
///
/// `f` receives each node together with the folded values of its children,
/// in declaration order.
pub fn fold<T, F>(tree: &ConfigNode, f: &mut F) -> T
where
    F: FnMut(&ConfigNode, Vec<T>) -> T,
{
    let mut folded = Vec::with_capacity(tree.children().len());
    for child in tree.children() {
        folded.push(fold(child, f));
    }
    f(tree, folded)
}
