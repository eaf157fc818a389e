//! Root block marking and flag prefixes.

use crate::tree::{ConfigNode, RootBlock, fold, walk};

use super::registry::BlockRegistry;

/// Marks every node whose declared type is a registered block.
///
/// A marked node records the block and takes its description. The root
/// has no declared type and is never marked.
#[must_use]
pub fn mark_root_blocks(tree: ConfigNode, registry: &BlockRegistry) -> ConfigNode {
    walk(tree, &mut |mut node: ConfigNode| {
        let block = node
            .declared_type
            .as_ref()
            .and_then(|ty| registry.find(ty));

        if let Some(block) = block {
            tracing::debug!(node = %node.name, block = %block.name, "Marked root block");
            node.description.clone_from(&block.description);
            node.root_block = Some(RootBlock {
                name: block.name.clone(),
                description: block.description.clone(),
            });
        }
        node
    })
}

/// Common dotted prefix of the flag names bound inside `node`.
///
/// `server.port` and `server.tls.cert-path` share `server.`. Returns `None`
/// when the subtree binds no flag or the names share no segment.
#[must_use]
pub fn flag_prefix(node: &ConfigNode) -> Option<String> {
    let names = fold(node, &mut |n: &ConfigNode, children: Vec<Vec<String>>| {
        let mut names: Vec<String> = n.bound_flag.iter().map(|f| f.name.clone()).collect();
        names.extend(children.into_iter().flatten());
        names
    });

    let mut common: Option<Vec<&str>> = None;
    for name in &names {
        let mut segments: Vec<&str> = name.split('.').collect();
        segments.pop();
        common = Some(match common {
            None => segments,
            Some(prev) => prev
                .into_iter()
                .zip(segments)
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| a)
                .collect(),
        });
    }

    common
        .filter(|segments| !segments.is_empty())
        .map(|segments| format!("{}.", segments.join(".")))
}
