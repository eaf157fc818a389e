//! Correlation of flags with tree leaves.

use std::collections::HashMap;
use std::rc::Rc;

use crate::tree::{ConfigNode, StorageKey, walk};

use super::set::{Flag, FlagSet};

/// Lookup from storage key to the flag bound to it.
///
/// Deprecated flags are never indexed. When several flags share a storage
/// key, the one visited last (highest name) wins.
#[derive(Debug, Clone, Default)]
pub struct FlagIndex {
    by_key: HashMap<StorageKey, Rc<Flag>>,
}

impl FlagIndex {
    /// Indexes every non-deprecated flag of `set`.
    #[must_use]
    pub fn from_flag_set(set: &FlagSet) -> Self {
        let mut by_key = HashMap::with_capacity(set.len());

        for flag in set.visit_all() {
            if flag.is_deprecated() {
                tracing::debug!(flag = %flag.name, "Skipping deprecated flag");
                continue;
            }

            if let Some(previous) = by_key.insert(flag.key.clone(), Rc::new(flag.clone())) {
                tracing::debug!(
                    key = %flag.key,
                    replaced = %previous.name,
                    flag = %flag.name,
                    "Storage key bound by several flags, keeping the last"
                );
            }
        }

        Self { by_key }
    }

    /// Returns the flag bound to `key`.
    #[must_use]
    pub fn get(&self, key: &StorageKey) -> Option<&Rc<Flag>> {
        self.by_key.get(key)
    }

    /// Number of indexed flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns `true` if no flag is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Binds each leaf of `tree` to its indexed flag.
///
/// A bound leaf without a description takes the flag's usage text.
#[must_use]
pub fn attach_flags(tree: ConfigNode, index: &FlagIndex) -> ConfigNode {
    walk(tree, &mut |mut node: ConfigNode| {
        let flag = node.storage_key().and_then(|key| index.get(key)).cloned();
        if let Some(flag) = flag {
            if node.description.is_empty() {
                node.description.clone_from(&flag.usage);
            }
            node.bound_flag = Some(flag);
        }
        node
    })
}
