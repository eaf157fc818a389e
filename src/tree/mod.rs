//! The configuration documentation tree.
//!
//! This module provides:
//! - The tree node and its storage key ([`ConfigNode`], [`StorageKey`])
//! - Tree construction from a configuration value ([`build_tree`])
//! - Bottom-up transforms ([`walk`], [`fold`])

mod builder;
mod node;
mod walk;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod walk_tests;

pub use builder::build_tree;
pub use node::{ConfigNode, NodeKind, ROOT_NAME, RootBlock, StorageKey};
pub use walk::{fold, walk};
