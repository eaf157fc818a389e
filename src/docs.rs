//! End-to-end documentation generation.
//!
//! Ties the pieces together for one configuration value:
//! 1. Registers the value's flags on a fresh [`FlagSet`]
//! 2. Builds the documentation tree from the value's shape
//! 3. Binds leaves to flags through the storage key index
//! 4. Marks root blocks from the registry
//! 5. Renders the text tree and folds the structured document

use thiserror::Error;

use crate::blocks::{BlockError, BlockRegistry, mark_root_blocks};
use crate::flags::{FlagError, FlagIndex, FlagSet, RegisterFlags, attach_flags};
use crate::render::{ConfigBlock, render_text, to_document};
use crate::schema::Describe;
use crate::tree::{ConfigNode, build_tree};

#[cfg(test)]
#[path = "docs_tests.rs"]
mod tests;

/// Name of the flag set created for a documentation run.
pub const FLAG_SET_NAME: &str = "docs";

/// Error type for documentation generation.
#[derive(Debug, Error)]
pub enum DocError {
    /// Flag registration failed.
    #[error("Failed to register flags: {0}")]
    Flags(#[from] FlagError),

    /// The block registry is invalid.
    #[error("Invalid block registry: {0}")]
    Blocks(#[from] BlockError),
}

/// A configuration value that can be documented.
pub trait Configuration: Describe + RegisterFlags {}

impl<T: Describe + RegisterFlags> Configuration for T {}

/// Output of one documentation run.
#[derive(Debug, Clone)]
pub struct Documentation {
    /// Fully annotated tree.
    pub tree: ConfigNode,
    /// Indented text rendering of the tree.
    pub text: String,
    /// Structured document of the tree.
    pub document: ConfigBlock,
}

/// Documents `config` against `registry`.
///
/// Flag registration writes defaults into `config`.
///
/// # Errors
///
/// Returns [`DocError::Flags`] if flag registration fails.
pub fn generate<C: Configuration>(
    config: &mut C,
    registry: &BlockRegistry,
) -> Result<Documentation, DocError> {
    let mut flags = FlagSet::new(FLAG_SET_NAME);
    config.register_flags(&mut flags.registrar())?;
    tracing::info!(
        flag_set = flags.name(),
        flags = flags.len(),
        "Registered configuration flags"
    );

    let tree = annotate(build_tree(&*config), &flags, registry);
    tracing::info!(
        nodes = tree.node_count(),
        blocks = registry.len(),
        "Annotated configuration tree"
    );

    Ok(Documentation {
        text: render_text(&tree),
        document: to_document(&tree),
        tree,
    })
}

/// Binds flags from `flags` and marks blocks from `registry` on `tree`.
#[must_use]
pub fn annotate(tree: ConfigNode, flags: &FlagSet, registry: &BlockRegistry) -> ConfigNode {
    let index = FlagIndex::from_flag_set(flags);
    tracing::debug!(indexed = index.len(), "Indexed flags by storage key");

    mark_root_blocks(attach_flags(tree, &index), registry)
}
