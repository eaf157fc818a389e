//! Registry of independently documented configuration blocks.

use thiserror::Error;

use crate::schema::{StructType, TypeDescriptor};

/// Error type for block registry construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    /// Two blocks were registered for the same structural type.
    #[error("Blocks '{first}' and '{second}' both match type {type_name}")]
    DuplicateType {
        /// Name of the block registered first
        first: String,
        /// Name of the rejected block
        second: String,
        /// Qualified name of the shared type
        type_name: &'static str,
    },
}

/// A named block matched by structural type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block name, e.g. `server_config`. May be empty.
    pub name: String,
    /// Description copied onto matching nodes.
    pub description: String,
    /// Type a node must declare to be this block.
    pub match_type: StructType,
}

impl Block {
    /// Creates a block matching the struct type `T`.
    #[must_use]
    pub fn of<T: 'static>(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            match_type: StructType::of::<T>(),
        }
    }

    /// Returns `true` if `ty` is this block's type.
    #[must_use]
    pub fn matches(&self, ty: &TypeDescriptor) -> bool {
        ty.as_struct() == Some(&self.match_type)
    }
}

/// Ordered set of blocks with unique match types.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: Vec<Block>,
}

impl BlockRegistry {
    /// Creates a registry from blocks in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::DuplicateType`] if two blocks share a type.
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Result<Self, BlockError> {
        let mut registry = Self::default();
        for block in blocks {
            registry.push(block)?;
        }
        Ok(registry)
    }

    /// Appends a block.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::DuplicateType`] if the type is already registered.
    pub fn push(&mut self, block: Block) -> Result<(), BlockError> {
        if let Some(existing) = self.blocks.iter().find(|b| b.match_type == block.match_type) {
            return Err(BlockError::DuplicateType {
                first: existing.name.clone(),
                second: block.name,
                type_name: block.match_type.qualified_name(),
            });
        }
        self.blocks.push(block);
        Ok(())
    }

    /// First block matching `ty`, in registration order.
    #[must_use]
    pub fn find(&self, ty: &TypeDescriptor) -> Option<&Block> {
        self.blocks.iter().find(|b| b.matches(ty))
    }

    /// Number of registered blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if no block is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
