//! Root blocks: substructures documented as independent units.
//!
//! A node is a root block if and only if its declared type equals the
//! match type of a registered [`Block`]. Registration rejects two blocks
//! with the same type, so a node never matches more than one block.

mod matcher;
mod registry;


pub use matcher::{flag_prefix, mark_root_blocks};
pub use registry::{Block, BlockError, BlockRegistry};
