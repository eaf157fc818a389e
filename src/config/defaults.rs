//! Default values for tool options.

use crate::render::DocumentFormat;

/// Default encoding of the structured document.
pub const FORMAT: DocumentFormat = DocumentFormat::Yaml;

/// Whether the text tree is printed by default.
pub const PRINT_TREE: bool = true;
