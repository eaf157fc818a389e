//! Output forms of the documentation tree.
//!
//! This module provides:
//! - The indented text tree ([`render_text`])
//! - The structured document and its encodings ([`ConfigBlock`], [`DocumentFormat`])

mod document;
mod text;

#[cfg(test)]
mod document_tests;

pub use document::{ConfigBlock, DocumentFormat, RenderError, to_document};
pub use text::{INDENT, render_text};
