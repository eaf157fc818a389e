//! doctool: configuration reference generator
//!
//! A library for describing nested configuration structures, correlating
//! each field with the command-line flag that controls it, and rendering
//! the result as a text tree and a structured document.

pub mod blocks;
pub mod config;
pub mod docs;
pub mod flags;
pub mod render;
pub mod sample;
pub mod schema;
pub mod tree;

#[cfg(test)]
mod test_fixtures;
