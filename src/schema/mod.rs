//! Static shape of configuration types.
//!
//! This module provides:
//! - Semantic type descriptors and labels ([`TypeDescriptor`], [`Classify`])
//! - Naming tag parsing ([`Tag`])
//! - Field enumeration for configuration structs ([`Describe`], [`Field`])
//! - Visible field resolution with embedding promotion ([`visible_fields`])

mod describe;
mod tag;
mod types;

#[cfg(test)]
mod describe_tests;
#[cfg(test)]
mod tag_tests;

pub use describe::{Describe, Field, FieldShape, VisibleField, visible_fields};
pub use tag::Tag;
pub use types::{Classify, NO_TYPE, StructType, TypeDescriptor, type_label};
