//! Structural introspection of configuration values.
//!
//! Configuration structs implement [`Describe`] to enumerate their fields
//! in declaration order. This is all the tree builder needs to know about a
//! value: identifiers, naming tags, static types and which fields are
//! themselves structured.

use std::collections::HashMap;
use std::fmt;

use super::types::{Classify, StructType, TypeDescriptor};

/// How a field participates in the configuration shape.
#[derive(Clone, Copy)]
pub enum FieldShape<'a> {
    /// A scalar, sequence, map or optional value.
    Leaf,
    /// A nested structured value documented as its own subtree.
    Nested(&'a dyn Describe),
    /// An anonymous structured value whose fields are promoted into the
    /// enclosing struct.
    Embedded(&'a dyn Describe),
}

impl fmt::Debug for FieldShape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("Leaf"),
            Self::Nested(_) => f.write_str("Nested"),
            Self::Embedded(_) => f.write_str("Embedded"),
        }
    }
}

/// One declared field of a configuration struct.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Rust identifier of the field; used for storage keys and promotion.
    pub ident: &'static str,
    /// Raw naming tag, e.g. `"max_size,omitempty"`.
    pub tag: &'static str,
    /// Static type of the field.
    pub ty: TypeDescriptor,
    /// Leaf, nested or embedded.
    pub shape: FieldShape<'a>,
}

impl<'a> Field<'a> {
    /// Declares a leaf field. The value only drives type inference.
    #[must_use]
    pub fn leaf<T: Classify>(ident: &'static str, tag: &'static str, _value: &T) -> Self {
        Self {
            ident,
            tag,
            ty: T::descriptor(),
            shape: FieldShape::Leaf,
        }
    }

    /// Declares a nested structured field.
    #[must_use]
    pub fn nested<T: Describe>(ident: &'static str, tag: &'static str, value: &'a T) -> Self {
        Self {
            ident,
            tag,
            ty: TypeDescriptor::Struct(T::struct_type()),
            shape: FieldShape::Nested(value),
        }
    }

    /// Declares an embedded structured field whose fields are promoted.
    #[must_use]
    pub fn embedded<T: Describe>(ident: &'static str, tag: &'static str, value: &'a T) -> Self {
        Self {
            ident,
            tag,
            ty: TypeDescriptor::Struct(T::struct_type()),
            shape: FieldShape::Embedded(value),
        }
    }
}

/// A structured configuration type whose fields can be enumerated.
pub trait Describe: 'static {
    /// Identity of the implementing type.
    fn struct_type() -> StructType
    where
        Self: Sized,
    {
        StructType::of::<Self>()
    }

    /// Declared fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A field reachable from a struct, directly or through embedding.
#[derive(Debug, Clone)]
pub struct VisibleField<'a> {
    /// The field itself.
    pub field: Field<'a>,
    /// Identifier path relative to the enumerated struct, embedding
    /// fields included. The last element is `field.ident`.
    pub path: Vec<&'static str>,
    /// Embedding depth; 0 for fields declared directly.
    pub depth: usize,
}

/// Enumerates the visible fields of `value`.
///
/// Embedded fields are listed in place and followed immediately by their
/// promoted fields. When two fields share an identifier the shallower one
/// wins, then the first declared.
#[must_use]
pub fn visible_fields(value: &dyn Describe) -> Vec<VisibleField<'_>> {
    let mut all = Vec::new();
    collect(value, &[], 0, &mut all);

    let mut winners: HashMap<&'static str, usize> = HashMap::new();
    for (index, candidate) in all.iter().enumerate() {
        winners
            .entry(candidate.field.ident)
            .and_modify(|best| {
                if candidate.depth < all[*best].depth {
                    *best = index;
                }
            })
            .or_insert(index);
    }

    all.into_iter()
        .enumerate()
        .filter(|(index, vf)| winners.get(vf.field.ident) == Some(index))
        .map(|(_, vf)| vf)
        .collect()
}

fn collect<'a>(
    value: &'a dyn Describe,
    prefix: &[&'static str],
    depth: usize,
    out: &mut Vec<VisibleField<'a>>,
) {
    for field in value.fields() {
        let mut path = prefix.to_vec();
        path.push(field.ident);

        let embedded = match field.shape {
            FieldShape::Embedded(inner) => Some(inner),
            FieldShape::Leaf | FieldShape::Nested(_) => None,
        };

        out.push(VisibleField {
            field,
            path: path.clone(),
            depth,
        });

        if let Some(inner) = embedded {
            collect(inner, &path, depth + 1, out);
        }
    }
}
