//! Semantic type descriptors and their short labels.

use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Placeholder label for an absent type (the synthetic root).
pub const NO_TYPE: &str = "-";

/// Identity and naming of a structured configuration type.
///
/// Equality and hashing use only the [`TypeId`]; the qualified name is kept
/// for labelling.
#[derive(Debug, Clone, Copy)]
pub struct StructType {
    id: TypeId,
    path: &'static str,
}

impl StructType {
    /// Describes the struct type `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: type_name::<T>(),
        }
    }

    /// Fully qualified name, `namespace::Name`.
    #[must_use]
    pub const fn qualified_name(&self) -> &'static str {
        self.path
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StructType {}

impl std::hash::Hash for StructType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Static type of a configuration field, reduced to what documentation needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Any integer width, signed or unsigned.
    Int,
    /// `f32` or `f64`.
    Float,
    /// Sequence of the inner type.
    List(Box<TypeDescriptor>),
    /// Optional or boxed inner type.
    Optional(Box<TypeDescriptor>),
    /// A structured type.
    Struct(StructType),
    /// Any other kind, labelled by its generic kind name.
    Other(&'static str),
}

impl TypeDescriptor {
    /// Descriptor for the structured type `T`.
    #[must_use]
    pub fn structure<T: 'static>() -> Self {
        Self::Struct(StructType::of::<T>())
    }

    /// Returns the struct type if this descriptor is structured.
    #[must_use]
    pub const fn as_struct(&self) -> Option<&StructType> {
        match self {
            Self::Struct(st) => Some(st),
            _ => None,
        }
    }

    /// Short semantic label: `int`, `float`, `list[T]`, `*T`, struct path or kind.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Int => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::List(inner) => format!("list[{}]", inner.label()),
            Self::Optional(inner) => format!("*{}", inner.label()),
            Self::Struct(st) => st.qualified_name().to_string(),
            Self::Other(kind) => (*kind).to_string(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Classifies an optional descriptor, using [`NO_TYPE`] when absent.
#[must_use]
pub fn type_label(ty: Option<&TypeDescriptor>) -> String {
    ty.map_or_else(|| NO_TYPE.to_string(), TypeDescriptor::label)
}

/// Maps a Rust type to its [`TypeDescriptor`].
///
/// Implemented for the scalar, sequence and wrapper types configuration
/// structs are built from. Struct types that appear inside a `Vec` or
/// `Option` implement it with [`TypeDescriptor::structure`].
pub trait Classify {
    /// Returns the descriptor for `Self`.
    fn descriptor() -> TypeDescriptor;
}

macro_rules! classify_as {
    ($variant:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Classify for $ty {
                fn descriptor() -> TypeDescriptor {
                    $variant
                }
            }
        )+
    };
}

classify_as!(TypeDescriptor::Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
classify_as!(TypeDescriptor::Float => f32, f64);
classify_as!(TypeDescriptor::Other("bool") => bool);
classify_as!(TypeDescriptor::Other("string") => String, &'static str);
classify_as!(TypeDescriptor::Other("path") => PathBuf);
classify_as!(TypeDescriptor::Other("duration") => Duration);

impl<T: Classify> Classify for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::List(Box::new(T::descriptor()))
    }
}

impl<T: Classify> Classify for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Optional(Box::new(T::descriptor()))
    }
}

impl<T: Classify> Classify for Box<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Optional(Box::new(T::descriptor()))
    }
}

impl<K, V, S> Classify for HashMap<K, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Other("map")
    }
}

impl<K, V> Classify for BTreeMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Other("map")
    }
}
