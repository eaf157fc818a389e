//! Command-line flags and their correlation with the documentation tree.
//!
//! This module provides:
//! - A flag set with deterministic enumeration ([`FlagSet`], [`Flag`])
//! - Scoped registration for configuration structs ([`FlagRegistrar`], [`RegisterFlags`])
//! - Value rendering ([`FlagValue`])
//! - The storage key index and the leaf binding pass ([`FlagIndex`], [`attach_flags`])
//!
//! # Deprecation
//!
//! Flags that still exist for backward compatibility are registered with
//! [`FlagRegistrar::deprecated`] or carry the current value `"deprecated"`.
//! Either way they never reach the index and so never appear in output.

mod error;
mod index;
mod set;
mod value;


pub use error::FlagError;
pub use index::{FlagIndex, attach_flags};
pub use set::{DEPRECATED, Flag, FlagRegistrar, FlagSet, RegisterFlags};
pub use value::FlagValue;
