//! Flag set and scoped flag registration.

use std::collections::BTreeMap;

use crate::tree::StorageKey;

use super::error::FlagError;
use super::value::FlagValue;

/// Current value that marks a flag as kept only for backward compatibility.
pub const DEPRECATED: &str = "deprecated";

/// A registered command-line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Full flag name, prefix included.
    pub name: String,
    /// Usage text.
    pub usage: String,
    /// Default value as text.
    pub default_value: String,
    /// Current value as text.
    pub value: String,
    /// Storage the flag is bound to.
    pub key: StorageKey,
    /// Explicit deprecation marker.
    pub deprecated: bool,
}

impl Flag {
    /// Returns `true` if the flag must not appear in documentation.
    ///
    /// A flag is deprecated when marked so explicitly or when its current
    /// value is the literal `"deprecated"`.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated || self.value == DEPRECATED
    }
}

/// A named collection of flags.
///
/// Enumeration is ordered by flag name, so everything derived from a flag
/// set is reproducible.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
}

impl FlagSet {
    /// Creates an empty flag set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
        }
    }

    /// Name of the flag set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Duplicate`] if the name is already taken.
    pub fn add(&mut self, flag: Flag) -> Result<(), FlagError> {
        if self.flags.contains_key(&flag.name) {
            return Err(FlagError::Duplicate { name: flag.name });
        }
        self.flags.insert(flag.name.clone(), flag);
        Ok(())
    }

    /// Sets the current value of a flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Unknown`] if no such flag exists.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FlagError> {
        let flag = self.flags.get_mut(name).ok_or_else(|| FlagError::Unknown {
            name: name.to_string(),
        })?;
        flag.value = value.into();
        Ok(())
    }

    /// Looks up a flag by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// Iterates over all flags in name order.
    pub fn visit_all(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Number of registered flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if no flags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns a registrar rooted at the top-level configuration value.
    pub fn registrar(&mut self) -> FlagRegistrar<'_> {
        FlagRegistrar {
            set: self,
            path: Vec::new(),
            prefix: String::new(),
        }
    }
}

/// Registers flags for one configuration struct.
///
/// Tracks the identifier path of the struct being registered so every flag
/// gets the same [`StorageKey`] the tree builder derives for the field, and
/// the flag name prefix in effect.
#[derive(Debug)]
pub struct FlagRegistrar<'a> {
    set: &'a mut FlagSet,
    path: Vec<&'static str>,
    prefix: String,
}

impl FlagRegistrar<'_> {
    /// Binds a flag to `field` and writes `default` into it.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Duplicate`] if the prefixed name is taken.
    pub fn var<T: FlagValue>(
        &mut self,
        field: &mut T,
        ident: &'static str,
        name: &str,
        default: T,
        usage: &str,
    ) -> Result<(), FlagError> {
        *field = default;
        let text = field.render();
        self.add(ident, name, text, usage, false)
    }

    /// Binds a flag that still parses but must not be documented.
    ///
    /// The field keeps its current value.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Duplicate`] if the prefixed name is taken.
    pub fn deprecated<T: FlagValue>(
        &mut self,
        field: &T,
        ident: &'static str,
        name: &str,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.add(ident, name, field.render(), usage, true)
    }

    /// Registers the flags of a nested struct stored in field `ident`.
    ///
    /// # Errors
    ///
    /// Propagates any registration error from `f`.
    pub fn nested<F>(&mut self, ident: &'static str, f: F) -> Result<(), FlagError>
    where
        F: FnOnce(&mut FlagRegistrar<'_>) -> Result<(), FlagError>,
    {
        let mut path = self.path.clone();
        path.push(ident);
        let mut scoped = FlagRegistrar {
            set: &mut *self.set,
            path,
            prefix: self.prefix.clone(),
        };
        f(&mut scoped)
    }

    /// Registers a nested configuration struct stored in field `ident`.
    ///
    /// # Errors
    ///
    /// Propagates any registration error from `config`.
    pub fn config<C: RegisterFlags>(
        &mut self,
        ident: &'static str,
        config: &mut C,
    ) -> Result<(), FlagError> {
        self.nested(ident, |f| config.register_flags(f))
    }

    /// Registers flags with `prefix` prepended to every name.
    ///
    /// Prefixes accumulate when scopes are nested.
    ///
    /// # Errors
    ///
    /// Propagates any registration error from `f`.
    pub fn with_prefix<F>(&mut self, prefix: &str, f: F) -> Result<(), FlagError>
    where
        F: FnOnce(&mut FlagRegistrar<'_>) -> Result<(), FlagError>,
    {
        let mut scoped = FlagRegistrar {
            set: &mut *self.set,
            path: self.path.clone(),
            prefix: format!("{}{prefix}", self.prefix),
        };
        f(&mut scoped)
    }

    fn add(
        &mut self,
        ident: &'static str,
        name: &str,
        text: String,
        usage: &str,
        deprecated: bool,
    ) -> Result<(), FlagError> {
        let mut path = self.path.clone();
        path.push(ident);

        self.set.add(Flag {
            name: format!("{}{name}", self.prefix),
            usage: usage.to_string(),
            default_value: text.clone(),
            value: text,
            key: StorageKey::from_path(&path),
            deprecated,
        })
    }
}

/// Configuration structs that register command-line flags for their fields.
pub trait RegisterFlags {
    /// Registers one flag per configurable field, writing defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag name is registered twice.
    fn register_flags(&mut self, flags: &mut FlagRegistrar<'_>) -> Result<(), FlagError>;
}
