//! Naming tag parsing.
//!
//! A naming tag looks like `name,omitempty,inline`: the first token is the
//! documentation name, the rest are modifiers.

/// Separator between the primary name and its modifiers.
pub const DELIMITER: char = ',';

/// Primary name that excludes a field from documentation.
pub const SKIP: &str = "-";

/// A parsed naming tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Documentation name of the field.
    pub name: String,
    /// Modifier tokens in tag order.
    pub modifiers: Vec<String>,
}

impl Tag {
    /// Splits a raw tag into its primary name and modifiers.
    ///
    /// An empty input yields an empty name and no modifiers.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }

        let mut parts = raw.split(DELIMITER);
        let name = parts.next().unwrap_or_default().to_string();
        let modifiers = parts.map(str::to_string).collect();

        Self { name, modifiers }
    }

    /// Returns `true` if the field must be left out of the documentation,
    /// children included.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.name.is_empty() || self.name == SKIP
    }
}
