//! Structured, serializable rendering of the documentation tree.

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blocks::flag_prefix;
use crate::tree::{ConfigNode, fold};

/// Error type for document serialization.
#[derive(Debug, Error)]
pub enum RenderError {
    /// YAML serialization failed.
    #[error("Failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("Failed to encode TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Writing the encoded document failed.
    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialization format of the structured document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML, the default.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
    /// TOML.
    Toml,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// One documented field and its nested fields.
///
/// Every record has the same keys; only `flag_prefix` is omitted when
/// empty. Nested fields follow declaration order of the source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigBlock {
    /// Documentation name.
    pub name: String,

    /// Description from the bound flag or the root block.
    pub description: String,

    /// Semantic type label.
    #[serde(rename = "type")]
    pub type_label: String,

    /// Default value text of the bound flag, null when unbound.
    ///
    /// TOML has no null, so the key is left out there instead.
    #[serde(default)]
    pub value: Option<String>,

    /// Name of the bound flag, empty when unbound.
    #[serde(rename = "flag", default)]
    pub flag_name: String,

    /// Flag name prefixes shared by a root block's flags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flag_prefix: Vec<String>,

    /// Nested fields, in declaration order. Empty for leaves.
    #[serde(default)]
    pub fields: Vec<ConfigBlock>,

    /// Whether this field is a registered root block.
    #[serde(default)]
    pub root: bool,
}

impl ConfigBlock {
    /// Encodes the document in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer rejects the document.
    pub fn encode(&self, format: DocumentFormat) -> Result<String, RenderError> {
        let encoded = match format {
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
            DocumentFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                json
            }
            DocumentFormat::Toml => toml::to_string(self)?,
        };
        Ok(encoded)
    }

    /// Encodes the document and writes it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn write_to<W: Write>(&self, format: DocumentFormat, mut writer: W) -> Result<(), RenderError> {
        let encoded = self.encode(format)?;
        writer.write_all(encoded.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Folds an annotated tree into its structured document.
#[must_use]
pub fn to_document(tree: &ConfigNode) -> ConfigBlock {
    fold(tree, &mut |node: &ConfigNode, fields: Vec<ConfigBlock>| {
        let root = node.is_root_block();
        ConfigBlock {
            name: node.name.clone(),
            description: node.description.clone(),
            type_label: node.type_label(),
            value: node.bound_flag.as_ref().map(|f| f.default_value.clone()),
            flag_name: node
                .bound_flag
                .as_ref()
                .map(|f| f.name.clone())
                .unwrap_or_default(),
            flag_prefix: if root {
                flag_prefix(node).into_iter().collect()
            } else {
                Vec::new()
            },
            fields,
            root,
        }
    })
}
