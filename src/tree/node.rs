//! The documentation tree node.

use std::fmt;
use std::rc::Rc;

use crate::flags::Flag;
use crate::schema::{TypeDescriptor, type_label};

/// Name of the synthetic root node.
pub const ROOT_NAME: &str = "root";

/// Correlation key shared by a leaf and the flag bound to its storage.
///
/// The key is the dotted path of Rust field identifiers from the root
/// configuration value, e.g. `server.http_listen_port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    /// Builds a key from a field identifier path.
    #[must_use]
    pub fn from_path(path: &[&str]) -> Self {
        Self(path.join("."))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a node groups other nodes or stands for a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A structured field (or the root). May have zero children.
    Branch(Vec<ConfigNode>),
    /// A scalar, sequence, map or optional field.
    Leaf(StorageKey),
}

/// Registry match recorded on a node by the block matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootBlock {
    /// Registered block name.
    pub name: String,
    /// Registered block description.
    pub description: String,
}

/// One entry of the documentation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNode {
    /// Documentation name from the naming tag; `"root"` for the root.
    pub name: String,
    /// Free text filled in by flag and block annotation.
    pub description: String,
    /// Static type of the field; `None` only for the root.
    pub declared_type: Option<TypeDescriptor>,
    /// Modifier tokens from the naming tag.
    pub modifiers: Vec<String>,
    /// Children or storage key.
    pub kind: NodeKind,
    /// Flag bound to this leaf's storage, after correlation.
    pub bound_flag: Option<Rc<Flag>>,
    /// Set when the declared type is a registered root block.
    pub root_block: Option<RootBlock>,
}

impl ConfigNode {
    /// Creates the synthetic root node.
    #[must_use]
    pub fn root() -> Self {
        Self::branch(ROOT_NAME, None, Vec::new())
    }

    /// Creates a branch node without children.
    #[must_use]
    pub fn branch(
        name: impl Into<String>,
        declared_type: Option<TypeDescriptor>,
        modifiers: Vec<String>,
    ) -> Self {
        Self::new(name, declared_type, modifiers, NodeKind::Branch(Vec::new()))
    }

    /// Creates a leaf node bound to a storage key.
    #[must_use]
    pub fn leaf(
        name: impl Into<String>,
        declared_type: TypeDescriptor,
        modifiers: Vec<String>,
        key: StorageKey,
    ) -> Self {
        Self::new(name, Some(declared_type), modifiers, NodeKind::Leaf(key))
    }

    fn new(
        name: impl Into<String>,
        declared_type: Option<TypeDescriptor>,
        modifiers: Vec<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            declared_type,
            modifiers,
            kind,
            bound_flag: None,
            root_block: None,
        }
    }

    /// Returns `true` for leaves.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Returns `true` if the block matcher marked this node.
    #[must_use]
    pub const fn is_root_block(&self) -> bool {
        self.root_block.is_some()
    }

    /// Children in declaration order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[ConfigNode] {
        match &self.kind {
            NodeKind::Branch(children) => children,
            NodeKind::Leaf(_) => &[],
        }
    }

    /// Appends a child. Does nothing on a leaf.
    pub fn push_child(&mut self, child: Self) {
        if let NodeKind::Branch(children) = &mut self.kind {
            children.push(child);
        }
    }

    /// Storage key of a leaf.
    #[must_use]
    pub const fn storage_key(&self) -> Option<&StorageKey> {
        match &self.kind {
            NodeKind::Leaf(key) => Some(key),
            NodeKind::Branch(_) => None,
        }
    }

    /// Semantic type label, `-` when the type is absent.
    #[must_use]
    pub fn type_label(&self) -> String {
        type_label(self.declared_type.as_ref())
    }

    /// Direct child with the given documentation name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Descendant addressed by a dotted documentation-name path.
    ///
    /// ```
    /// use doctool::tree::{ConfigNode, StorageKey};
    /// use doctool::schema::TypeDescriptor;
    ///
    /// let mut server = ConfigNode::branch("server", None, vec![]);
    /// server.push_child(ConfigNode::leaf(
    ///     "port",
    ///     TypeDescriptor::Int,
    ///     vec![],
    ///     StorageKey::from_path(&["server", "port"]),
    /// ));
    /// let mut root = ConfigNode::root();
    /// root.push_child(server);
    ///
    /// assert!(root.lookup("server.port").is_some_and(|n| n.is_leaf()));
    /// assert!(root.lookup("server.host").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Self> {
        path.split('.').try_fold(self, |node, name| node.child(name))
    }

    /// Number of nodes in this subtree, itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }
}
