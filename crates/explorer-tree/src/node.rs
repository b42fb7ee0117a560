use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    File,
    Folder,
}

/// Represents a file in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct File {
    pub id: Uuid,
    pub name: String,
}

/// Represents a folder in the tree.
/// The folder exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A single entry of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    File(File),
    Folder(Folder),
}

impl Node {
    /// Create a node with a fresh id
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self::with_id(Uuid::new_v4(), name, kind)
    }

    /// Create a node with the given id.
    /// Folders start out empty.
    pub fn with_id(id: Uuid, name: impl Into<String>, kind: Kind) -> Self {
        match kind {
            Kind::File => Self::file(id, name),
            Kind::Folder => Self::folder(id, name, Vec::new()),
        }
    }

    /// Create a file node
    pub fn file(id: Uuid, name: impl Into<String>) -> Self {
        Self::File(File {
            id,
            name: name.into(),
        })
    }

    /// Create a folder node holding `children`
    pub fn folder(id: Uuid, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Folder(Folder {
            id,
            name: name.into(),
            children,
        })
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::File(file) => file.id,
            Self::Folder(folder) => folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Folder(folder) => &folder.name,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::File(_) => Kind::File,
            Self::Folder(_) => Kind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// The children of the node.
    /// Always `None` for files, `Some` (possibly empty) for folders.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::File(_) => None,
            Self::Folder(folder) => Some(&folder.children),
        }
    }

    /// Whether the node is a folder with at least one child
    pub fn has_children(&self) -> bool {
        self.children().is_some_and(|children| !children.is_empty())
    }

    pub(crate) fn set_name(&mut self, name: String) {
        match self {
            Self::File(file) => file.name = name,
            Self::Folder(folder) => folder.name = name,
        }
    }
}
