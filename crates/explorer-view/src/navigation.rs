use explorer_tree::{Kind, Node};
use serde::Serialize;
use uuid::Uuid;

/// Where the user currently is.
/// There is no history, going back always leads to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    AtRoot,
    InFolder(Uuid),
}

impl Navigation {
    /// The open folder, if any
    pub fn folder(&self) -> Option<Uuid> {
        match self {
            Self::AtRoot => None,
            Self::InFolder(id) => Some(*id),
        }
    }
}

/// The navigation state as the presentation layer needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub folder_id: Option<Uuid>,
    pub folder_name: Option<String>,
    pub show_back: bool,
}

/// A visible node, flattened for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    pub id: Uuid,
    pub name: String,
    pub kind: Kind,
    pub has_children: bool,
    pub editing: bool,
}

impl NodeSummary {
    pub fn new(node: &Node, editing: bool) -> Self {
        Self {
            id: node.id(),
            name: node.name().to_owned(),
            kind: node.kind(),
            has_children: node.has_children(),
            editing,
        }
    }
}
