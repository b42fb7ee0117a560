use error::Error;
use explorer_tree::{Kind, Node, Outcome, Tree, TreeStore};
use gesture::{DragMessage, DragPayload};
use hashbrown::HashMap;
use navigation::{Location, Navigation, NodeSummary};
use uuid::Uuid;

pub mod error;
pub mod gesture;
pub mod navigation;

mod tests;

/// The explorer view controller.
/// Owns the transient ui state and turns gestures into tree store calls.
#[derive(Debug)]
pub struct Explorer {
    store: TreeStore,
    navigation: Navigation,
    search_term: String,
    draft_name: String,
    editing: HashMap<Uuid, String>,
    visible: Vec<NodeSummary>,
    pub updated: bool,
}

impl Explorer {
    /// Create the controller for a tree, starting at the root
    pub fn new(tree: Tree) -> Self {
        let mut explorer = Self {
            store: TreeStore::new(tree),
            navigation: Navigation::AtRoot,
            search_term: String::new(),
            draft_name: String::new(),
            editing: HashMap::new(),
            visible: Vec::new(),
            updated: false,
        };
        explorer.refresh();
        explorer
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn tree(&self) -> &Tree {
        self.store.tree()
    }

    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    /// The nodes the presentation layer should render
    pub fn visible(&self) -> &[NodeSummary] {
        &self.visible
    }

    /// Where the user is, with enough to render a back button
    pub fn location(&self) -> Location {
        let folder = self
            .navigation
            .folder()
            .and_then(|id| self.store.node(id));
        Location {
            folder_id: folder.map(Node::id),
            folder_name: folder.map(|node| node.name().to_owned()),
            show_back: folder.is_some(),
        }
    }

    /// Whether anything changed since the last call.
    /// Clears the flag.
    pub fn take_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated)
    }
}

impl Explorer {
    /// Set the name used by the next [`Explorer::create`]
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft_name = name.into();
    }

    /// Create a node named after the draft in the open folder, or at the root.
    /// The draft is cleared once the node exists.
    pub fn create(&mut self, kind: Kind) -> Outcome {
        let parent = self.navigation.folder();
        let outcome = self.store.create(parent, &self.draft_name, kind);
        if outcome.is_applied() {
            self.draft_name.clear();
        }
        self.refresh();
        outcome
    }

    /// Create a node at an explicit location
    pub fn create_at(&mut self, parent: Option<Uuid>, name: &str, kind: Kind) -> Outcome {
        let outcome = self.store.create(parent, name, kind);
        self.refresh();
        outcome
    }

    pub fn rename(&mut self, id: Uuid, new_name: &str) -> Outcome {
        let outcome = self.store.rename(id, new_name);
        self.refresh();
        outcome
    }

    pub fn delete(&mut self, id: Uuid) -> Outcome {
        let outcome = self.store.delete(id);
        self.refresh();
        outcome
    }

    pub fn move_node(&mut self, id: Uuid, target: Uuid) -> Outcome {
        let outcome = self.store.move_node(id, target);
        self.refresh();
        outcome
    }

    /// Replace the whole tree, e.g. from a snapshot
    pub fn load(&mut self, tree: Tree) {
        self.store.load(tree);
        self.refresh();
    }
}

impl Explorer {
    /// Enter rename mode for a node.
    /// The edit draft starts out as the current name.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<(), Error> {
        let node = self
            .store
            .node(id)
            .ok_or(explorer_tree::Error::NoSuchNode(id))?;
        self.editing.insert(id, node.name().to_owned());
        self.refresh();
        Ok(())
    }

    /// Update the edit draft of a node in rename mode
    pub fn set_edit_name(&mut self, id: Uuid, name: impl Into<String>) -> Result<(), Error> {
        let draft = self.editing.get_mut(&id).ok_or(Error::NotEditing(id))?;
        *draft = name.into();
        Ok(())
    }

    /// Commit the edit draft, on blur or enter.
    /// Rename mode is left even if the rename is dropped.
    pub fn commit_edit(&mut self, id: Uuid) -> Result<Outcome, Error> {
        let draft = self.editing.remove(&id).ok_or(Error::NotEditing(id))?;
        let outcome = self.store.rename(id, &draft);
        self.refresh();
        Ok(outcome)
    }

    /// Leave rename mode without renaming
    pub fn cancel_edit(&mut self, id: Uuid) -> Result<(), Error> {
        self.editing.remove(&id).ok_or(Error::NotEditing(id))?;
        self.refresh();
        Ok(())
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.editing.contains_key(&id)
    }

    /// The current edit draft of a node
    pub fn edit_name(&self, id: Uuid) -> Option<&str> {
        self.editing.get(&id).map(String::as_str)
    }
}

impl Explorer {
    /// Open a folder, from the root or from another folder
    pub fn open_folder(&mut self, id: Uuid) -> Outcome {
        let outcome = match self.store.node(id) {
            None => Outcome::NoOp(explorer_tree::Error::NoSuchNode(id)),
            Some(node) if !node.is_folder() => Outcome::NoOp(explorer_tree::Error::NotAFolder(id)),
            Some(_) => {
                self.navigation = Navigation::InFolder(id);
                Outcome::Applied
            }
        };
        self.refresh();
        outcome
    }

    /// Go back to the root
    pub fn back(&mut self) {
        self.navigation = Navigation::AtRoot;
        self.refresh();
    }

    /// Filter the root listing.
    /// Matching ignores case, the term is stored lower case.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.refresh();
    }

    /// Start dragging a node
    pub fn drag_start(&self, id: Uuid) -> Option<DragPayload> {
        self.store
            .node(id)
            .map(|node| DragPayload { source_id: node.id() })
    }

    /// Drop a dragged node.
    /// Only folders accept drops.
    pub fn handle_drop(&mut self, message: DragMessage) -> Outcome {
        match self.store.node(message.target_id) {
            Some(target) if target.is_folder() => {
                self.move_node(message.source_id, message.target_id)
            }
            Some(_) => Outcome::NoOp(explorer_tree::Error::NotAFolder(message.target_id)),
            None => Outcome::NoOp(explorer_tree::Error::NoSuchNode(message.target_id)),
        }
    }
}

impl Explorer {
    /// Recompute the visible nodes after any state change
    fn refresh(&mut self) {
        if let Navigation::InFolder(id) = self.navigation {
            let still_folder = self.store.node(id).is_some_and(Node::is_folder);
            if !still_folder {
                log::info!("Open folder {} is gone, returning to root", id);
                self.navigation = Navigation::AtRoot;
            }
        }

        let tree = self.store.tree();
        self.editing.retain(|id, _| tree.contains(*id));

        self.visible = tree
            .list_visible(self.navigation.folder(), &self.search_term)
            .into_iter()
            .map(|node| NodeSummary::new(node, self.editing.contains_key(&node.id())))
            .collect();
        self.updated = true;
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(Tree::default_seed())
    }
}
