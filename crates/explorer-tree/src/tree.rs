use hashbrown::HashSet;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::{
    error::Error,
    node::{Folder, Kind, Node},
    util::{self, matches_search, normalize_name},
};

/// The hierarchy of files and folders.
/// Every mutation returns a new tree, the old one is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Node>")]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Create a tree from root level nodes.
    /// ### Errors
    /// - [`Error::DuplicateId`] If an id occurs more than once
    /// - [`Error::InvalidName`] If a node has an empty name
    pub fn from_nodes(roots: Vec<Node>) -> Result<Self, Error> {
        let tree = Self { roots };
        tree.validate()?;
        Ok(tree)
    }

    /// The tree every new session starts out with
    pub fn default_seed() -> Self {
        Self {
            roots: vec![
                Node::new("Documents", Kind::Folder),
                Node::new("Pictures", Kind::Folder),
                Node::new("File1.txt", Kind::File),
                Node::new("File2.pdf", Kind::File),
            ],
        }
    }

    /// Load a tree from a json snapshot
    pub fn from_json(json: &str) -> Result<Self, Error> {
        util::from_json(json).map_err(|e| Error::Snapshot(e.to_string()))
    }

    /// Save the tree as a json snapshot
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Snapshot(e.to_string()))
    }

    /// Check the invariants that the type system does not cover
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for node in self.iter() {
            if !seen.insert(node.id()) {
                return Err(Error::DuplicateId(node.id()));
            }
            if node.name().trim().is_empty() {
                return Err(Error::InvalidName);
            }
        }
        Ok(())
    }
}

impl Tree {
    /// Create a node with a fresh id.
    /// If `parent` is a file or doesn't exist, the node is added at root level.
    /// ### Errors
    /// - [`Error::InvalidName`] If the name is empty or only whitespace
    pub fn create(&self, parent: Option<Uuid>, name: &str, kind: Kind) -> Result<Tree, Error> {
        self.create_with_id(Uuid::new_v4(), parent, name, kind)
    }

    /// Create a node with the given id.
    /// Same fallback rules as [`Tree::create`].
    /// ### Errors
    /// - [`Error::InvalidName`] If the name is empty or only whitespace
    /// - [`Error::DuplicateId`] If the id is already in the tree
    pub fn create_with_id(
        &self,
        id: Uuid,
        parent: Option<Uuid>,
        name: &str,
        kind: Kind,
    ) -> Result<Tree, Error> {
        let name = normalize_name(name).ok_or(Error::InvalidName)?;
        if self.contains(id) {
            return Err(Error::DuplicateId(id));
        }

        let node = Node::with_id(id, name, kind);
        let mut roots = self.roots.clone();
        match parent {
            Some(parent_id) => match find_in_mut(&mut roots, parent_id) {
                Some(Node::Folder(folder)) => folder.children.push(node),
                Some(Node::File(_)) => {
                    log::warn!("Parent {} is a file, creating at root level", parent_id);
                    roots.push(node);
                }
                None => {
                    log::warn!("No parent {}, creating at root level", parent_id);
                    roots.push(node);
                }
            },
            None => roots.push(node),
        }

        Ok(Tree { roots })
    }

    /// Rename a node anywhere in the tree.
    /// Only the name changes.
    pub fn rename(&self, id: Uuid, new_name: &str) -> Result<Tree, Error> {
        let name = normalize_name(new_name).ok_or(Error::InvalidName)?;
        let mut roots = self.roots.clone();
        let node = find_in_mut(&mut roots, id).ok_or(Error::NoSuchNode(id))?;
        node.set_name(name);
        Ok(Tree { roots })
    }

    /// Delete a node and everything below it
    pub fn delete(&self, id: Uuid) -> Result<Tree, Error> {
        let mut roots = self.roots.clone();
        remove_in(&mut roots, id).ok_or(Error::NoSuchNode(id))?;
        Ok(Tree { roots })
    }

    /// Move a node, from any depth, to the end of a folder's children.
    /// ### Errors
    /// - [`Error::NoSuchNode`] If either node does not exist
    /// - [`Error::NotAFolder`] If the target is a file
    /// - [`Error::WouldCycle`] If the target is the node itself or one of its descendants
    pub fn move_node(&self, id: Uuid, target: Uuid) -> Result<Tree, Error> {
        let target_node = self.find(target).ok_or(Error::NoSuchNode(target))?;
        if !target_node.is_folder() {
            return Err(Error::NotAFolder(target));
        }
        if !self.contains(id) {
            return Err(Error::NoSuchNode(id));
        }
        if id == target || self.is_ancestor(id, target) {
            return Err(Error::WouldCycle { node: id, target });
        }

        let mut roots = self.roots.clone();
        let node = remove_in(&mut roots, id).ok_or(Error::NoSuchNode(id))?;
        match find_in_mut(&mut roots, target) {
            Some(Node::Folder(folder)) => folder.children.push(node),
            _ => return Err(Error::NoSuchNode(target)),
        }
        Ok(Tree { roots })
    }
}

impl Tree {
    /// The nodes to present.
    /// Inside a folder this is its direct children and the search term is ignored.
    /// At root level it is every root node whose name contains the term, ignoring case.
    pub fn list_visible(&self, current_folder: Option<Uuid>, search_term: &str) -> Vec<&Node> {
        match current_folder {
            Some(folder_id) => self
                .find(folder_id)
                .and_then(Node::children)
                .map(|children| children.iter().collect())
                .unwrap_or_default(),
            None => self
                .roots
                .iter()
                .filter(|node| matches_search(node.name(), search_term))
                .collect(),
        }
    }

    /// The root level nodes
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Find a node at any depth
    pub fn find(&self, id: Uuid) -> Option<&Node> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.find(id).is_some()
    }

    /// Get the folder directly containing a node.
    /// Returns `None` for root level nodes and unknown ids.
    pub fn parent_of(&self, id: Uuid) -> Option<&Folder> {
        parent_in(&self.roots, id)
    }

    /// Whether `id` is somewhere below `ancestor`
    pub fn is_ancestor(&self, ancestor: Uuid, id: Uuid) -> bool {
        self.find(ancestor)
            .and_then(Node::children)
            .is_some_and(|children| find_in(children, id).is_some())
    }

    /// Walk every node depth first, in sibling order
    pub fn iter(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// The total number of nodes in the tree
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl TryFrom<Vec<Node>> for Tree {
    type Error = Error;

    fn try_from(roots: Vec<Node>) -> Result<Self, Self::Error> {
        Self::from_nodes(roots)
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.roots.serialize(serializer)
    }
}

/// Depth first iterator over a tree
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

fn find_in(nodes: &[Node], id: Uuid) -> Option<&Node> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = node.children().and_then(|children| find_in(children, id)) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut(nodes: &mut [Node], id: Uuid) -> Option<&mut Node> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let Node::Folder(folder) = node {
            if let Some(found) = find_in_mut(&mut folder.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn parent_in(nodes: &[Node], id: Uuid) -> Option<&Folder> {
    for node in nodes {
        let Node::Folder(folder) = node else {
            continue;
        };
        if folder.children.iter().any(|child| child.id() == id) {
            return Some(folder);
        }
        if let Some(found) = parent_in(&folder.children, id) {
            return Some(found);
        }
    }
    None
}

/// Take a node out of whichever sequence holds it
fn remove_in(nodes: &mut Vec<Node>, id: Uuid) -> Option<Node> {
    if let Some(position) = nodes.iter().position(|node| node.id() == id) {
        return Some(nodes.remove(position));
    }
    nodes.iter_mut().find_map(|node| match node {
        Node::Folder(folder) => remove_in(&mut folder.children, id),
        Node::File(_) => None,
    })
}
