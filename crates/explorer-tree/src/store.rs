use uuid::Uuid;

use crate::{
    error::{Error, Outcome},
    node::{Kind, Node},
    tree::Tree,
};

/// Owns the canonical tree.
/// Operations replace the tree wholesale and report whether they applied.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    tree: Tree,
    revision: u64,
}

impl TreeStore {
    pub fn new(tree: Tree) -> Self {
        Self { tree, revision: 0 }
    }

    /// The current tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Incremented every time an operation changes the tree
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shortcut for [`Tree::find`]
    pub fn node(&self, id: Uuid) -> Option<&Node> {
        self.tree.find(id)
    }

    /// Replace the tree with a snapshot
    pub fn load(&mut self, tree: Tree) {
        log::info!("Loaded tree with {} nodes", tree.len());
        self.tree = tree;
        self.revision += 1;
    }

    /// Create a file or folder.
    /// See [`Tree::create`] for the fallback rules.
    pub fn create(&mut self, parent: Option<Uuid>, name: &str, kind: Kind) -> Outcome {
        self.create_with_id(Uuid::new_v4(), parent, name, kind)
    }

    /// Create a file or folder with a caller chosen id
    pub fn create_with_id(
        &mut self,
        id: Uuid,
        parent: Option<Uuid>,
        name: &str,
        kind: Kind,
    ) -> Outcome {
        let result = self.tree.create_with_id(id, parent, name, kind);
        self.commit("create", result)
    }

    pub fn rename(&mut self, id: Uuid, new_name: &str) -> Outcome {
        let result = self.tree.rename(id, new_name);
        self.commit("rename", result)
    }

    pub fn delete(&mut self, id: Uuid) -> Outcome {
        let result = self.tree.delete(id);
        self.commit("delete", result)
    }

    pub fn move_node(&mut self, id: Uuid, target: Uuid) -> Outcome {
        let result = self.tree.move_node(id, target);
        self.commit("move", result)
    }

    /// Swap in the new tree if the operation succeeded
    fn commit(&mut self, operation: &str, result: Result<Tree, Error>) -> Outcome {
        match result {
            Ok(tree) => {
                log::debug!("{} applied", operation);
                self.tree = tree;
                self.revision += 1;
                Outcome::Applied
            }
            Err(error) => {
                log::debug!("{} dropped: {}", operation, error);
                Outcome::NoOp(error)
            }
        }
    }
}
