//! The tree store of the explorer.
//! Holds the hierarchy of files and folders and the operations that keep it consistent.
pub mod error;
pub mod node;
pub mod store;
pub mod tree;
pub mod util;


pub use error::{Error, Outcome};
pub use node::{File, Folder, Kind, Node};
pub use store::TreeStore;
pub use tree::Tree;
