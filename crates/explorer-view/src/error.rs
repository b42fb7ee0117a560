use uuid::Uuid;

/// The errors for the view controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Tree(explorer_tree::Error),
    NotEditing(Uuid),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tree(error) => write!(f, "{}", error),
            Self::NotEditing(id) => write!(f, "{} is not being renamed", id),
        }
    }
}

impl From<explorer_tree::Error> for Error {
    fn from(error: explorer_tree::Error) -> Self {
        Self::Tree(error)
    }
}
