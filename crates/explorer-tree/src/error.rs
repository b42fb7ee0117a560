use uuid::Uuid;

/// An error for explorer-tree.
/// None of these are fatal. A failed operation leaves the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidName,
    NoSuchNode(Uuid),
    NotAFolder(Uuid),
    WouldCycle { node: Uuid, target: Uuid },
    DuplicateId(Uuid),
    Snapshot(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "A name cannot be empty"),
            Self::NoSuchNode(id) => write!(f, "No such file or folder: {}", id),
            Self::NotAFolder(id) => write!(f, "{} is not a folder", id),
            Self::WouldCycle { node, target } => write!(
                f,
                "Cannot move {} into {} as it would become its own descendant",
                node, target
            ),
            Self::DuplicateId(id) => write!(f, "The id {} is already in use", id),
            Self::Snapshot(message) => write!(f, "Invalid tree snapshot: {}", message),
        }
    }
}

/// The outcome of a store operation.
/// No-ops are silent for the user but observable for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NoOp(Error),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The reason the operation was dropped, if it was
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Applied => None,
            Self::NoOp(error) => Some(error),
        }
    }
}

impl<T> From<Result<T, Error>> for Outcome {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(_) => Self::Applied,
            Err(error) => Self::NoOp(error),
        }
    }
}
