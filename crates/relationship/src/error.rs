use kinship_graph::{GraphError, PersonId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelationshipError>;

#[derive(Error, Debug)]
pub enum RelationshipError {
    #[error("{ancestor} is not an ancestor of {descendant}")]
    NotAnAncestor {
        descendant: PersonId,
        ancestor: PersonId,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Naming table error: {0}")]
    NamingTable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelationshipError {
    pub fn naming_table(msg: impl Into<String>) -> Self {
        Self::NamingTable(msg.into())
    }

    pub fn is_not_an_ancestor(&self) -> bool {
        matches!(self, Self::NotAnAncestor { .. })
    }
}
