use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Family not found: {0}")]
    FamilyNotFound(String),

    #[error("Duplicate xref: {0}")]
    DuplicateXref(String),

    #[error("Unknown reference {xref} in {context}")]
    UnknownReference { xref: String, context: String },

    #[error("Family {family} already has {role}")]
    RoleOccupied { family: String, role: &'static str },

    #[error("{person} is already a child of {family}")]
    DuplicateChild { person: String, family: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub fn unknown_reference(xref: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownReference {
            xref: xref.into(),
            context: context.into(),
        }
    }
}
