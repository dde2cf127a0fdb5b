//! # Kinship Graph
//!
//! In-memory family tree used by the relationship engine.
//!
//! ## Architecture
//!
//! ```text
//! FamilySnapshot (JSON)
//!     │
//!     └──> FamilyGraph (petgraph arena)
//!            ├─ Nodes: Individual, Family
//!            ├─ Edges: person ─Child{pedigree}─> family
//!            │         person ─Spouse─────────> family
//!            └─ Queries: families_where_child / families_where_spouse,
//!                        other_partner, spouses_of, parents_of
//! ```
//!
//! Every query works on [`PersonId`] / [`FamilyId`] identities. Structural
//! equality of [`Individual`] exists for comparing records and is never used
//! to decide whether two nodes are the same person.

mod error;
mod graph;
mod snapshot;
mod types;

pub use error::{GraphError, Result};
pub use snapshot::{ChildRecord, FamilyRecord, FamilySnapshot};
pub use types::{
    Family, FamilyChild, FamilyGraph, FamilyId, FamilySpouse, Individual, Pedigree, PersonId, Sex,
};
