//! # Kinship Relationship
//!
//! Works out how two people in a [`kinship_graph::FamilyGraph`] are related
//! and what to call it.
//!
//! ## Architecture
//!
//! ```text
//! FamilyGraph
//!     │
//!     ├──> AncestryCalculator
//!     │      ├─ extended_ancestry (ancestors + their spouses)
//!     │      ├─ generation_count
//!     │      └─ lowest_common_ancestors
//!     │             │
//!     │             └──> KinshipNameCalculator ──> NamingTable
//!     │                    ├─ blood relation        ├─ EnglishNames
//!     │                    ├─ in-law via spouse     └─ PropertiesTable
//!     │                    └─ rewording pass
//!     │
//!     └──> RelationshipCalculator
//!            ├─ depth-first path search (shared visited set)
//!            ├─ rules::simplify (FATHER + SON -> BROTHER, to fixpoint)
//!            └─ keep shortest, then simplest chains
//! ```

mod ancestry;
mod calculator;
mod chain;
mod error;
mod kinship;
mod name;
mod naming;
pub mod rules;

pub use ancestry::AncestryCalculator;
pub use calculator::RelationshipCalculator;
pub use chain::{Relationship, SimpleRelationship};
pub use error::{RelationshipError, Result};
pub use kinship::KinshipNameCalculator;
pub use name::RelationshipName;
pub use naming::{relationship_key, reword, EnglishNames, NamingTable, PropertiesTable};
