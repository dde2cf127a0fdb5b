use crate::error::{GraphError, Result};
use log::trace;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of a person node in a [`crate::FamilyGraph`].
///
/// Two ids are equal only when they address the same arena slot; people with
/// identical names and sexes are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub(crate) NodeIndex);

/// Identity of a family (union) node in a [`crate::FamilyGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyId(pub(crate) NodeIndex);

impl PersonId {
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl FamilyId {
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0.index())
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// Single-letter code used in naming-table keys (`m`, `f`, `u`).
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
            Sex::Unknown => "u",
        }
    }

    /// Lenient parse of a recorded sex value: only the first letter counts.
    pub fn from_code(value: &str) -> Self {
        match value.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('m') => Sex::Male,
            Some('f') => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Sex::from_code(&raw))
    }
}

/// A person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub xref: String,
    pub name: String,
    #[serde(default)]
    pub sex: Sex,
}

impl Individual {
    pub fn new(xref: impl Into<String>, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            xref: xref.into(),
            name: name.into(),
            sex,
        }
    }
}

/// A union: up to two partners and an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub xref: String,
    /// Historically the husband.
    pub partner_a: Option<PersonId>,
    /// Historically the wife.
    pub partner_b: Option<PersonId>,
    pub children: Vec<PersonId>,
}

impl Family {
    pub fn new(xref: impl Into<String>) -> Self {
        Self {
            xref: xref.into(),
            partner_a: None,
            partner_b: None,
            children: Vec::new(),
        }
    }

    /// The partner on the other side of `person`, if `person` is a partner
    /// here and the other role is filled.
    pub fn other_partner(&self, person: PersonId) -> Option<PersonId> {
        if self.partner_a == Some(person) {
            self.partner_b
        } else if self.partner_b == Some(person) {
            self.partner_a
        } else {
            None
        }
    }

    pub fn partners(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.partner_a.into_iter().chain(self.partner_b)
    }

    pub fn has_child(&self, person: PersonId) -> bool {
        self.children.contains(&person)
    }
}

/// How a child came to belong to a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pedigree {
    Birth,
    Adopted,
    Foster,
    Sealing,
}

/// Link from a person to a family in which they are a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyChild {
    pub individual: PersonId,
    pub family: FamilyId,
    pub pedigree: Option<Pedigree>,
}

/// Link from a person to a family in which they are a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySpouse {
    pub individual: PersonId,
    pub family: FamilyId,
}

/// Node weight in the underlying petgraph arena.
#[derive(Debug, Clone)]
pub(crate) enum FamilyNode {
    Person(Individual),
    Family(Family),
}

/// Edge weight, always directed person -> family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FamilyEdge {
    Child { pedigree: Option<Pedigree> },
    Spouse,
}

/// In-memory family tree.
///
/// People and families live in one petgraph arena; every person -> family
/// link is an edge, so the bidirectional individual/family references never
/// need owned pointers. Traversal code addresses nodes only through
/// [`PersonId`] and [`FamilyId`].
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    pub(crate) graph: DiGraph<FamilyNode, FamilyEdge>,
    person_xrefs: HashMap<String, PersonId>,
    family_xrefs: HashMap<String, FamilyId>,
}

impl FamilyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_individual(&mut self, individual: Individual) -> Result<PersonId> {
        if self.person_xrefs.contains_key(&individual.xref) {
            return Err(GraphError::DuplicateXref(individual.xref));
        }
        let xref = individual.xref.clone();
        let id = PersonId(self.graph.add_node(FamilyNode::Person(individual)));
        self.person_xrefs.insert(xref, id);
        Ok(id)
    }

    pub fn add_family(&mut self, xref: impl Into<String>) -> Result<FamilyId> {
        let xref = xref.into();
        if self.family_xrefs.contains_key(&xref) {
            return Err(GraphError::DuplicateXref(xref));
        }
        let id = FamilyId(self.graph.add_node(FamilyNode::Family(Family::new(xref.clone()))));
        self.family_xrefs.insert(xref, id);
        Ok(id)
    }

    /// Fill the partner A (husband) role of `family`.
    pub fn set_partner_a(&mut self, family: FamilyId, person: PersonId) -> Result<()> {
        self.set_partner(family, person, true)
    }

    /// Fill the partner B (wife) role of `family`.
    pub fn set_partner_b(&mut self, family: FamilyId, person: PersonId) -> Result<()> {
        self.set_partner(family, person, false)
    }

    fn set_partner(&mut self, family: FamilyId, person: PersonId, role_a: bool) -> Result<()> {
        self.individual(person)?;
        let record = self.family_mut(family)?;
        let (slot, role) = if role_a {
            (&mut record.partner_a, "partner A")
        } else {
            (&mut record.partner_b, "partner B")
        };
        if slot.is_some() {
            return Err(GraphError::RoleOccupied {
                family: record.xref.clone(),
                role,
            });
        }
        *slot = Some(person);
        trace!("{person} joins {family} as {role}");
        self.graph.add_edge(person.0, family.0, FamilyEdge::Spouse);
        Ok(())
    }

    pub fn add_child(
        &mut self,
        family: FamilyId,
        person: PersonId,
        pedigree: Option<Pedigree>,
    ) -> Result<()> {
        let child_xref = self.individual(person)?.xref.clone();
        let record = self.family_mut(family)?;
        if record.has_child(person) {
            return Err(GraphError::DuplicateChild {
                person: child_xref,
                family: record.xref.clone(),
            });
        }
        record.children.push(person);
        self.graph
            .add_edge(person.0, family.0, FamilyEdge::Child { pedigree });
        Ok(())
    }

    pub fn individual(&self, id: PersonId) -> Result<&Individual> {
        match self.graph.node_weight(id.0) {
            Some(FamilyNode::Person(individual)) => Ok(individual),
            _ => Err(GraphError::PersonNotFound(id.to_string())),
        }
    }

    pub fn family(&self, id: FamilyId) -> Result<&Family> {
        match self.graph.node_weight(id.0) {
            Some(FamilyNode::Family(family)) => Ok(family),
            _ => Err(GraphError::FamilyNotFound(id.to_string())),
        }
    }

    fn family_mut(&mut self, id: FamilyId) -> Result<&mut Family> {
        match self.graph.node_weight_mut(id.0) {
            Some(FamilyNode::Family(family)) => Ok(family),
            _ => Err(GraphError::FamilyNotFound(id.to_string())),
        }
    }

    pub fn find_by_xref(&self, xref: &str) -> Option<PersonId> {
        self.person_xrefs.get(xref).copied()
    }

    pub fn find_family_by_xref(&self, xref: &str) -> Option<FamilyId> {
        self.family_xrefs.get(xref).copied()
    }

    /// All people carrying exactly `name`, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Vec<PersonId> {
        self.individuals()
            .filter(|(_, individual)| individual.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn individuals(&self) -> impl Iterator<Item = (PersonId, &Individual)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| match &self.graph[idx] {
                FamilyNode::Person(individual) => Some((PersonId(idx), individual)),
                FamilyNode::Family(_) => None,
            })
    }

    pub fn families(&self) -> impl Iterator<Item = (FamilyId, &Family)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| match &self.graph[idx] {
                FamilyNode::Family(family) => Some((FamilyId(idx), family)),
                FamilyNode::Person(_) => None,
            })
    }

    pub fn individual_count(&self) -> usize {
        self.person_xrefs.len()
    }

    pub fn family_count(&self) -> usize {
        self.family_xrefs.len()
    }
}
