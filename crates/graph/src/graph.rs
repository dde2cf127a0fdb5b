use crate::error::Result;
use crate::types::{
    FamilyChild, FamilyEdge, FamilyGraph, FamilyId, FamilySpouse, Individual, PersonId, Sex,
};
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

impl FamilyGraph {
    /// Families in which `person` is a child, in the order they were linked.
    pub fn families_where_child(&self, person: PersonId) -> Vec<FamilyChild> {
        let mut edges: Vec<_> = self
            .graph
            .edges(person.0)
            .filter_map(|e| match e.weight() {
                FamilyEdge::Child { pedigree } => Some((e.id(), e.target(), *pedigree)),
                FamilyEdge::Spouse => None,
            })
            .collect();
        // petgraph walks outgoing edges newest first
        edges.sort_by_key(|(id, _, _)| *id);
        edges
            .into_iter()
            .map(|(_, family, pedigree)| FamilyChild {
                individual: person,
                family: FamilyId(family),
                pedigree,
            })
            .collect()
    }

    /// Families in which `person` is a partner, in the order they were linked.
    pub fn families_where_spouse(&self, person: PersonId) -> Vec<FamilySpouse> {
        let mut edges: Vec<_> = self
            .graph
            .edges(person.0)
            .filter(|e| matches!(e.weight(), FamilyEdge::Spouse))
            .map(|e| (e.id(), e.target()))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges
            .into_iter()
            .map(|(_, family)| FamilySpouse {
                individual: person,
                family: FamilyId(family),
            })
            .collect()
    }

    /// Every partner `person` has in any family, first-seen order, no repeats.
    pub fn spouses_of(&self, person: PersonId) -> Vec<PersonId> {
        let mut seen = HashSet::new();
        let mut spouses = Vec::new();
        for link in self.families_where_spouse(person) {
            let Ok(family) = self.family(link.family) else {
                continue;
            };
            if let Some(other) = family.other_partner(person) {
                if seen.insert(other) {
                    spouses.push(other);
                }
            }
        }
        spouses
    }

    /// `(partner_a, partner_b)` of every family where `person` is a child.
    pub fn parents_of(&self, person: PersonId) -> Vec<(Option<PersonId>, Option<PersonId>)> {
        self.families_where_child(person)
            .into_iter()
            .filter_map(|link| self.family(link.family).ok())
            .map(|family| (family.partner_a, family.partner_b))
            .collect()
    }

    pub fn is_spouse_of(&self, person: PersonId, other: PersonId) -> bool {
        self.spouses_of(person).contains(&other)
    }

    /// Sex of `person`; unknown ids read as [`Sex::Unknown`].
    pub fn sex_of(&self, person: PersonId) -> Sex {
        self.individual(person)
            .map(|individual| individual.sex)
            .unwrap_or_default()
    }

    /// Human-readable label for diagnostics.
    pub fn display_name(&self, person: PersonId) -> String {
        match self.individual(person) {
            Ok(individual) if !individual.name.is_empty() => individual.name.clone(),
            Ok(individual) => individual.xref.clone(),
            Err(_) => person.to_string(),
        }
    }

    pub fn require(&self, xref: &str) -> Result<(PersonId, &Individual)> {
        let id = self
            .find_by_xref(xref)
            .ok_or_else(|| crate::error::GraphError::PersonNotFound(xref.to_string()))?;
        Ok((id, self.individual(id)?))
    }
}
