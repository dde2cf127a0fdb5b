use crate::chain::{Relationship, SimpleRelationship};
use crate::name::RelationshipName;
use crate::rules;
use kinship_graph::{FamilyGraph, PersonId};
use log::debug;
use std::collections::HashSet;

/// Finds the chains of single steps that connect two people.
///
/// The search recurses once per person on the current path, so the longest
/// chain it can follow is bounded by the thread's stack. Lineages of a few
/// thousand generations need a larger stack than the 2 MiB default of
/// spawned threads.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipCalculator<'g> {
    graph: &'g FamilyGraph,
}

/// One depth-first search from a start person toward a target.
///
/// `visited` is shared by every branch of the search, so each intermediate
/// person is passed through at most once. The target itself is never marked
/// and can be reached along several branches.
struct PathSearch<'a> {
    graph: &'a FamilyGraph,
    target: PersonId,
    visited: HashSet<PersonId>,
    chain: Vec<SimpleRelationship>,
    found: Vec<Relationship>,
}

impl<'g> RelationshipCalculator<'g> {
    pub fn new(graph: &'g FamilyGraph) -> Self {
        Self { graph }
    }

    /// The shortest, then simplest, chains from `start` to `target`.
    ///
    /// With `simplified` each raw chain is first collapsed by the rule table,
    /// so "FATHER, SON" comes back as "BROTHER". A person has no relationship
    /// to themselves: `start == target` yields nothing.
    pub fn calculate_relationships(
        &self,
        start: PersonId,
        target: PersonId,
        simplified: bool,
    ) -> Vec<Relationship> {
        if start == target {
            return Vec::new();
        }

        let mut search = PathSearch {
            graph: self.graph,
            target,
            visited: HashSet::new(),
            chain: Vec::new(),
            found: Vec::new(),
        };
        search.explore(start);
        let mut found = search.found;
        debug!(
            "Found {} raw chain(s) from {start} to {target} after visiting {} people",
            found.len(),
            search.visited.len()
        );

        if simplified {
            for relationship in &mut found {
                rules::simplify(self.graph, &mut relationship.chain);
            }
        }
        select_preferred(found)
    }
}

impl PathSearch<'_> {
    fn explore(&mut self, person: PersonId) {
        if self.visited.contains(&person) {
            return;
        }
        if person == self.target {
            self.found.push(Relationship::new(self.chain.clone()));
            return;
        }
        self.visited.insert(person);

        let graph = self.graph;
        let sex = graph.sex_of(person);

        for link in graph.families_where_child(person) {
            let Ok(family) = graph.family(link.family) else {
                continue;
            };
            for (parent, name) in [
                (family.partner_a, RelationshipName::Father),
                (family.partner_b, RelationshipName::Mother),
            ] {
                if let Some(parent) = parent {
                    if !self.visited.contains(&parent) {
                        self.step(person, parent, name, name.reverse(sex));
                    }
                }
            }
        }

        for link in graph.families_where_spouse(person) {
            let Ok(family) = graph.family(link.family) else {
                continue;
            };
            let other = family.other_partner(person);
            if other.is_some_and(|other| self.visited.contains(&other)) {
                // the partner already walked this family, children included
                continue;
            }

            let is_partner_a = family.partner_a == Some(person);
            let (spouse_name, parent_name) = if is_partner_a {
                (RelationshipName::Wife, RelationshipName::Father)
            } else {
                (RelationshipName::Husband, RelationshipName::Mother)
            };
            if let Some(other) = other {
                self.step(person, other, spouse_name, spouse_name.reverse(sex));
            }

            for &child in &family.children {
                if self.visited.contains(&child) {
                    continue;
                }
                let name = RelationshipName::child_for(graph.sex_of(child));
                self.step(person, child, name, Some(parent_name));
            }
        }
    }

    fn step(
        &mut self,
        from: PersonId,
        to: PersonId,
        name: RelationshipName,
        reverse: Option<RelationshipName>,
    ) {
        self.chain
            .push(SimpleRelationship::new(from, to, name, reverse));
        self.explore(to);
        self.chain.pop();
    }
}

/// Drop duplicates, keep only the shortest chains, then only the ones with
/// the lowest total simplicity. Discovery order is kept among survivors.
pub(crate) fn select_preferred(found: Vec<Relationship>) -> Vec<Relationship> {
    let mut unique: Vec<Relationship> = Vec::with_capacity(found.len());
    for relationship in found {
        if !unique.contains(&relationship) {
            unique.push(relationship);
        }
    }

    let Some(shortest) = unique.iter().map(Relationship::len).min() else {
        return unique;
    };
    unique.retain(|r| r.len() == shortest);

    let Some(simplest) = unique.iter().map(Relationship::total_simplicity).min() else {
        return unique;
    };
    unique.retain(|r| r.total_simplicity() == simplest);
    unique
}
