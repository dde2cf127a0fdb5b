use crate::error::{RelationshipError, Result};
use kinship_graph::{FamilyGraph, PersonId};
use log::debug;
use std::collections::HashSet;

/// Ancestor queries over a [`FamilyGraph`].
///
/// Every visited-set is keyed by [`PersonId`] and lives for a single call, so
/// one calculator can serve queries from several threads. The walks recurse
/// per generation, so lineage depth is bounded by the thread's stack.
#[derive(Debug, Clone, Copy)]
pub struct AncestryCalculator<'g> {
    graph: &'g FamilyGraph,
}

/// Per-call state of the lowest-common-ancestor walk.
struct LcaSearch<'a> {
    graph: &'a FamilyGraph,
    target: HashSet<PersonId>,
    checked: HashSet<PersonId>,
}

impl<'g> AncestryCalculator<'g> {
    pub fn new(graph: &'g FamilyGraph) -> Self {
        Self { graph }
    }

    /// Every ancestor of `person`, plus every spouse of each ancestor, plus
    /// those spouses' own extended ancestry. `person` is never included.
    ///
    /// A person reached along two routes is expanded only along the first.
    pub fn extended_ancestry(&self, person: PersonId) -> HashSet<PersonId> {
        let mut result = HashSet::new();
        self.add_with_ancestry(&mut result, person);
        result.remove(&person);
        result
    }

    fn add_with_ancestry(&self, result: &mut HashSet<PersonId>, person: PersonId) {
        if !result.insert(person) {
            return;
        }
        for (father, mother) in self.graph.parents_of(person) {
            for parent in father.into_iter().chain(mother) {
                for spouse in self.graph.spouses_of(parent) {
                    self.add_with_ancestry(result, spouse);
                }
                self.add_with_ancestry(result, parent);
            }
        }
    }

    /// Generations between `descendant` and `ancestor`: 1 for a parent, 2 for
    /// a grandparent and so on, 0 for the same person.
    ///
    /// Direct parents are checked before any line is climbed, then each
    /// parent line is searched in family order. The first line that reaches
    /// `ancestor` decides the count.
    pub fn generation_count(&self, descendant: PersonId, ancestor: PersonId) -> Result<u32> {
        let mut visited = HashSet::new();
        self.count_generations(descendant, ancestor, &mut visited)
            .ok_or(RelationshipError::NotAnAncestor {
                descendant,
                ancestor,
            })
    }

    fn count_generations(
        &self,
        person: PersonId,
        ancestor: PersonId,
        visited: &mut HashSet<PersonId>,
    ) -> Option<u32> {
        if person == ancestor {
            return Some(0);
        }
        if !visited.insert(person) {
            return None;
        }

        let parents = self.graph.parents_of(person);
        let is_direct_parent = parents
            .iter()
            .any(|&(father, mother)| father == Some(ancestor) || mother == Some(ancestor));
        if is_direct_parent {
            return Some(1);
        }

        for (father, mother) in parents {
            for parent in father.into_iter().chain(mother) {
                if let Some(gens) = self.count_generations(parent, ancestor, visited) {
                    return Some(gens + 1);
                }
            }
        }
        None
    }

    /// Whether `ancestor` sits somewhere above `descendant`.
    pub fn is_ancestor(&self, descendant: PersonId, ancestor: PersonId) -> bool {
        descendant != ancestor && self.generation_count(descendant, ancestor).is_ok()
    }

    /// The nearest people who are ancestors of `second` and members of the
    /// extended ancestry of `first`.
    ///
    /// Walks up from `second` one generation at a time. As soon as a line
    /// yields a common ancestor it stops climbing, so the result holds the
    /// lowest matches only; siblings get both parents back.
    pub fn lowest_common_ancestors(&self, first: PersonId, second: PersonId) -> HashSet<PersonId> {
        let mut search = LcaSearch {
            graph: self.graph,
            target: self.extended_ancestry(first),
            checked: HashSet::new(),
        };
        let mut result = HashSet::new();
        search.climb(second, &mut result);
        debug!(
            "Lowest common ancestors of {first} and {second}: {} found",
            result.len()
        );
        result
    }
}

impl LcaSearch<'_> {
    /// Returns whether anything was added for this line.
    fn climb(&mut self, person: PersonId, found: &mut HashSet<PersonId>) -> bool {
        if !self.checked.insert(person) {
            return false;
        }

        let parents: Vec<PersonId> = self
            .graph
            .parents_of(person)
            .into_iter()
            .flat_map(|(father, mother)| father.into_iter().chain(mother))
            .collect();

        let mut added = false;
        for &parent in &parents {
            if !self.checked.contains(&parent) {
                added |= self.check_parent(parent, found);
            }
        }

        if !added {
            for &parent in &parents {
                if !self.checked.contains(&parent) {
                    added |= self.climb(parent, found);
                }
            }
        }
        added
    }

    fn check_parent(&mut self, parent: PersonId, found: &mut HashSet<PersonId>) -> bool {
        if self.target.contains(&parent) {
            found.insert(parent);
            return true;
        }

        let mut added = false;
        for spouse in self.graph.spouses_of(parent) {
            if self.target.contains(&spouse) {
                found.insert(spouse);
                added = true;
            } else if !self.checked.contains(&spouse)
                && !self.graph.families_where_child(spouse).is_empty()
            {
                // common ancestors reached only through a parent's remarriage
                let mut through_spouse = HashSet::new();
                self.climb(spouse, &mut through_spouse);
                if !through_spouse.is_empty() {
                    found.extend(through_spouse);
                    added = true;
                }
            }
        }
        added
    }
}
