use crate::ancestry::AncestryCalculator;
use crate::naming::{relationship_key, reword, EnglishNames, NamingTable};
use kinship_graph::{FamilyGraph, PersonId};
use log::{debug, trace};

/// Names what one person is to another ("Great-Aunt", "Mother-in-Law").
pub struct KinshipNameCalculator<'g, T = EnglishNames> {
    graph: &'g FamilyGraph,
    ancestry: AncestryCalculator<'g>,
    table: T,
}

impl<'g> KinshipNameCalculator<'g, EnglishNames> {
    pub fn english(graph: &'g FamilyGraph) -> Self {
        Self::new(graph, EnglishNames)
    }
}

impl<'g, T: NamingTable> KinshipNameCalculator<'g, T> {
    pub fn new(graph: &'g FamilyGraph, table: T) -> Self {
        Self {
            graph,
            ancestry: AncestryCalculator::new(graph),
            table,
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// What `second` is to `first`, or `None` when they are unrelated or the
    /// table has no word for it.
    ///
    /// Tried in order: blood relation; `second`'s spouses as in-laws;
    /// `first`'s spouses, wrapped as "Wife's ..."; both sides' spouses.
    pub fn relationship_name(&self, first: PersonId, second: PersonId) -> Option<String> {
        let label = self.find_label(first, second)?;
        let reworded = self
            .table
            .rewordings()
            .iter()
            .fold(label, |text, (find, replace)| reword(&text, find, replace));
        debug!("{first} -> {second}: {reworded}");
        Some(reworded)
    }

    fn find_label(&self, first: PersonId, second: PersonId) -> Option<String> {
        if let Some(label) = self.lookup(first, second, false) {
            return Some(label);
        }

        let second_spouses = self.graph.spouses_of(second);
        for &spouse in &second_spouses {
            if let Some(label) = self.lookup(first, spouse, true) {
                return Some(label);
            }
        }

        let first_spouses = self.graph.spouses_of(first);
        for &spouse in &first_spouses {
            let wrapped = self
                .lookup(spouse, second, false)
                .and_then(|label| self.through_spouse(first, &label));
            if wrapped.is_some() {
                return wrapped;
            }
        }

        for &first_spouse in &first_spouses {
            for &second_spouse in &second_spouses {
                let wrapped = self
                    .lookup(first_spouse, second_spouse, true)
                    .and_then(|label| self.through_spouse(first, &label));
                if wrapped.is_some() {
                    return wrapped;
                }
            }
        }
        None
    }

    /// "Wife's Brother": `label` seen through `person`'s spouse. Both the
    /// prefix and the suffix key must exist, though either may be empty.
    fn through_spouse(&self, person: PersonId, label: &str) -> Option<String> {
        let code = self.graph.sex_of(person).code();
        let prefix = self.table.lookup(&format!("spouse.prefix.{code}"))?;
        let suffix = self.table.lookup(&format!("spouse.suffix.{code}"))?;
        let wrapped = [prefix.as_str(), label, suffix.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Some(wrapped)
    }

    /// Table label for what `b` is to `a`; with `spouse_of_b` the label names
    /// `b`'s spouse instead.
    fn lookup(&self, a: PersonId, b: PersonId, spouse_of_b: bool) -> Option<String> {
        let sex = self.graph.sex_of(b);
        if a == b {
            return self.table.lookup(&relationship_key(0, 0, sex, false));
        }

        let (g1, g2) = if let Ok(gens) = self.ancestry.generation_count(a, b) {
            (gens, 0)
        } else if let Ok(gens) = self.ancestry.generation_count(b, a) {
            (0, gens)
        } else if self.graph.is_spouse_of(a, b) {
            return self.table.lookup(&relationship_key(0, 0, sex, true));
        } else {
            self.nearest_common_ancestor(a, b)?
        };

        let key = relationship_key(g1, g2, sex, spouse_of_b);
        trace!("Looking up {key}");
        self.table.lookup(&key)
    }

    /// Generation counts to the closest shared ancestor. Candidates the
    /// ancestor walk cannot reach from both sides are skipped; ties go to
    /// the lowest id so the answer is stable.
    fn nearest_common_ancestor(&self, a: PersonId, b: PersonId) -> Option<(u32, u32)> {
        self.ancestry
            .lowest_common_ancestors(a, b)
            .into_iter()
            .filter_map(|nca| {
                let g1 = self.ancestry.generation_count(a, nca).ok()?;
                let g2 = self.ancestry.generation_count(b, nca).ok()?;
                Some((g1 + g2, nca, g1, g2))
            })
            .min()
            .map(|(_, nca, g1, g2)| {
                trace!("Nearest common ancestor of {a} and {b}: {nca}");
                (g1, g2)
            })
    }
}
