use crate::name::RelationshipName;
use kinship_graph::{FamilyGraph, PersonId};

/// One directed kinship step: `individual2` is `individual1`'s `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRelationship {
    pub individual1: PersonId,
    pub individual2: PersonId,
    pub name: RelationshipName,
    /// `individual1` as seen from `individual2`, when one word fits.
    pub reverse: Option<RelationshipName>,
    /// Only meaningful for cousin steps.
    pub generations_removed: u32,
}

impl SimpleRelationship {
    pub fn new(
        individual1: PersonId,
        individual2: PersonId,
        name: RelationshipName,
        reverse: Option<RelationshipName>,
    ) -> Self {
        Self {
            individual1,
            individual2,
            name,
            reverse,
            generations_removed: 0,
        }
    }

    /// `NAME`, plus a removal suffix for cousins: `FIRST_COUSIN_ONCE_REMOVED`.
    pub fn label(&self) -> String {
        match self.generations_removed {
            0 => self.name.to_string(),
            1 => format!("{}_ONCE_REMOVED", self.name),
            2 => format!("{}_TWICE_REMOVED", self.name),
            n => format!("{}_{}X_REMOVED", self.name, n),
        }
    }

    pub fn describe(&self, graph: &FamilyGraph) -> String {
        format!(
            "{}'s {} {}",
            graph.display_name(self.individual1),
            self.label(),
            graph.display_name(self.individual2)
        )
    }
}

/// An ordered chain of steps from one person to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Relationship {
    pub chain: Vec<SimpleRelationship>,
}

impl Relationship {
    pub fn new(chain: Vec<SimpleRelationship>) -> Self {
        Self { chain }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn total_simplicity(&self) -> u32 {
        self.chain.iter().map(|step| step.name.simplicity()).sum()
    }

    pub fn names(&self) -> Vec<RelationshipName> {
        self.chain.iter().map(|step| step.name).collect()
    }

    /// `<Alex's FATHER Michael, Michael's BROTHER Henry>, 2 step(s)`
    pub fn describe(&self, graph: &FamilyGraph) -> String {
        let steps: Vec<String> = self.chain.iter().map(|step| step.describe(graph)).collect();
        format!("<{}>, {} step(s)", steps.join(", "), self.chain.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_graph::{Individual, Sex};

    #[test]
    fn test_describe_chain() {
        let mut graph = FamilyGraph::new();
        let alex = graph
            .add_individual(Individual::new("@I1@", "Alex", Sex::Male))
            .unwrap();
        let michael = graph
            .add_individual(Individual::new("@I2@", "Michael", Sex::Male))
            .unwrap();
        let relationship = Relationship::new(vec![SimpleRelationship::new(
            alex,
            michael,
            RelationshipName::Father,
            Some(RelationshipName::Son),
        )]);
        assert_eq!(
            relationship.describe(&graph),
            "<Alex's FATHER Michael>, 1 step(s)"
        );
        assert_eq!(relationship.total_simplicity(), 1);
    }

    #[test]
    fn test_removed_labels() {
        let mut graph = FamilyGraph::new();
        let a = graph
            .add_individual(Individual::new("@I1@", "A", Sex::Unknown))
            .unwrap();
        let b = graph
            .add_individual(Individual::new("@I2@", "B", Sex::Unknown))
            .unwrap();
        let mut step = SimpleRelationship::new(
            a,
            b,
            RelationshipName::FirstCousin,
            Some(RelationshipName::FirstCousin),
        );
        assert_eq!(step.label(), "FIRST_COUSIN");
        step.generations_removed = 1;
        assert_eq!(step.label(), "FIRST_COUSIN_ONCE_REMOVED");
        step.generations_removed = 2;
        assert_eq!(step.label(), "FIRST_COUSIN_TWICE_REMOVED");
        step.generations_removed = 4;
        assert_eq!(step.describe(&graph), "A's FIRST_COUSIN_4X_REMOVED B");
    }
}
