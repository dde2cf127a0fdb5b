use crate::chain::SimpleRelationship;
use crate::name::RelationshipName::{self, *};
use kinship_graph::FamilyGraph;
use log::trace;

/// Two consecutive steps that can be stated as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplificationRule {
    pub first: RelationshipName,
    pub second: RelationshipName,
    pub collapsed: RelationshipName,
}

const fn rule(
    first: RelationshipName,
    second: RelationshipName,
    collapsed: RelationshipName,
) -> SimplificationRule {
    SimplificationRule {
        first,
        second,
        collapsed,
    }
}

/// Rewrite rules in application order. Later groups rely on the output of
/// earlier ones (uncles need siblings, cousins need uncles).
pub const SIMPLIFICATION_RULES: &[SimplificationRule] = &[
    // parents through a parent's spouse
    rule(Father, Wife, Mother),
    rule(Mother, Husband, Father),
    // siblings
    rule(Father, Son, Brother),
    rule(Mother, Son, Brother),
    rule(Father, Daughter, Sister),
    rule(Mother, Daughter, Sister),
    rule(Father, Child, Sibling),
    rule(Mother, Child, Sibling),
    // grandparents and grandchildren
    rule(Father, Father, Grandfather),
    rule(Mother, Father, Grandfather),
    rule(Father, Mother, Grandmother),
    rule(Mother, Mother, Grandmother),
    rule(Son, Son, Grandson),
    rule(Son, Daughter, Granddaughter),
    rule(Son, Child, Grandchild),
    rule(Daughter, Son, Grandson),
    rule(Daughter, Daughter, Granddaughter),
    rule(Daughter, Child, Grandchild),
    // great-grandparents and great-grandchildren
    rule(Grandfather, Father, GreatGrandfather),
    rule(Grandmother, Father, GreatGrandfather),
    rule(Grandfather, Mother, GreatGrandmother),
    rule(Grandmother, Mother, GreatGrandmother),
    rule(Grandson, Son, GreatGrandson),
    rule(Grandson, Daughter, GreatGranddaughter),
    rule(Grandson, Child, GreatGrandchild),
    rule(Granddaughter, Son, GreatGrandson),
    rule(Granddaughter, Daughter, GreatGranddaughter),
    rule(Granddaughter, Child, GreatGrandchild),
    rule(Grandchild, Son, GreatGrandson),
    rule(Grandchild, Daughter, GreatGranddaughter),
    rule(Grandchild, Child, GreatGrandchild),
    rule(Father, Grandfather, GreatGrandfather),
    rule(Mother, Grandfather, GreatGrandfather),
    rule(Father, Grandmother, GreatGrandmother),
    rule(Mother, Grandmother, GreatGrandmother),
    rule(Son, Grandson, GreatGrandson),
    rule(Son, Granddaughter, GreatGranddaughter),
    rule(Son, Grandchild, GreatGrandchild),
    rule(Daughter, Grandson, GreatGrandson),
    rule(Daughter, Granddaughter, GreatGranddaughter),
    rule(Daughter, Grandchild, GreatGrandchild),
    // great-great-grandparents and great-great-grandchildren
    rule(GreatGrandfather, Father, GreatGreatGrandfather),
    rule(GreatGrandmother, Father, GreatGreatGrandfather),
    rule(GreatGrandfather, Mother, GreatGreatGrandmother),
    rule(GreatGrandmother, Mother, GreatGreatGrandmother),
    rule(GreatGrandson, Son, GreatGreatGrandson),
    rule(GreatGrandson, Daughter, GreatGreatGranddaughter),
    rule(GreatGrandson, Child, GreatGreatGrandchild),
    rule(GreatGranddaughter, Son, GreatGreatGrandson),
    rule(GreatGranddaughter, Daughter, GreatGreatGranddaughter),
    rule(GreatGranddaughter, Child, GreatGreatGrandchild),
    rule(GreatGrandchild, Son, GreatGreatGrandson),
    rule(GreatGrandchild, Daughter, GreatGreatGranddaughter),
    rule(GreatGrandchild, Child, GreatGreatGrandchild),
    rule(Father, GreatGrandfather, GreatGreatGrandfather),
    rule(Mother, GreatGrandfather, GreatGreatGrandfather),
    rule(Father, GreatGrandmother, GreatGreatGrandmother),
    rule(Mother, GreatGrandmother, GreatGreatGrandmother),
    rule(Son, GreatGrandson, GreatGreatGrandson),
    rule(Son, GreatGranddaughter, GreatGreatGranddaughter),
    rule(Son, GreatGrandchild, GreatGreatGrandchild),
    rule(Daughter, GreatGrandson, GreatGreatGrandson),
    rule(Daughter, GreatGranddaughter, GreatGreatGranddaughter),
    rule(Daughter, GreatGrandchild, GreatGreatGrandchild),
    rule(Grandmother, Grandmother, GreatGreatGrandmother),
    rule(Grandfather, Grandmother, GreatGreatGrandmother),
    rule(Grandmother, Grandfather, GreatGreatGrandfather),
    rule(Grandfather, Grandfather, GreatGreatGrandfather),
    rule(Granddaughter, Granddaughter, GreatGreatGranddaughter),
    rule(Grandson, Granddaughter, GreatGreatGranddaughter),
    rule(Grandchild, Granddaughter, GreatGreatGranddaughter),
    rule(Granddaughter, Grandson, GreatGreatGrandson),
    rule(Grandson, Grandson, GreatGreatGrandson),
    rule(Grandchild, Grandson, GreatGreatGrandson),
    rule(Granddaughter, Grandchild, GreatGreatGrandchild),
    rule(Grandson, Grandchild, GreatGreatGrandchild),
    rule(Grandchild, Grandchild, GreatGreatGrandchild),
    // great-great-great-grandparents and great-great-great-grandchildren
    rule(GreatGrandfather, Grandfather, GreatGreatGreatGrandfather),
    rule(GreatGrandmother, Grandfather, GreatGreatGreatGrandfather),
    rule(GreatGrandfather, Grandmother, GreatGreatGreatGrandmother),
    rule(GreatGrandmother, Grandmother, GreatGreatGreatGrandmother),
    rule(GreatGrandson, Grandson, GreatGreatGreatGrandson),
    rule(GreatGrandson, Granddaughter, GreatGreatGreatGranddaughter),
    rule(GreatGrandson, Grandchild, GreatGreatGreatGrandchild),
    rule(GreatGranddaughter, Grandson, GreatGreatGreatGrandson),
    rule(GreatGranddaughter, Granddaughter, GreatGreatGreatGranddaughter),
    rule(GreatGranddaughter, Grandchild, GreatGreatGreatGrandchild),
    rule(GreatGrandchild, Grandson, GreatGreatGreatGrandson),
    rule(GreatGrandchild, Granddaughter, GreatGreatGreatGranddaughter),
    rule(GreatGrandchild, Grandchild, GreatGreatGreatGrandchild),
    rule(Grandfather, GreatGrandfather, GreatGreatGreatGrandfather),
    rule(Grandmother, GreatGrandfather, GreatGreatGreatGrandfather),
    rule(Grandfather, GreatGrandmother, GreatGreatGreatGrandmother),
    rule(Grandmother, GreatGrandmother, GreatGreatGreatGrandmother),
    rule(Grandson, GreatGrandson, GreatGreatGreatGrandson),
    rule(Grandson, GreatGranddaughter, GreatGreatGreatGranddaughter),
    rule(Grandson, GreatGrandchild, GreatGreatGreatGrandchild),
    rule(Granddaughter, GreatGrandson, GreatGreatGreatGrandson),
    rule(Granddaughter, GreatGranddaughter, GreatGreatGreatGranddaughter),
    rule(Granddaughter, GreatGrandchild, GreatGreatGreatGrandchild),
    rule(Grandchild, GreatGrandson, GreatGreatGreatGrandson),
    rule(Grandchild, GreatGranddaughter, GreatGreatGreatGranddaughter),
    rule(Grandchild, GreatGrandchild, GreatGreatGreatGrandchild),
    rule(GreatGreatGrandfather, Father, GreatGreatGreatGrandfather),
    rule(GreatGreatGrandmother, Father, GreatGreatGreatGrandfather),
    rule(GreatGreatGrandfather, Mother, GreatGreatGreatGrandmother),
    rule(GreatGreatGrandmother, Mother, GreatGreatGreatGrandmother),
    rule(GreatGreatGrandson, Son, GreatGreatGreatGrandson),
    rule(GreatGreatGrandson, Daughter, GreatGreatGreatGranddaughter),
    rule(GreatGreatGrandson, Child, GreatGreatGreatGrandchild),
    rule(GreatGreatGranddaughter, Son, GreatGreatGreatGrandson),
    rule(GreatGreatGranddaughter, Daughter, GreatGreatGreatGranddaughter),
    rule(GreatGreatGranddaughter, Child, GreatGreatGreatGrandchild),
    rule(GreatGreatGrandchild, Son, GreatGreatGreatGrandson),
    rule(GreatGreatGrandchild, Daughter, GreatGreatGreatGranddaughter),
    rule(GreatGreatGrandchild, Child, GreatGreatGreatGrandchild),
    rule(Father, GreatGreatGrandfather, GreatGreatGreatGrandfather),
    rule(Mother, GreatGreatGrandfather, GreatGreatGreatGrandfather),
    rule(Father, GreatGreatGrandmother, GreatGreatGreatGrandmother),
    rule(Mother, GreatGreatGrandmother, GreatGreatGreatGrandmother),
    rule(Son, GreatGreatGrandson, GreatGreatGreatGrandson),
    rule(Son, GreatGreatGranddaughter, GreatGreatGreatGranddaughter),
    rule(Son, GreatGreatGrandchild, GreatGreatGreatGrandchild),
    rule(Daughter, GreatGreatGrandson, GreatGreatGreatGrandson),
    rule(Daughter, GreatGreatGranddaughter, GreatGreatGreatGranddaughter),
    rule(Daughter, GreatGreatGrandchild, GreatGreatGreatGrandchild),
    // aunts, uncles, nieces, nephews
    rule(Mother, Brother, Uncle),
    rule(Father, Brother, Uncle),
    rule(Mother, Sister, Aunt),
    rule(Father, Sister, Aunt),
    rule(Brother, Son, Nephew),
    rule(Brother, Daughter, Niece),
    rule(Sister, Son, Nephew),
    rule(Sister, Daughter, Niece),
    // first cousins
    rule(Aunt, Son, FirstCousin),
    rule(Uncle, Son, FirstCousin),
    rule(Aunt, Daughter, FirstCousin),
    rule(Uncle, Daughter, FirstCousin),
    rule(Aunt, Child, FirstCousin),
    rule(Uncle, Child, FirstCousin),
    // great-aunts, great-uncles, great-nieces, great-nephews
    rule(Mother, Aunt, GreatAunt),
    rule(Father, Aunt, GreatAunt),
    rule(Grandmother, Sister, GreatAunt),
    rule(Grandfather, Sister, GreatAunt),
    rule(Mother, Uncle, GreatUncle),
    rule(Father, Uncle, GreatUncle),
    rule(Grandmother, Brother, GreatUncle),
    rule(Grandfather, Brother, GreatUncle),
    rule(Brother, Granddaughter, GreatNiece),
    rule(Sister, Granddaughter, GreatNiece),
    rule(Sibling, Granddaughter, GreatNiece),
    rule(Son, Niece, GreatNiece),
    rule(Daughter, Niece, GreatNiece),
    rule(Child, Niece, GreatNiece),
    rule(Brother, Grandson, GreatNephew),
    rule(Sister, Grandson, GreatNephew),
    rule(Sibling, Grandson, GreatNephew),
    rule(Son, Nephew, GreatNephew),
    rule(Daughter, Nephew, GreatNephew),
    rule(Child, Nephew, GreatNephew),
    // great-great-aunts, great-great-uncles, great-great-nieces, great-great-nephews
    rule(Grandfather, Uncle, GreatGreatUncle),
    rule(Grandmother, Uncle, GreatGreatUncle),
    rule(Grandfather, Aunt, GreatGreatAunt),
    rule(Grandmother, Aunt, GreatGreatAunt),
    rule(GreatGrandfather, Brother, GreatGreatUncle),
    rule(GreatGrandmother, Brother, GreatGreatUncle),
    rule(GreatGrandfather, Sister, GreatGreatAunt),
    rule(GreatGrandmother, Sister, GreatGreatAunt),
    rule(Brother, GreatGrandson, GreatGreatNephew),
    rule(Sister, GreatGrandson, GreatGreatNephew),
    rule(Sibling, GreatGrandson, GreatGreatNephew),
    rule(Brother, GreatGranddaughter, GreatGreatNiece),
    rule(Sister, GreatGranddaughter, GreatGreatNiece),
    rule(Sibling, GreatGranddaughter, GreatGreatNiece),
];

/// Apply every rule once, left to right, merging matching adjacent steps.
///
/// A merge only happens when the steps are joined at the same person and the
/// merged step has a reverse for the sex of the step's first person. After a
/// merge the scan moves on, so the freshly merged step is only revisited by
/// later rules or the next pass.
fn collapse(graph: &FamilyGraph, chain: &mut Vec<SimpleRelationship>, rule: &SimplificationRule) {
    let mut i = 0;
    while i + 1 < chain.len() {
        let (first, second) = (&chain[i], &chain[i + 1]);
        if first.name == rule.first
            && second.name == rule.second
            && first.individual2 == second.individual1
        {
            let sex = graph.sex_of(first.individual1);
            if let Some(reverse) = rule.collapsed.reverse(sex) {
                let target = second.individual2;
                trace!(
                    "collapse {} + {} -> {} at step {i}",
                    rule.first,
                    rule.second,
                    rule.collapsed
                );
                let merged = &mut chain[i];
                merged.individual2 = target;
                merged.name = rule.collapsed;
                merged.reverse = Some(reverse);
                chain.remove(i + 1);
            }
        }
        i += 1;
    }
}

/// Rewrite `chain` in place until a full pass no longer shortens it or a
/// single step remains.
pub fn simplify(graph: &FamilyGraph, chain: &mut Vec<SimpleRelationship>) {
    let mut previous = usize::MAX;
    while chain.len() > 1 {
        if chain.len() >= previous {
            return;
        }
        previous = chain.len();
        for rule in SIMPLIFICATION_RULES {
            collapse(graph, chain, rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_graph::{Individual, PersonId, Sex};
    use pretty_assertions::assert_eq;

    fn people(graph: &mut FamilyGraph, sexes: &[Sex]) -> Vec<PersonId> {
        sexes
            .iter()
            .enumerate()
            .map(|(i, &sex)| {
                graph
                    .add_individual(Individual::new(format!("@I{i}@"), format!("P{i}"), sex))
                    .unwrap()
            })
            .collect()
    }

    fn step(from: PersonId, to: PersonId, name: RelationshipName) -> SimpleRelationship {
        SimpleRelationship::new(from, to, name, None)
    }

    #[test]
    fn test_father_father_is_grandfather() {
        for (sex, expected) in [
            (Sex::Male, Grandson),
            (Sex::Female, Granddaughter),
            (Sex::Unknown, Grandchild),
        ] {
            let mut graph = FamilyGraph::new();
            let p = people(&mut graph, &[sex, Sex::Male, Sex::Male]);
            let mut chain = vec![step(p[0], p[1], Father), step(p[1], p[2], Father)];
            simplify(&graph, &mut chain);

            assert_eq!(chain.len(), 1);
            assert_eq!(chain[0].name, Grandfather);
            assert_eq!(chain[0].individual1, p[0]);
            assert_eq!(chain[0].individual2, p[2]);
            assert_eq!(chain[0].reverse, Some(expected));
        }
    }

    #[test]
    fn test_cousin_needs_several_passes() {
        let mut graph = FamilyGraph::new();
        let p = people(
            &mut graph,
            &[Sex::Male, Sex::Female, Sex::Male, Sex::Male, Sex::Female],
        );
        // me -> mother -> grandfather -> uncle -> cousin
        let mut chain = vec![
            step(p[0], p[1], Mother),
            step(p[1], p[2], Father),
            step(p[2], p[3], Son),
            step(p[3], p[4], Daughter),
        ];
        simplify(&graph, &mut chain);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].name, FirstCousin);
        assert_eq!(chain[0].reverse, Some(FirstCousin));
    }

    #[test]
    fn test_disconnected_steps_not_merged() {
        let mut graph = FamilyGraph::new();
        let p = people(&mut graph, &[Sex::Male, Sex::Male, Sex::Male, Sex::Male]);
        let mut chain = vec![step(p[0], p[1], Father), step(p[2], p[3], Father)];
        simplify(&graph, &mut chain);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_no_merge_without_reverse() {
        let mut graph = FamilyGraph::new();
        // unknown-sex start: GRANDSON has no reverse for unknown
        let p = people(&mut graph, &[Sex::Unknown, Sex::Male, Sex::Male]);
        let mut chain = vec![step(p[0], p[1], Son), step(p[1], p[2], Son)];
        simplify(&graph, &mut chain);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].name, Son);
    }

    #[test]
    fn test_rules_reach_every_great_level() {
        let collapsed: std::collections::HashSet<_> =
            SIMPLIFICATION_RULES.iter().map(|r| r.collapsed).collect();
        for name in [
            GreatGreatGreatGrandmother,
            GreatGreatGreatGrandchild,
            GreatGreatUncle,
            GreatGreatNiece,
            FirstCousin,
        ] {
            assert!(collapsed.contains(&name), "{name} unreachable");
        }
    }
}
