mod common;

use common::struthers_family;
use kinship_graph::{Individual, Sex};
use kinship_relationship::RelationshipCalculator;
use kinship_relationship::RelationshipName::{self, *};
use pretty_assertions::assert_eq;

fn single_step(
    fx: &common::Fixture,
    from: &str,
    to: &str,
) -> (RelationshipName, Option<RelationshipName>) {
    let calc = RelationshipCalculator::new(&fx.graph);
    let found = calc.calculate_relationships(fx.person(from), fx.person(to), true);
    assert_eq!(found.len(), 1, "{from} -> {to}: {found:?}");
    let chain = &found[0].chain;
    assert_eq!(chain.len(), 1, "{from} -> {to} did not collapse: {chain:?}");
    assert_eq!(chain[0].individual1, fx.person(from));
    assert_eq!(chain[0].individual2, fx.person(to));
    (chain[0].name, chain[0].reverse)
}

#[test]
fn test_great_great_grandfather_both_ways() {
    let fx = struthers_family();
    assert_eq!(
        single_step(&fx, "Alex Zucco", "Steven Struthers"),
        (GreatGreatGrandfather, Some(GreatGreatGrandson))
    );
    assert_eq!(
        single_step(&fx, "Steven Struthers", "Alex Zucco"),
        (GreatGreatGrandson, Some(GreatGreatGrandfather))
    );
    assert_eq!(
        single_step(&fx, "Alex Zucco", "Kenneth Struthers"),
        (GreatGreatGreatGrandfather, Some(GreatGreatGreatGrandson))
    );
}

#[test]
fn test_collateral_relatives_collapse() {
    let fx = struthers_family();
    assert_eq!(
        single_step(&fx, "Alex Zucco", "Betsy Zucco"),
        (Sister, Some(Brother))
    );
    assert_eq!(
        single_step(&fx, "Alex Zucco", "Theresa Andrews"),
        (Aunt, Some(Nephew))
    );
    assert_eq!(
        single_step(&fx, "Alex Zucco", "Henry Zucco"),
        (Uncle, Some(Nephew))
    );
    assert_eq!(
        single_step(&fx, "Alex Zucco", "Olivia Zucco"),
        (FirstCousin, Some(FirstCousin))
    );
}

#[test]
fn test_unknown_sex_reverse() {
    let fx = struthers_family();
    assert_eq!(
        single_step(&fx, "Robert Andrews", "Pat Andrews"),
        (Grandchild, Some(Grandfather))
    );
    assert_eq!(
        single_step(&fx, "Pat Andrews", "Robert Andrews"),
        (Grandfather, Some(Grandchild))
    );
}

#[test]
fn test_no_relationship_with_self() {
    let fx = struthers_family();
    let calc = RelationshipCalculator::new(&fx.graph);
    let alex = fx.person("Alex Zucco");
    assert!(calc.calculate_relationships(alex, alex, true).is_empty());
    assert!(calc.calculate_relationships(alex, alex, false).is_empty());
}

#[test]
fn test_raw_chains_keep_only_the_shortest() {
    let fx = struthers_family();
    let calc = RelationshipCalculator::new(&fx.graph);

    // three raw routes reach Steven (via Sally, via Gladys, via Sammy)
    let found = calc.calculate_relationships(
        fx.person("Alex Zucco"),
        fx.person("Steven Struthers"),
        false,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].names(),
        vec![Father, Wife, Father, Father, Wife, Father]
    );
    assert_eq!(found[0].total_simplicity(), 6);

    let found = calc.calculate_relationships(
        fx.person("Alex Zucco"),
        fx.person("Betsy Zucco"),
        false,
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].names(), vec![Father, Daughter]);
    assert_eq!(found[0].chain[1].reverse, Some(Father));
}

#[test]
fn test_unrelated_people_have_no_chain() {
    let fx = struthers_family();
    let mut graph = fx.graph.clone();
    let stranger = graph
        .add_individual(Individual::new("@LONE@", "Lone Stranger", Sex::Male))
        .unwrap();
    let found = RelationshipCalculator::new(&graph).calculate_relationships(
        fx.person("Alex Zucco"),
        stranger,
        true,
    );
    assert!(found.is_empty());
}

#[test]
fn test_marriage_links_are_walked() {
    let fx = struthers_family();
    let calc = RelationshipCalculator::new(&fx.graph);
    let found = calc.calculate_relationships(fx.person("Alex Zucco"), fx.person("Zoe Olds"), true);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].names(), vec![Wife, Mother]);
    assert_eq!(found[0].chain[0].reverse, Some(Husband));
}

#[test]
fn test_describe_renders_names() {
    let fx = struthers_family();
    let calc = RelationshipCalculator::new(&fx.graph);
    let found = calc.calculate_relationships(
        fx.person("Alex Zucco"),
        fx.person("Betsy Zucco"),
        true,
    );
    assert_eq!(
        found[0].describe(&fx.graph),
        "<Alex Zucco's SISTER Betsy Zucco>, 1 step(s)"
    );
}
