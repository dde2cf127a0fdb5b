//! Reference family shared by the integration tests.
//!
//! ```text
//! Kenneth Struthers + Wilma Wood
//!   └─ Steven Struthers + Gladys Knight
//!        ├─ Sally Struthers + James Andrews
//!        │    └─ Robert Andrews + Sylvia Jackson
//!        │         ├─ Nancy Andrews + Michael Zucco ── (George Zucco + Hannah Smith)
//!        │         │    ├─ Alex Zucco + Denise Polanski ── (Peter Polanski + Zoe Olds)
//!        │         │    ├─ Betsy Zucco
//!        │         │    └─ Charlie Zucco + Elizabeth Queen
//!        │         └─ Theresa Andrews (no partner A)
//!        │              └─ Pat Andrews (sex unknown)
//!        └─ Sammy Struthers + Roberta King
//! George Zucco + Hannah Smith
//!   ├─ Michael Zucco
//!   └─ Henry Zucco + Henrietta Holcomb
//!        └─ Olivia Zucco
//! ```

#![allow(dead_code)]

use kinship_graph::{FamilyGraph, Individual, PersonId, Sex};

pub struct Fixture {
    pub graph: FamilyGraph,
}

impl Fixture {
    pub fn person(&self, name: &str) -> PersonId {
        let matches = self.graph.find_by_name(name);
        assert_eq!(matches.len(), 1, "expected exactly one {name}");
        matches[0]
    }
}

const PEOPLE: &[(&str, &str, Sex)] = &[
    ("@KENNETH@", "Kenneth Struthers", Sex::Male),
    ("@WILMA@", "Wilma Wood", Sex::Female),
    ("@STEVEN@", "Steven Struthers", Sex::Male),
    ("@GLADYS@", "Gladys Knight", Sex::Female),
    ("@SALLY@", "Sally Struthers", Sex::Female),
    ("@SAMMY@", "Sammy Struthers", Sex::Male),
    ("@ROBERTA@", "Roberta King", Sex::Female),
    ("@JAMES@", "James Andrews", Sex::Male),
    ("@ROBERT@", "Robert Andrews", Sex::Male),
    ("@SYLVIA@", "Sylvia Jackson", Sex::Female),
    ("@NANCY@", "Nancy Andrews", Sex::Female),
    ("@THERESA@", "Theresa Andrews", Sex::Female),
    ("@PAT@", "Pat Andrews", Sex::Unknown),
    ("@GEORGE@", "George Zucco", Sex::Male),
    ("@HANNAH@", "Hannah Smith", Sex::Female),
    ("@MICHAEL@", "Michael Zucco", Sex::Male),
    ("@HENRY@", "Henry Zucco", Sex::Male),
    ("@HENRIETTA@", "Henrietta Holcomb", Sex::Female),
    ("@OLIVIA@", "Olivia Zucco", Sex::Female),
    ("@ALEX@", "Alex Zucco", Sex::Male),
    ("@BETSY@", "Betsy Zucco", Sex::Female),
    ("@CHARLIE@", "Charlie Zucco", Sex::Male),
    ("@ELIZABETH@", "Elizabeth Queen", Sex::Female),
    ("@DENISE@", "Denise Polanski", Sex::Female),
    ("@PETER@", "Peter Polanski", Sex::Male),
    ("@ZOE@", "Zoe Olds", Sex::Female),
];

/// (family, partner A, partner B, children)
const FAMILIES: &[(&str, Option<&str>, Option<&str>, &[&str])] = &[
    ("@F1@", Some("@KENNETH@"), Some("@WILMA@"), &["@STEVEN@"]),
    ("@F2@", Some("@STEVEN@"), Some("@GLADYS@"), &["@SALLY@", "@SAMMY@"]),
    ("@F3@", Some("@JAMES@"), Some("@SALLY@"), &["@ROBERT@"]),
    ("@F4@", Some("@ROBERT@"), Some("@SYLVIA@"), &["@NANCY@", "@THERESA@"]),
    ("@F5@", Some("@MICHAEL@"), Some("@NANCY@"), &["@ALEX@", "@BETSY@", "@CHARLIE@"]),
    ("@F6@", Some("@ALEX@"), Some("@DENISE@"), &[]),
    ("@F7@", Some("@PETER@"), Some("@ZOE@"), &["@DENISE@"]),
    ("@F8@", Some("@SAMMY@"), Some("@ROBERTA@"), &[]),
    ("@F9@", Some("@GEORGE@"), Some("@HANNAH@"), &["@MICHAEL@", "@HENRY@"]),
    ("@F10@", Some("@HENRY@"), Some("@HENRIETTA@"), &["@OLIVIA@"]),
    ("@F11@", Some("@CHARLIE@"), Some("@ELIZABETH@"), &[]),
    ("@F12@", None, Some("@THERESA@"), &["@PAT@"]),
];

pub fn struthers_family() -> Fixture {
    let mut graph = FamilyGraph::new();
    for &(xref, name, sex) in PEOPLE {
        graph
            .add_individual(Individual::new(xref, name, sex))
            .expect("add individual");
    }
    for &(xref, partner_a, partner_b, children) in FAMILIES {
        let family = graph.add_family(xref).expect("add family");
        let id = |xref: &str| graph.find_by_xref(xref).expect("known xref");
        let partner_a = partner_a.map(id);
        let partner_b = partner_b.map(id);
        let children: Vec<PersonId> = children.iter().map(|&c| id(c)).collect();
        if let Some(person) = partner_a {
            graph.set_partner_a(family, person).expect("partner a");
        }
        if let Some(person) = partner_b {
            graph.set_partner_b(family, person).expect("partner b");
        }
        for child in children {
            graph.add_child(family, child, None).expect("child");
        }
    }
    Fixture { graph }
}
