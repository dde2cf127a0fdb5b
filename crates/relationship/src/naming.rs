//! Label tables for the kinship namer.
//!
//! Keys follow one scheme regardless of where the words come from:
//!
//! ```text
//! relationship.<gens from A>.<gens from B>.<sex of B>[.spouse]
//! spouse.prefix.<sex>      spouse.suffix.<sex>
//! rewording.<anything>  =  <find>|<replace>
//! ```
//!
//! Sex codes are `m`, `f` and `u`.

use crate::error::{RelationshipError, Result};
use kinship_graph::Sex;
use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Source of kinship labels. A missing key means "no label", never an error.
pub trait NamingTable {
    fn lookup(&self, key: &str) -> Option<String>;

    /// `(find, replace)` pairs applied to every finished label, in order.
    fn rewordings(&self) -> Vec<(String, String)>;
}

/// `relationship.<g1>.<g2>.<sex>[.spouse]`
pub fn relationship_key(gens_from_a: u32, gens_from_b: u32, sex: Sex, spouse: bool) -> String {
    let mut key = format!("relationship.{gens_from_a}.{gens_from_b}.{}", sex.code());
    if spouse {
        key.push_str(".spouse");
    }
    key
}

/// Replace every occurrence of `find`. When `find` ends in a word character
/// a match must also end the word, so "Husband's Sister" does not rewrite the
/// front of "Husband's Sister-in-Law"; a `find` ending in a space or
/// punctuation is a plain substring replacement.
pub fn reword(text: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return text.to_string();
    }
    let needs_word_end = find.chars().last().is_some_and(is_word_char);
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(find) {
        let end = pos + find.len();
        let at_word_end = !needs_word_end || !rest[end..].chars().next().is_some_and(is_word_char);
        out.push_str(&rest[..pos]);
        out.push_str(if at_word_end { replace } else { find });
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

/// Properties-file table: `key=value` or `key: value` lines, `#` and
/// `!` comments. Entry order is kept so rewordings apply in file order.
#[derive(Debug, Clone, Default)]
pub struct PropertiesTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PropertiesTable {
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::default();
        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let (key, value) = match line.find(['=', ':']) {
                Some(pos) => (line[..pos].trim(), line[pos + 1..].trim()),
                None => (line, ""),
            };
            if key.is_empty() {
                return Err(RelationshipError::naming_table(format!(
                    "line {}: missing key",
                    line_no + 1
                )));
            }
            table.insert(key, value);
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Later values for the same key replace earlier ones in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NamingTable for PropertiesTable {
    fn lookup(&self, key: &str) -> Option<String> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.clone())
    }

    fn rewordings(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.starts_with("rewording."))
            .filter_map(|(key, value)| match value.split_once('|') {
                Some((find, replace)) => Some((find.to_string(), replace.to_string())),
                None => {
                    warn!("Ignoring rewording {key}: expected find|replace");
                    None
                }
            })
            .collect()
    }
}

static ENGLISH_REWORDINGS: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    let mut pairs = Vec::new();
    for possessive in ["Husband's", "Wife's", "Spouse's"] {
        for (blood, in_law) in [
            ("Father", "Father-in-Law"),
            ("Mother", "Mother-in-Law"),
            ("Parent", "Parent-in-Law"),
            ("Brother", "Brother-in-Law"),
            ("Sister", "Sister-in-Law"),
            ("Sibling", "Sibling-in-Law"),
            ("Son", "Stepson"),
            ("Daughter", "Stepdaughter"),
            ("Child", "Stepchild"),
        ] {
            pairs.push((format!("{possessive} {blood}"), in_law.to_string()));
        }
    }
    pairs
});

/// Built-in English labels, computed for any generation pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn gendered(sex: Sex, male: &str, female: &str, unknown: &str) -> String {
    match sex {
        Sex::Male => male,
        Sex::Female => female,
        Sex::Unknown => unknown,
    }
    .to_string()
}

fn opposite(sex: Sex) -> Sex {
    match sex {
        Sex::Male => Sex::Female,
        Sex::Female => Sex::Male,
        Sex::Unknown => Sex::Unknown,
    }
}

/// "Great-" repeated for the first two extra levels, then "3rd Great-" style.
fn great_prefix(extra: u32) -> String {
    match extra {
        0 => String::new(),
        1 => "Great-".to_string(),
        2 => "Great-Great-".to_string(),
        n => format!("{} Great-", ordinal(n)),
    }
}

fn ancestor(gens: u32, sex: Sex) -> String {
    match gens {
        1 => gendered(sex, "Father", "Mother", "Parent"),
        n => format!(
            "{}{}",
            great_prefix(n - 2),
            gendered(sex, "Grandfather", "Grandmother", "Grandparent")
        ),
    }
}

fn descendant(gens: u32, sex: Sex) -> String {
    match gens {
        1 => gendered(sex, "Son", "Daughter", "Child"),
        n => format!(
            "{}{}",
            great_prefix(n - 2),
            gendered(sex, "Grandson", "Granddaughter", "Grandchild")
        ),
    }
}

fn uncle(gens: u32, sex: Sex) -> String {
    format!(
        "{}{}",
        great_prefix(gens - 2),
        gendered(sex, "Uncle", "Aunt", "Aunt/Uncle")
    )
}

fn nephew(gens: u32, sex: Sex) -> String {
    format!(
        "{}{}",
        great_prefix(gens - 2),
        gendered(sex, "Nephew", "Niece", "Nephew/Niece")
    )
}

fn cousin(g1: u32, g2: u32) -> String {
    let degree = g1.min(g2) - 1;
    let removed = g1.abs_diff(g2);
    match removed {
        0 => format!("{} Cousin", ordinal(degree)),
        1 => format!("{} Cousin 1 time removed", ordinal(degree)),
        r => format!("{} Cousin {r} times removed", ordinal(degree)),
    }
}

impl EnglishNames {
    /// Label for what B is to A, or for B's spouse when `spouse` is set.
    pub fn label(&self, g1: u32, g2: u32, sex: Sex, spouse: bool) -> String {
        let blood = match (g1, g2) {
            (0, 0) => "Self".to_string(),
            (n, 0) => ancestor(n, sex),
            (0, n) => descendant(n, sex),
            (1, 1) => gendered(sex, "Brother", "Sister", "Sibling"),
            (n, 1) => uncle(n, sex),
            (1, n) => nephew(n, sex),
            (a, b) => cousin(a, b),
        };
        if !spouse {
            return blood;
        }

        let partner = opposite(sex);
        match (g1, g2) {
            (0, 0) => gendered(sex, "Husband", "Wife", "Spouse"),
            (1, 0) => gendered(sex, "Stepmother", "Stepfather", "Step-Parent"),
            (n, 0) => format!("Step-{}", ancestor(n, partner)),
            (0, n) => format!("{}-in-Law", descendant(n, partner)),
            (1, 1) => format!("{}-in-Law", gendered(partner, "Brother", "Sister", "Sibling")),
            (n, 1) => uncle(n, partner),
            _ => format!("{blood}'s {}", gendered(sex, "Wife", "Husband", "Spouse")),
        }
    }
}

impl NamingTable for EnglishNames {
    fn lookup(&self, key: &str) -> Option<String> {
        let mut parts = key.split('.');
        match parts.next()? {
            "relationship" => {
                let g1 = parts.next()?.parse().ok()?;
                let g2 = parts.next()?.parse().ok()?;
                let sex = Sex::from_code(parts.next()?);
                let spouse = match parts.next() {
                    None => false,
                    Some("spouse") => true,
                    Some(_) => return None,
                };
                if parts.next().is_some() {
                    return None;
                }
                Some(self.label(g1, g2, sex, spouse))
            }
            "spouse" => match (parts.next()?, parts.next()?) {
                ("prefix", code) => Some(gendered(
                    Sex::from_code(code),
                    "Wife's",
                    "Husband's",
                    "Spouse's",
                )),
                ("suffix", _) => Some(String::new()),
                _ => None,
            },
            _ => None,
        }
    }

    fn rewordings(&self) -> Vec<(String, String)> {
        ENGLISH_REWORDINGS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 103]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "103rd"]
        );
    }

    #[test]
    fn test_english_blood_labels() {
        let names = EnglishNames;
        let cases = [
            ("relationship.0.0.m", "Self"),
            ("relationship.1.0.f", "Mother"),
            ("relationship.2.0.u", "Grandparent"),
            ("relationship.4.0.m", "Great-Great-Grandfather"),
            ("relationship.5.0.m", "3rd Great-Grandfather"),
            ("relationship.0.3.f", "Great-Granddaughter"),
            ("relationship.1.1.u", "Sibling"),
            ("relationship.3.1.f", "Great-Aunt"),
            ("relationship.1.2.u", "Nephew/Niece"),
            ("relationship.2.2.m", "1st Cousin"),
            ("relationship.3.2.f", "1st Cousin 1 time removed"),
            ("relationship.5.3.m", "2nd Cousin 2 times removed"),
        ];
        for (key, expected) in cases {
            assert_eq!(names.lookup(key).as_deref(), Some(expected), "{key}");
        }
    }

    #[test]
    fn test_english_spouse_labels() {
        let names = EnglishNames;
        let cases = [
            ("relationship.0.0.f.spouse", "Wife"),
            ("relationship.1.0.m.spouse", "Stepmother"),
            ("relationship.2.0.f.spouse", "Step-Grandfather"),
            ("relationship.0.1.m.spouse", "Daughter-in-Law"),
            ("relationship.0.2.f.spouse", "Grandson-in-Law"),
            ("relationship.1.1.m.spouse", "Sister-in-Law"),
            ("relationship.2.1.m.spouse", "Aunt"),
            ("relationship.1.2.f.spouse", "Niece's Husband"),
            ("spouse.prefix.m", "Wife's"),
            ("spouse.suffix.f", ""),
        ];
        for (key, expected) in cases {
            assert_eq!(names.lookup(key).as_deref(), Some(expected), "{key}");
        }
        assert_eq!(names.lookup("relationship.x.1.m"), None);
        assert_eq!(names.lookup("relationship.1.1.m.other"), None);
        assert_eq!(names.lookup("unknown"), None);
    }

    #[test]
    fn test_reword_respects_word_end() {
        assert_eq!(
            reword("Husband's Sister", "Husband's Sister", "Sister-in-Law"),
            "Sister-in-Law"
        );
        assert_eq!(
            reword("Husband's Sister-in-Law", "Husband's Sister", "Sister-in-Law"),
            "Husband's Sister-in-Law"
        );
        assert_eq!(reword("Wife's Son", "Wife's Son", "Stepson"), "Stepson");
        assert_eq!(reword("Wife's Sons", "Wife's Son", "Stepson"), "Wife's Sons");
        assert_eq!(reword("abc", "", "x"), "abc");
    }

    #[test]
    fn test_reword_plain_substring_when_find_ends_in_space() {
        assert_eq!(
            reword("Wife's Brother", "Wife's ", "Spouse's "),
            "Spouse's Brother"
        );
        assert_eq!(
            reword("Wife's Wife's Sister", "Wife's ", "Spouse's "),
            "Spouse's Spouse's Sister"
        );
        assert_eq!(reword("Step-Father", "Step-", "Step "), "Step Father");
    }

    #[test]
    fn test_properties_parse() {
        let table = PropertiesTable::parse(
            "# comment\n\
             ! also a comment\n\
             relationship.1.0.m = Papa\n\
             relationship.1.0.f: Mama\n\
             rewording.1=Wife's Papa|Schwiegervater\n\
             rewording.2=broken\n\
             relationship.1.0.m=Vater\n",
        )
        .unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("relationship.1.0.m").as_deref(), Some("Vater"));
        assert_eq!(table.lookup("relationship.1.0.f").as_deref(), Some("Mama"));
        assert_eq!(table.lookup("relationship.9.9.m"), None);
        assert_eq!(
            table.rewordings(),
            vec![("Wife's Papa".to_string(), "Schwiegervater".to_string())]
        );
    }

    #[test]
    fn test_properties_missing_key() {
        let err = PropertiesTable::parse("=value").unwrap_err();
        assert!(matches!(err, RelationshipError::NamingTable(_)));
    }
}
