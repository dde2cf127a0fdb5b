//! Serializable form of a [`FamilyGraph`].
//!
//! Individuals are listed once; families point at them by xref. Loading
//! resolves every reference up front so a dangling xref fails the whole load
//! instead of surfacing as a silently missing parent later.

use crate::error::{GraphError, Result};
use crate::types::{FamilyGraph, Individual, Pedigree};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    #[serde(default)]
    pub individuals: Vec<Individual>,
    #[serde(default)]
    pub families: Vec<FamilyRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRecord {
    pub xref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_b: Option<String>,
    #[serde(default)]
    pub children: Vec<ChildRecord>,
}

/// A child reference: either a bare xref or an object carrying a pedigree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildRecord {
    Xref(String),
    Detailed {
        xref: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pedigree: Option<Pedigree>,
    },
}

impl ChildRecord {
    pub fn xref(&self) -> &str {
        match self {
            ChildRecord::Xref(xref) => xref,
            ChildRecord::Detailed { xref, .. } => xref,
        }
    }

    pub fn pedigree(&self) -> Option<Pedigree> {
        match self {
            ChildRecord::Xref(_) => None,
            ChildRecord::Detailed { pedigree, .. } => *pedigree,
        }
    }
}

impl FamilyGraph {
    pub fn from_snapshot(snapshot: &FamilySnapshot) -> Result<Self> {
        let mut graph = FamilyGraph::new();
        for individual in &snapshot.individuals {
            graph.add_individual(individual.clone())?;
        }

        for record in &snapshot.families {
            let family = graph.add_family(record.xref.clone())?;
            let resolve = |xref: &str| {
                graph
                    .find_by_xref(xref)
                    .ok_or_else(|| GraphError::unknown_reference(xref, &record.xref))
            };

            let partner_a = record.partner_a.as_deref().map(resolve).transpose()?;
            let partner_b = record.partner_b.as_deref().map(resolve).transpose()?;
            let children = record
                .children
                .iter()
                .map(|child| Ok((resolve(child.xref())?, child.pedigree())))
                .collect::<Result<Vec<_>>>()?;

            if let Some(person) = partner_a {
                graph.set_partner_a(family, person)?;
            }
            if let Some(person) = partner_b {
                graph.set_partner_b(family, person)?;
            }
            if partner_a.is_none() && partner_b.is_none() && children.is_empty() {
                warn!("Family {} has no members", record.xref);
            }
            for (child, pedigree) in children {
                graph.add_child(family, child, pedigree)?;
            }
        }

        debug!(
            "Loaded family graph: {} individuals, {} families",
            graph.individual_count(),
            graph.family_count()
        );
        Ok(graph)
    }

    pub fn to_snapshot(&self) -> FamilySnapshot {
        let xref_of = |id| {
            self.individual(id)
                .map(|individual| individual.xref.clone())
                .ok()
        };

        let individuals = self.individuals().map(|(_, ind)| ind.clone()).collect();
        let families = self
            .families()
            .map(|(family_id, family)| {
                let children = family
                    .children
                    .iter()
                    .filter_map(|&child| {
                        let xref = xref_of(child)?;
                        let pedigree = self
                            .families_where_child(child)
                            .into_iter()
                            .find(|link| link.family == family_id)
                            .and_then(|link| link.pedigree);
                        Some(match pedigree {
                            Some(pedigree) => ChildRecord::Detailed {
                                xref,
                                pedigree: Some(pedigree),
                            },
                            None => ChildRecord::Xref(xref),
                        })
                    })
                    .collect();
                FamilyRecord {
                    xref: family.xref.clone(),
                    partner_a: family.partner_a.and_then(xref_of),
                    partner_b: family.partner_b.and_then(xref_of),
                    children,
                }
            })
            .collect();

        FamilySnapshot {
            individuals,
            families,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: FamilySnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.to_snapshot())?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sex;

    #[test]
    fn test_child_record_forms() {
        let json = r#"{
            "individuals": [
                {"xref": "@I1@", "name": "Mum", "sex": "female"},
                {"xref": "@I2@", "name": "Kid"}
            ],
            "families": [
                {"xref": "@F1@", "partner_b": "@I1@",
                 "children": [{"xref": "@I2@", "pedigree": "adopted"}]}
            ]
        }"#;
        let graph = FamilyGraph::from_json_str(json).unwrap();
        let kid = graph.find_by_xref("@I2@").unwrap();
        assert_eq!(graph.sex_of(kid), Sex::Unknown);

        let links = graph.families_where_child(kid);
        assert_eq!(links[0].pedigree, Some(Pedigree::Adopted));
        let family = graph.family(links[0].family).unwrap();
        assert_eq!(family.partner_a, None);
        assert_eq!(family.partner_b, graph.find_by_xref("@I1@"));
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let json = r#"{
            "individuals": [{"xref": "@I1@", "name": "Solo", "sex": "male"}],
            "families": [{"xref": "@F1@", "partner_a": "@I1@", "children": ["@I9@"]}]
        }"#;
        let err = FamilyGraph::from_json_str(json).unwrap_err();
        assert!(matches!(err, GraphError::UnknownReference { ref xref, .. } if xref == "@I9@"));
    }
}
