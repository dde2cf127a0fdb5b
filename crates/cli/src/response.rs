use kinship_graph::{FamilyGraph, PersonId};
use kinship_relationship::{Relationship, RelationshipName, SimpleRelationship};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

/// Envelope printed on stdout for every command.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
}

impl CommandResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: None,
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Error,
            message: Some(message.into()),
            data: Value::Null,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == CommandStatus::Error
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PersonRef {
    pub xref: String,
    pub name: String,
}

impl PersonRef {
    pub fn new(graph: &FamilyGraph, person: PersonId) -> Self {
        match graph.individual(person) {
            Ok(individual) => Self {
                xref: individual.xref.clone(),
                name: individual.name.clone(),
            },
            Err(_) => Self {
                xref: person.to_string(),
                name: String::new(),
            },
        }
    }

    /// Sorted by xref so output does not depend on hash order.
    pub fn sorted(graph: &FamilyGraph, people: impl IntoIterator<Item = PersonId>) -> Vec<Self> {
        let mut refs: Vec<Self> = people
            .into_iter()
            .map(|person| Self::new(graph, person))
            .collect();
        refs.sort_by(|a, b| a.xref.cmp(&b.xref));
        refs
    }
}

#[derive(Debug, Serialize)]
pub struct AncestorsOutput {
    pub person: PersonRef,
    pub ancestors: Vec<PersonRef>,
}

#[derive(Debug, Serialize)]
pub struct GenerationsOutput {
    pub descendant: PersonRef,
    pub ancestor: PersonRef,
    pub generations: u32,
}

#[derive(Debug, Serialize)]
pub struct CommonAncestorsOutput {
    pub first: PersonRef,
    pub second: PersonRef,
    pub ancestors: Vec<PersonRef>,
}

#[derive(Debug, Serialize)]
pub struct StepOutput {
    pub from: String,
    pub to: String,
    pub name: RelationshipName,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<RelationshipName>,
}

impl StepOutput {
    fn new(graph: &FamilyGraph, step: &SimpleRelationship) -> Self {
        Self {
            from: PersonRef::new(graph, step.individual1).xref,
            to: PersonRef::new(graph, step.individual2).xref,
            name: step.name,
            label: step.label(),
            reverse: step.reverse,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelationshipOutput {
    pub description: String,
    pub steps: Vec<StepOutput>,
}

impl RelationshipOutput {
    pub fn new(graph: &FamilyGraph, relationship: &Relationship) -> Self {
        Self {
            description: relationship.describe(graph),
            steps: relationship
                .chain
                .iter()
                .map(|step| StepOutput::new(graph, step))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelateOutput {
    pub from: PersonRef,
    pub to: PersonRef,
    pub simplified: bool,
    pub relationships: Vec<RelationshipOutput>,
}

#[derive(Debug, Serialize)]
pub struct NameOutput {
    pub from: PersonRef,
    pub to: PersonRef,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub individuals: usize,
    pub families: usize,
}
