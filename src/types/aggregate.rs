// Wed Jan 15 2026 - Alex

use crate::types::{Alignment, Member};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Struct,
    Union,
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateKind::Struct => write!(f, "struct"),
            AggregateKind::Union => write!(f, "union"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub name: String,
    pub kind: AggregateKind,
    pub alignment: Alignment,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Aggregate {
    pub fn new(name: &str, kind: AggregateKind, alignment: Alignment) -> Self {
        Self {
            name: name.to_string(),
            kind,
            alignment,
            members: Vec::new(),
        }
    }

    pub fn new_struct(name: &str, alignment: Alignment) -> Self {
        Self::new(name, AggregateKind::Struct, alignment)
    }

    pub fn new_union(name: &str, alignment: Alignment) -> Self {
        Self::new(name, AggregateKind::Union, alignment)
    }

    pub fn is_union(&self) -> bool {
        self.kind == AggregateKind::Union
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn last_member(&self) -> Option<&Member> {
        self.members.last()
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn contains_member(&self, name: &str) -> bool {
        self.member(name).is_some()
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (align {}) {{ {} }}",
            self.kind,
            self.name,
            self.alignment,
            self.members.iter().join(", ")
        )
    }
}
