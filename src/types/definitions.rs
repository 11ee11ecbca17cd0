// Wed Jan 15 2026 - Alex

use crate::types::{AggregateKind, MemberDef, PrimitiveKind, TypeError, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Alias {0} must name exactly one of spelling or kind")]
    MalformedAlias(String),
    #[error("Definition of {name} rejected: {source}")]
    Rejected {
        name: String,
        #[source]
        source: TypeError,
    },
}

/// An alias entry. Either `spelling` names a built-in primitive, or `kind`
/// plus optional `bit_size`/`pointee` describe it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDef {
    pub name: String,
    #[serde(default)]
    pub spelling: Option<String>,
    #[serde(default)]
    pub kind: Option<PrimitiveKind>,
    #[serde(default)]
    pub bit_size: Option<u32>,
    #[serde(default)]
    pub pointee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateDef {
    pub name: String,
    pub kind: AggregateKind,
    #[serde(default)]
    pub alignment: Option<u64>,
    #[serde(default)]
    pub members: Vec<MemberDef>,
}

/// JSON type database fed to a registry by a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDatabase {
    #[serde(default)]
    pub pointer_width: Option<u32>,
    #[serde(default)]
    pub aliases: Vec<AliasDef>,
    #[serde(default)]
    pub aggregates: Vec<AggregateDef>,
}

impl TypeDatabase {
    pub fn from_json(text: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DefinitionError> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded type database {}", path.as_ref().display());
        Self::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.aliases.len() + self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies aliases, then aggregates with their members, in file order.
    /// Stops at the first rejected entry; entries applied before it stay
    /// registered. Returns the number of aliases and aggregates defined.
    pub fn apply(&self, registry: &mut TypeRegistry) -> Result<usize, DefinitionError> {
        for alias in &self.aliases {
            apply_alias(alias, registry)?;
        }
        for aggregate in &self.aggregates {
            apply_aggregate(aggregate, registry)?;
        }
        log::info!("Applied {} definitions", self.len());
        Ok(self.len())
    }
}

fn rejected(name: &str) -> impl FnOnce(TypeError) -> DefinitionError + '_ {
    move |source| DefinitionError::Rejected {
        name: name.to_string(),
        source,
    }
}

fn apply_alias(alias: &AliasDef, registry: &mut TypeRegistry) -> Result<(), DefinitionError> {
    match (&alias.spelling, alias.kind) {
        (Some(spelling), None) if alias.bit_size.is_none() && alias.pointee.is_none() => registry
            .define_alias(&alias.name, spelling)
            .map_err(rejected(&alias.name)),
        (None, Some(kind)) => registry
            .define_alias_with(&alias.name, kind, alias.bit_size, alias.pointee.as_deref())
            .map_err(rejected(&alias.name)),
        (Some(spelling), None) => {
            let kind = registry
                .primitive(spelling)
                .ok_or_else(|| TypeError::UnknownReference(spelling.clone()))
                .map_err(rejected(&alias.name))?;
            registry
                .define_alias_with(&alias.name, kind, alias.bit_size, alias.pointee.as_deref())
                .map_err(rejected(&alias.name))
        }
        _ => Err(DefinitionError::MalformedAlias(alias.name.clone())),
    }
}

fn apply_aggregate(aggregate: &AggregateDef, registry: &mut TypeRegistry) -> Result<(), DefinitionError> {
    let handle = match aggregate.kind {
        AggregateKind::Struct => registry.create_struct(&aggregate.name, aggregate.alignment),
        AggregateKind::Union => registry.create_union(&aggregate.name, aggregate.alignment),
    }
    .map_err(rejected(&aggregate.name))?;

    for member in &aggregate.members {
        let qualified = format!("{}.{}", aggregate.name, member.name);
        registry
            .append_member(&handle, member.clone())
            .map_err(rejected(&qualified))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointerWidth;

    const SAMPLE: &str = r#"{
        "pointer_width": 8,
        "aliases": [
            { "name": "u32", "spelling": "uint32_t" },
            { "name": "status_t", "kind": "uint16", "bit_size": 12 },
            { "name": "list_ptr", "kind": "pointer", "pointee": "List" },
            { "name": "short_ptr", "spelling": "ptr", "bit_size": 32 }
        ],
        "aggregates": [
            {
                "name": "List",
                "kind": "struct",
                "members": [
                    { "name": "count", "type": "u32" },
                    { "name": "status", "type": "status_t" },
                    { "name": "next", "type": "list_ptr" }
                ]
            },
            {
                "name": "Word",
                "kind": "union",
                "alignment": 2,
                "members": [
                    { "name": "raw", "type": "uint8_t", "array_count": 3 },
                    { "name": "half", "type": "uint16_t" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_apply_sample_database() {
        let db = TypeDatabase::from_json(SAMPLE).unwrap();
        assert_eq!(db.pointer_width, Some(8));
        assert_eq!(db.len(), 6);

        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        assert_eq!(db.apply(&mut reg).unwrap(), 6);

        assert_eq!(reg.size_of("status_t"), 2);
        assert_eq!(reg.size_of("short_ptr"), 4);
        assert_eq!(reg.offset_of("List", "status"), Some(4));
        assert_eq!(reg.offset_of("List", "next"), Some(8));
        assert_eq!(reg.size_of("List"), 16);
        assert_eq!(reg.size_of("Word"), 4);
    }

    #[test]
    fn test_apply_stops_at_rejected_entry() {
        let text = r#"{
            "aliases": [
                { "name": "a", "spelling": "int" },
                { "name": "a", "spelling": "char" },
                { "name": "b", "spelling": "char" }
            ]
        }"#;
        let db = TypeDatabase::from_json(text).unwrap();
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        let err = db.apply(&mut reg).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::Rejected { ref name, source: TypeError::DuplicateName(_) } if name == "a"
        ));
        assert!(reg.is_defined("a"));
        assert!(!reg.is_defined("b"));
    }

    #[test]
    fn test_rejected_member_is_qualified() {
        let text = r#"{
            "aggregates": [
                { "name": "S", "kind": "struct", "members": [ { "name": "x", "type": "nope" } ] }
            ]
        }"#;
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        let err = TypeDatabase::from_json(text).unwrap().apply(&mut reg).unwrap_err();
        assert_eq!(err.to_string(), "Definition of S.x rejected: Unknown type reference: nope");
    }

    #[test]
    fn test_malformed_alias() {
        let text = r#"{ "aliases": [ { "name": "x", "spelling": "int", "kind": "int32" } ] }"#;
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        let err = TypeDatabase::from_json(text).unwrap().apply(&mut reg).unwrap_err();
        assert!(matches!(err, DefinitionError::MalformedAlias(_)));

        assert!(matches!(TypeDatabase::from_json("{ not json"), Err(DefinitionError::Parse(_))));
        assert!(TypeDatabase::from_json("{}").unwrap().is_empty());
    }
}
