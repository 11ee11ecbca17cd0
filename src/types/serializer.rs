// Tue Jan 13 2026 - Alex

use crate::types::{AggregateKind, MemberLayout, TypeRegistry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableLayout {
    name: String,
    kind: AggregateKind,
    size: u64,
    padding: u64,
    alignment: u64,
    members: Vec<MemberLayout>,
}

impl SerializableLayout {
    pub fn capture(registry: &TypeRegistry, name: &str) -> Option<Self> {
        let aggregate = registry.aggregate(name)?;
        let resolved = registry.resolve(name);
        Some(Self {
            name: aggregate.name.clone(),
            kind: aggregate.kind,
            size: resolved.size,
            padding: resolved.padding,
            alignment: aggregate.alignment.as_u64(),
            members: registry.member_layouts(name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn members(&self) -> &[MemberLayout] {
        &self.members
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MemberDef, PointerWidth};

    #[test]
    fn test_capture_layout() {
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        reg.create_struct("Pair", None).unwrap();
        reg.add_member("Pair", MemberDef::new("key", "int")).unwrap();
        reg.add_member("Pair", MemberDef::new("value", "double")).unwrap();

        let layout = SerializableLayout::capture(&reg, "Pair").unwrap();
        assert_eq!(layout.size(), 16);
        assert_eq!(layout.members()[1].offset, 8);

        let json = layout.to_json(false).unwrap();
        assert!(json.contains(r#""kind":"struct""#));
        assert!(json.contains(r#""name":"value""#));
        let back: SerializableLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }

    #[test]
    fn test_capture_requires_aggregate() {
        let reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        assert!(SerializableLayout::capture(&reg, "int").is_none());
    }
}
