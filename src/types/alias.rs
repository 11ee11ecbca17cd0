// Wed Jan 15 2026 - Alex

use crate::types::PrimitiveKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    pub kind: PrimitiveKind,
    pub bit_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointee: Option<String>,
}

impl TypeAlias {
    pub fn new(name: &str, kind: PrimitiveKind, bit_size: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            bit_size,
            pointee: None,
        }
    }

    pub fn with_pointee(mut self, pointee: &str) -> Self {
        self.pointee = Some(pointee.to_string());
        self
    }

    pub fn byte_size(&self) -> u64 {
        (self.bit_size as u64).div_ceil(8)
    }

    pub fn is_pointer(&self) -> bool {
        self.pointee.is_some() || self.kind == PrimitiveKind::Pointer
    }
}

impl fmt::Display for TypeAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}:{}", self.name, self.kind, self.bit_size)?;
        if let Some(ref pointee) = self.pointee {
            write!(f, " -> {}", pointee)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_size_rounds_up() {
        assert_eq!(TypeAlias::new("flags", PrimitiveKind::Uint32, 12).byte_size(), 2);
        assert_eq!(TypeAlias::new("half", PrimitiveKind::Int32, 16).byte_size(), 2);
        assert_eq!(TypeAlias::new("bit", PrimitiveKind::Uint8, 1).byte_size(), 1);
    }

    #[test]
    fn test_alias_display() {
        let alias = TypeAlias::new("node_ptr", PrimitiveKind::Pointer, 64).with_pointee("Node");
        assert!(alias.is_pointer());
        assert_eq!(alias.to_string(), "node_ptr = ptr:64 -> Node");
    }
}
