// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub offset: u64,
    #[serde(default)]
    pub array_count: u64,
}

impl Member {
    pub fn new(name: &str, type_name: &str, offset: u64) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            offset,
            array_count: 0,
        }
    }

    pub fn with_array_count(mut self, count: u64) -> Self {
        self.array_count = count;
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_count > 0
    }

    pub fn element_count(&self) -> u64 {
        self.array_count.max(1)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:x}: {}", self.name, self.offset, self.type_name)?;
        if self.is_array() {
            write!(f, "[{}]", self.array_count)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub array_count: i64,
}

impl MemberDef {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            offset: None,
            array_count: 0,
        }
    }

    pub fn at(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn array(mut self, count: i64) -> Self {
        self.array_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_display() {
        let member = Member::new("buf", "char", 16).with_array_count(32);
        assert_eq!(member.to_string(), "buf @ 0x10: char[32]");
        assert_eq!(member.element_count(), 32);
        assert_eq!(Member::new("x", "int", 0).element_count(), 1);
    }

    #[test]
    fn test_member_def_from_json() {
        let def: MemberDef = serde_json::from_str(r#"{"name": "next", "type": "ptr"}"#).unwrap();
        assert_eq!(def, MemberDef::new("next", "ptr"));

        let def: MemberDef =
            serde_json::from_str(r#"{"name": "raw", "type": "uint8_t", "offset": 4, "array_count": 12}"#)
                .unwrap();
        assert_eq!(def, MemberDef::new("raw", "uint8_t").at(4).array(12));
    }
}
