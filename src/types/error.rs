// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Name already defined: {0}")]
    DuplicateName(String),
    #[error("Unknown type reference: {0}")]
    UnknownReference(String),
    #[error("Unknown aggregate: {0}")]
    UnknownAggregate(String),
    #[error("Member {member} already exists in {aggregate}")]
    DuplicateMember { aggregate: String, member: String },
    #[error("Bit size {requested} exceeds natural width {natural} of {name}")]
    InvalidWidth { name: String, requested: u32, natural: u32 },
    #[error("Invalid array size {count} for member {member}")]
    InvalidArraySize { member: String, count: i64 },
    #[error("Pointer width must be 4 or 8 bytes, got {0}")]
    InvalidPointerWidth(u32),
    #[error("Depth cap must be between 1 and {limit}, got {requested}")]
    InvalidDepth { requested: usize, limit: usize },
    #[error("Layout of {0} could not be resolved")]
    UnresolvedLayout(String),
}

impl TypeError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName(_) | Self::DuplicateMember { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownReference(_) | Self::UnknownAggregate(_))
    }
}
