// Tue Jan 13 2026 - Alex

use crate::types::PointerWidth;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte boundary an aggregate's size is rounded up to. Any positive value is
/// accepted; it need not be a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Alignment {
    value: u64,
}

impl Alignment {
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self { value })
    }

    pub fn pointer(width: PointerWidth) -> Self {
        Self { value: width.bytes() as u64 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn padding_for(&self, size: u64) -> u64 {
        match size % self.value {
            0 => 0,
            rem => self.value - rem,
        }
    }

    pub fn align(&self, size: u64) -> Option<u64> {
        size.checked_add(self.padding_for(size))
    }
}

impl TryFrom<u64> for Alignment {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "alignment must be greater than 0".to_string())
    }
}

impl From<Alignment> for u64 {
    fn from(alignment: Alignment) -> Self {
        alignment.value
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
