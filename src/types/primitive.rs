// Wed Jan 15 2026 - Alex

use crate::types::TypeError;
use ahash::RandomState;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    /// Signed integer as wide as a target pointer.
    Dsint,
    /// Unsigned integer as wide as a target pointer.
    Duint,
    Pointer,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 13] = [
        PrimitiveKind::Int8,
        PrimitiveKind::Uint8,
        PrimitiveKind::Int16,
        PrimitiveKind::Uint16,
        PrimitiveKind::Int32,
        PrimitiveKind::Uint32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint64,
        PrimitiveKind::Dsint,
        PrimitiveKind::Duint,
        PrimitiveKind::Pointer,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    pub fn natural_bits(self, pointer_width: PointerWidth) -> u32 {
        match self {
            PrimitiveKind::Int8 | PrimitiveKind::Uint8 => 8,
            PrimitiveKind::Int16 | PrimitiveKind::Uint16 => 16,
            PrimitiveKind::Int32 | PrimitiveKind::Uint32 | PrimitiveKind::Float => 32,
            PrimitiveKind::Int64 | PrimitiveKind::Uint64 | PrimitiveKind::Double => 64,
            PrimitiveKind::Dsint | PrimitiveKind::Duint | PrimitiveKind::Pointer => pointer_width.bits(),
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self,
            PrimitiveKind::Int8 | PrimitiveKind::Int16 | PrimitiveKind::Int32 |
            PrimitiveKind::Int64 | PrimitiveKind::Dsint
        )
    }

    pub fn is_floating(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    pub fn is_pointer_sized(self) -> bool {
        matches!(self, PrimitiveKind::Dsint | PrimitiveKind::Duint | PrimitiveKind::Pointer)
    }

    pub fn canonical_spelling(self) -> &'static str {
        match self {
            PrimitiveKind::Int8 => "int8_t",
            PrimitiveKind::Uint8 => "uint8_t",
            PrimitiveKind::Int16 => "int16_t",
            PrimitiveKind::Uint16 => "uint16_t",
            PrimitiveKind::Int32 => "int32_t",
            PrimitiveKind::Uint32 => "uint32_t",
            PrimitiveKind::Int64 => "int64_t",
            PrimitiveKind::Uint64 => "uint64_t",
            PrimitiveKind::Dsint => "dsint",
            PrimitiveKind::Duint => "duint",
            PrimitiveKind::Pointer => "ptr",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_spelling())
    }
}

const SPELLINGS: &[(PrimitiveKind, &[&str])] = &[
    (PrimitiveKind::Int8, &["int8_t", "int8", "char", "byte", "bool", "signed char"]),
    (PrimitiveKind::Uint8, &["uint8_t", "uint8", "uchar", "unsigned char", "ubyte"]),
    (PrimitiveKind::Int16, &["int16_t", "int16", "wchar_t", "char16_t", "short"]),
    (PrimitiveKind::Uint16, &["uint16_t", "uint16", "ushort", "unsigned short"]),
    (PrimitiveKind::Int32, &["int32_t", "int32", "int", "long"]),
    (PrimitiveKind::Uint32, &["uint32_t", "uint32", "unsigned int", "unsigned long"]),
    (PrimitiveKind::Int64, &["int64_t", "int64", "long long"]),
    (PrimitiveKind::Uint64, &["uint64_t", "uint64", "unsigned long long"]),
    (PrimitiveKind::Dsint, &["dsint"]),
    (PrimitiveKind::Duint, &["duint", "size_t"]),
    (PrimitiveKind::Pointer, &["ptr", "void*"]),
    (PrimitiveKind::Float, &["float"]),
    (PrimitiveKind::Double, &["double"]),
];

static BUILTIN_SPELLINGS: Lazy<IndexMap<&'static str, PrimitiveKind, RandomState>> = Lazy::new(|| {
    let mut table = IndexMap::with_hasher(RandomState::new());
    for (kind, names) in SPELLINGS {
        for name in names.iter() {
            table.insert(*name, *kind);
        }
    }
    table
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerWidth {
    Four,
    Eight,
}

impl PointerWidth {
    pub fn host() -> Self {
        match std::mem::size_of::<usize>() {
            4 => PointerWidth::Four,
            _ => PointerWidth::Eight,
        }
    }

    pub fn bytes(self) -> u32 {
        match self {
            PointerWidth::Four => 4,
            PointerWidth::Eight => 8,
        }
    }

    pub fn bits(self) -> u32 {
        self.bytes() * 8
    }
}

impl TryFrom<u32> for PointerWidth {
    type Error = TypeError;

    fn try_from(bytes: u32) -> Result<Self, Self::Error> {
        match bytes {
            4 => Ok(PointerWidth::Four),
            8 => Ok(PointerWidth::Eight),
            other => Err(TypeError::InvalidPointerWidth(other)),
        }
    }
}

impl fmt::Display for PointerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveCatalog {
    pointer_width: PointerWidth,
}

impl PrimitiveCatalog {
    pub fn new(pointer_width: PointerWidth) -> Self {
        Self { pointer_width }
    }

    pub fn host() -> Self {
        Self::new(PointerWidth::host())
    }

    pub fn pointer_width(&self) -> PointerWidth {
        self.pointer_width
    }

    pub fn lookup(&self, spelling: &str) -> Option<PrimitiveKind> {
        BUILTIN_SPELLINGS.get(spelling).copied()
    }

    pub fn contains(&self, spelling: &str) -> bool {
        BUILTIN_SPELLINGS.contains_key(spelling)
    }

    pub fn natural_bits(&self, kind: PrimitiveKind) -> u32 {
        kind.natural_bits(self.pointer_width)
    }

    pub fn byte_size(&self, kind: PrimitiveKind) -> u64 {
        (self.natural_bits(kind) / 8) as u64
    }

    pub fn spellings(&self) -> impl Iterator<Item = (&'static str, PrimitiveKind)> + '_ {
        BUILTIN_SPELLINGS.iter().map(|(name, kind)| (*name, *kind))
    }
}

impl Default for PrimitiveCatalog {
    fn default() -> Self {
        Self::host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_lookup() {
        let catalog = PrimitiveCatalog::new(PointerWidth::Eight);
        assert_eq!(catalog.lookup("char"), Some(PrimitiveKind::Int8));
        assert_eq!(catalog.lookup("bool"), Some(PrimitiveKind::Int8));
        assert_eq!(catalog.lookup("unsigned short"), Some(PrimitiveKind::Uint16));
        assert_eq!(catalog.lookup("size_t"), Some(PrimitiveKind::Duint));
        assert_eq!(catalog.lookup("void*"), Some(PrimitiveKind::Pointer));
        assert_eq!(catalog.lookup("long double"), None);
    }

    #[test]
    fn test_every_kind_has_canonical_spelling() {
        let catalog = PrimitiveCatalog::new(PointerWidth::Eight);
        for kind in PrimitiveKind::ALL {
            assert_eq!(catalog.lookup(kind.canonical_spelling()), Some(kind));
        }
    }

    #[test]
    fn test_pointer_width_drives_native_kinds() {
        let wide = PrimitiveCatalog::new(PointerWidth::Eight);
        let narrow = PrimitiveCatalog::new(PointerWidth::Four);
        assert_eq!(wide.byte_size(PrimitiveKind::Pointer), 8);
        assert_eq!(narrow.byte_size(PrimitiveKind::Pointer), 4);
        assert_eq!(narrow.natural_bits(PrimitiveKind::Dsint), 32);
        assert_eq!(narrow.byte_size(PrimitiveKind::Int64), 8);
        assert_eq!(narrow.byte_size(PrimitiveKind::Double), 8);
    }

    #[test]
    fn test_pointer_width_accepts_only_four_or_eight() {
        assert_eq!(PointerWidth::try_from(4), Ok(PointerWidth::Four));
        assert_eq!(PointerWidth::try_from(8), Ok(PointerWidth::Eight));
        for bytes in [0, 1, 3, 16, u32::MAX / 4, u32::MAX] {
            assert_eq!(PointerWidth::try_from(bytes), Err(TypeError::InvalidPointerWidth(bytes)));
        }
        assert_eq!(PointerWidth::Eight.bits(), 64);
    }

    #[test]
    fn test_kind_classification() {
        assert!(PrimitiveKind::Dsint.is_signed());
        assert!(!PrimitiveKind::Duint.is_signed());
        assert!(PrimitiveKind::Float.is_floating());
        assert!(PrimitiveKind::Pointer.is_pointer_sized());
        assert_eq!(PrimitiveKind::Uint32.to_string(), "uint32_t");
    }
}
