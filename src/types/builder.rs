// Tue Jan 13 2026 - Alex

use crate::types::{AggregateKind, MemberDef, TypeError, TypeRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateHandle {
    name: String,
    kind: AggregateKind,
}

impl AggregateHandle {
    pub(crate) fn new(name: &str, kind: AggregateKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AggregateKind {
        self.kind
    }
}

/// Fluent member appends against one aggregate.
///
/// ```
/// use typelayout::types::{PointerWidth, TypeRegistry};
///
/// let mut registry = TypeRegistry::with_pointer_width(PointerWidth::Eight);
/// let point = registry
///     .build_struct("Point", None)?
///     .member("x", "int")?
///     .member("y", "int")?
///     .finish();
/// assert_eq!(registry.size_of(point.name()), 8);
/// # Ok::<(), typelayout::types::TypeError>(())
/// ```
pub struct AggregateBuilder<'r> {
    registry: &'r mut TypeRegistry,
    handle: AggregateHandle,
}

impl<'r> AggregateBuilder<'r> {
    pub fn new(registry: &'r mut TypeRegistry, handle: AggregateHandle) -> Self {
        Self { registry, handle }
    }

    pub fn handle(&self) -> &AggregateHandle {
        &self.handle
    }

    pub fn member(self, name: &str, type_name: &str) -> Result<Self, TypeError> {
        self.member_def(MemberDef::new(name, type_name))
    }

    pub fn member_at(self, name: &str, type_name: &str, offset: u64) -> Result<Self, TypeError> {
        self.member_def(MemberDef::new(name, type_name).at(offset))
    }

    pub fn array(self, name: &str, type_name: &str, count: i64) -> Result<Self, TypeError> {
        self.member_def(MemberDef::new(name, type_name).array(count))
    }

    pub fn member_def(self, def: MemberDef) -> Result<Self, TypeError> {
        self.registry.append_member(&self.handle, def)?;
        Ok(self)
    }

    pub fn finish(self) -> AggregateHandle {
        self.handle
    }
}

impl TypeRegistry {
    pub fn build_struct(&mut self, name: &str, alignment: Option<u64>) -> Result<AggregateBuilder<'_>, TypeError> {
        let handle = self.create_struct(name, alignment)?;
        Ok(AggregateBuilder::new(self, handle))
    }

    pub fn build_union(&mut self, name: &str, alignment: Option<u64>) -> Result<AggregateBuilder<'_>, TypeError> {
        let handle = self.create_union(name, alignment)?;
        Ok(AggregateBuilder::new(self, handle))
    }

    pub fn extend(&mut self, handle: AggregateHandle) -> AggregateBuilder<'_> {
        AggregateBuilder::new(self, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointerWidth;

    #[test]
    fn test_builder_chains_members() {
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        let handle = reg
            .build_struct("Packet", Some(4))
            .and_then(|b| b.member("kind", "uint8_t"))
            .and_then(|b| b.member("len", "uint16_t"))
            .and_then(|b| b.array("payload", "uint8_t", 6))
            .unwrap()
            .finish();

        let agg = reg.aggregate(handle.name()).unwrap();
        assert_eq!(agg.members().len(), 3);
        assert_eq!(agg.member("len").unwrap().offset, 1);
        assert_eq!(agg.member("payload").unwrap().offset, 3);
    }

    #[test]
    fn test_builder_stops_at_first_error() {
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        let failed = reg
            .build_union("Bad", None)
            .and_then(|b| b.member("a", "int"))
            .and_then(|b| b.member("a", "float"))
            .is_err();
        assert!(failed);
        assert_eq!(reg.aggregate("Bad").unwrap().members().len(), 1);
    }

    #[test]
    fn test_extend_resumes_aggregate() {
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        let handle = reg.build_struct("Pair", None).unwrap().member("a", "int").unwrap().finish();
        reg.extend(handle.clone()).member_at("b", "int", 4).unwrap();
        assert_eq!(reg.aggregate("Pair").unwrap().members().len(), 2);
        assert_eq!(handle.kind(), AggregateKind::Struct);
    }

    #[test]
    fn test_failed_creation_yields_no_handle() {
        let mut reg = TypeRegistry::with_pointer_width(PointerWidth::Eight);
        reg.create_struct("Taken", None).unwrap();
        assert!(reg.build_struct("Taken", None).is_err());
        assert!(reg.aggregate("Taken").unwrap().is_empty());
    }
}
