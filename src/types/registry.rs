// Wed Jan 15 2026 - Alex

use crate::config::Config;
use crate::types::{
    Aggregate, AggregateHandle, AggregateKind, Alignment, Member, MemberDef, PointerWidth,
    PrimitiveCatalog, PrimitiveKind, TypeAlias, TypeError,
};
use ahash::RandomState;
use indexmap::IndexMap;

pub const DEFAULT_MAX_DEPTH: usize = 100;
pub const MAX_DEPTH_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    Primitive(PrimitiveKind),
    Alias(&'a TypeAlias),
    Aggregate(&'a Aggregate),
}

#[derive(Debug, Clone)]
pub struct TypeRegistry {
    catalog: PrimitiveCatalog,
    aliases: IndexMap<String, TypeAlias, RandomState>,
    aggregates: IndexMap<String, Aggregate, RandomState>,
    max_depth: usize,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::with_catalog(PrimitiveCatalog::host())
    }

    pub fn with_pointer_width(width: PointerWidth) -> Self {
        Self::with_catalog(PrimitiveCatalog::new(width))
    }

    pub fn with_catalog(catalog: PrimitiveCatalog) -> Self {
        Self {
            catalog,
            aliases: IndexMap::with_hasher(RandomState::new()),
            aggregates: IndexMap::with_hasher(RandomState::new()),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, TypeError> {
        let width = PointerWidth::try_from(config.pointer_width)?;
        Self::with_pointer_width(width).with_max_depth(config.max_depth)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self, TypeError> {
        if max_depth == 0 || max_depth > MAX_DEPTH_LIMIT {
            return Err(TypeError::InvalidDepth {
                requested: max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    pub fn catalog(&self) -> &PrimitiveCatalog {
        &self.catalog
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn default_alignment(&self) -> Alignment {
        Alignment::pointer(self.catalog.pointer_width())
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.catalog.contains(name) || self.aliases.contains_key(name) || self.aggregates.contains_key(name)
    }

    pub fn entity(&self, name: &str) -> Option<Entity<'_>> {
        if let Some(kind) = self.catalog.lookup(name) {
            return Some(Entity::Primitive(kind));
        }
        if let Some(alias) = self.aliases.get(name) {
            return Some(Entity::Alias(alias));
        }
        self.aggregates.get(name).map(Entity::Aggregate)
    }

    pub fn primitive(&self, name: &str) -> Option<PrimitiveKind> {
        self.catalog.lookup(name)
    }

    pub fn alias(&self, name: &str) -> Option<&TypeAlias> {
        self.aliases.get(name)
    }

    pub fn aggregate(&self, name: &str) -> Option<&Aggregate> {
        self.aggregates.get(name)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &TypeAlias> {
        self.aliases.values()
    }

    pub fn aggregates(&self) -> impl Iterator<Item = &Aggregate> {
        self.aggregates.values()
    }

    fn ensure_undefined(&self, name: &str) -> Result<(), TypeError> {
        if self.is_defined(name) {
            log::debug!("Rejected definition of {}: name already defined", name);
            return Err(TypeError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    pub fn define_alias(&mut self, name: &str, spelling: &str) -> Result<(), TypeError> {
        let kind = self
            .catalog
            .lookup(spelling)
            .ok_or_else(|| TypeError::UnknownReference(spelling.to_string()))?;
        self.define_alias_with(name, kind, None, None)
    }

    /// Defines `name` as an alias of `kind`. A bit size of `None` or `0`
    /// means the natural width; narrowing is allowed, widening is not.
    pub fn define_alias_with(
        &mut self,
        name: &str,
        kind: PrimitiveKind,
        bit_size: Option<u32>,
        pointee: Option<&str>,
    ) -> Result<(), TypeError> {
        let natural = self.catalog.natural_bits(kind);
        let bit_size = match bit_size {
            None | Some(0) => natural,
            Some(bits) => bits,
        };
        let mut alias = TypeAlias::new(name, kind, bit_size);
        if let Some(pointee) = pointee {
            alias = alias.with_pointee(pointee);
        }
        self.insert_alias(alias)
    }

    pub fn insert_alias(&mut self, alias: TypeAlias) -> Result<(), TypeError> {
        self.ensure_undefined(&alias.name)?;
        let natural = self.catalog.natural_bits(alias.kind);
        if alias.bit_size > natural {
            log::debug!("Rejected alias {}: {} bits exceeds {}", alias.name, alias.bit_size, natural);
            return Err(TypeError::InvalidWidth {
                name: alias.name,
                requested: alias.bit_size,
                natural,
            });
        }
        log::debug!("Defined alias {}", alias);
        self.aliases.insert(alias.name.clone(), alias);
        Ok(())
    }

    pub fn create_struct(&mut self, name: &str, alignment: Option<u64>) -> Result<AggregateHandle, TypeError> {
        self.create_aggregate(name, AggregateKind::Struct, alignment)
    }

    pub fn create_union(&mut self, name: &str, alignment: Option<u64>) -> Result<AggregateHandle, TypeError> {
        self.create_aggregate(name, AggregateKind::Union, alignment)
    }

    fn create_aggregate(
        &mut self,
        name: &str,
        kind: AggregateKind,
        alignment: Option<u64>,
    ) -> Result<AggregateHandle, TypeError> {
        let alignment = alignment
            .and_then(Alignment::new)
            .unwrap_or_else(|| self.default_alignment());
        self.insert_aggregate(Aggregate::new(name, kind, alignment))
    }

    pub fn insert_aggregate(&mut self, aggregate: Aggregate) -> Result<AggregateHandle, TypeError> {
        self.ensure_undefined(&aggregate.name)?;
        for (index, member) in aggregate.members.iter().enumerate() {
            if aggregate.members[..index].iter().any(|m| m.name == member.name) {
                return Err(TypeError::DuplicateMember {
                    aggregate: aggregate.name.clone(),
                    member: member.name.clone(),
                });
            }
        }
        log::debug!("Created {} {} (align {})", aggregate.kind, aggregate.name, aggregate.alignment);
        let handle = AggregateHandle::new(&aggregate.name, aggregate.kind);
        self.aggregates.insert(aggregate.name.clone(), aggregate);
        Ok(handle)
    }

    /// Appends a member to the named aggregate. With no explicit offset the
    /// member is placed after the aggregate's current extent, packed into
    /// the trailing alignment padding when it fits there.
    pub fn add_member(&mut self, aggregate: &str, def: MemberDef) -> Result<(), TypeError> {
        let target = self
            .aggregates
            .get(aggregate)
            .ok_or_else(|| TypeError::UnknownAggregate(aggregate.to_string()))?;
        let array_count = u64::try_from(def.array_count).map_err(|_| TypeError::InvalidArraySize {
            member: def.name.clone(),
            count: def.array_count,
        })?;
        if !self.is_defined(&def.type_name) {
            log::debug!("Rejected member {}.{}: unknown type {}", aggregate, def.name, def.type_name);
            return Err(TypeError::UnknownReference(def.type_name));
        }
        if target.contains_member(&def.name) {
            return Err(TypeError::DuplicateMember {
                aggregate: aggregate.to_string(),
                member: def.name,
            });
        }

        let offset = match def.offset {
            Some(offset) => offset,
            None => self.next_offset(target, &def.type_name)?,
        };

        let member = Member::new(&def.name, &def.type_name, offset).with_array_count(array_count);
        log::debug!("Added member {}.{}", aggregate, member);
        if let Some(target) = self.aggregates.get_mut(aggregate) {
            target.members.push(member);
        }
        Ok(())
    }

    pub fn append_member(&mut self, handle: &AggregateHandle, def: MemberDef) -> Result<(), TypeError> {
        self.add_member(handle.name(), def)
    }

    pub fn add_member_record(&mut self, aggregate: &str, member: Member) -> Result<(), TypeError> {
        let target = self
            .aggregates
            .get_mut(aggregate)
            .ok_or_else(|| TypeError::UnknownAggregate(aggregate.to_string()))?;
        if target.contains_member(&member.name) {
            return Err(TypeError::DuplicateMember {
                aggregate: aggregate.to_string(),
                member: member.name,
            });
        }
        log::debug!("Added member record {}.{}", aggregate, member);
        target.members.push(member);
        Ok(())
    }

    fn next_offset(&self, target: &Aggregate, type_name: &str) -> Result<u64, TypeError> {
        let current = self.resolve(&target.name);
        if !target.is_empty() && current.is_unresolved() {
            log::debug!("Rejected member of {}: current layout is unresolved", target.name);
            return Err(TypeError::UnresolvedLayout(target.name.clone()));
        }
        if target.is_union() {
            return Ok(0);
        }
        let element = self.size_of(type_name);
        if current.padding > 0 && element <= current.padding {
            Ok(current.size - current.padding)
        } else {
            Ok(current.size)
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
