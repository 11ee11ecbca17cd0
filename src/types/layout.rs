// Wed Jan 15 2026 - Alex

use crate::types::{Aggregate, Member, TypeRegistry};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Aggregate results for one top-level resolution, keyed by name and depth.
type Memo<'a> = HashMap<(&'a str, usize), Resolved, RandomState>;

/// Size zero means unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolved {
    pub size: u64,
    pub padding: u64,
}

impl Resolved {
    pub const UNRESOLVED: Resolved = Resolved { size: 0, padding: 0 };

    fn scalar(size: u64) -> Self {
        Self { size, padding: 0 }
    }

    pub fn is_unresolved(&self) -> bool {
        self.size == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLayout {
    pub name: String,
    pub type_name: String,
    pub offset: u64,
    pub element_size: u64,
    pub array_count: u64,
}

impl MemberLayout {
    pub fn span(&self) -> u64 {
        self.element_size.saturating_mul(self.array_count.max(1))
    }

    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.span())
    }
}

impl TypeRegistry {
    pub fn size_of(&self, name: &str) -> u64 {
        self.resolve(name).size
    }

    pub fn resolve(&self, name: &str) -> Resolved {
        self.resolve_at_depth(name, 0)
    }

    /// Resolves `name` as if reached through `depth` levels of nesting.
    /// Unknown names, memberless aggregates and anything at or past the
    /// depth cap resolve to [`Resolved::UNRESOLVED`].
    pub fn resolve_at_depth(&self, name: &str, depth: usize) -> Resolved {
        let mut memo = Memo::default();
        self.resolve_memoized(name, depth, &mut memo)
    }

    fn resolve_memoized<'a>(&'a self, name: &'a str, depth: usize, memo: &mut Memo<'a>) -> Resolved {
        if depth >= self.max_depth() {
            log::warn!("Depth cap {} reached while resolving {}", self.max_depth(), name);
            return Resolved::UNRESOLVED;
        }
        if let Some(kind) = self.primitive(name) {
            return Resolved::scalar(self.catalog().byte_size(kind));
        }
        if let Some(alias) = self.alias(name) {
            return Resolved::scalar(alias.byte_size());
        }
        match self.aggregate(name) {
            Some(aggregate) if !aggregate.is_empty() => {
                if let Some(&cached) = memo.get(&(name, depth)) {
                    return cached;
                }
                let resolved = self.resolve_aggregate(aggregate, depth, memo);
                memo.insert((name, depth), resolved);
                resolved
            }
            _ => {
                log::trace!("{} has no resolvable layout", name);
                Resolved::UNRESOLVED
            }
        }
    }

    fn resolve_aggregate<'a>(&'a self, aggregate: &'a Aggregate, depth: usize, memo: &mut Memo<'a>) -> Resolved {
        let extent = if aggregate.is_union() {
            self.union_extent(aggregate, depth, memo)
        } else {
            self.struct_extent(aggregate, depth, memo)
        };
        let Some(size) = extent else {
            return Resolved::UNRESOLVED;
        };
        match aggregate.alignment.align(size) {
            Some(rounded) => {
                log::trace!("{} resolved to {} bytes ({} padding)", aggregate.name, rounded, rounded - size);
                Resolved { size: rounded, padding: rounded - size }
            }
            None => Resolved::UNRESOLVED,
        }
    }

    // Any unresolved member makes the whole union unresolved.
    fn union_extent<'a>(&'a self, aggregate: &'a Aggregate, depth: usize, memo: &mut Memo<'a>) -> Option<u64> {
        aggregate
            .members()
            .iter()
            .try_fold(0u64, |widest, member| {
                self.member_extent(member, depth, memo).map(|extent| widest.max(extent))
            })
    }

    // Only the last member counts, so explicit non-contiguous offsets size correctly.
    fn struct_extent<'a>(&'a self, aggregate: &'a Aggregate, depth: usize, memo: &mut Memo<'a>) -> Option<u64> {
        let last = aggregate.last_member()?;
        self.member_extent(last, depth, memo)?.checked_add(last.offset)
    }

    fn member_extent<'a>(&'a self, member: &'a Member, depth: usize, memo: &mut Memo<'a>) -> Option<u64> {
        let element = self.resolve_memoized(&member.type_name, depth + 1, memo).size;
        if element == 0 {
            return None;
        }
        element.checked_mul(member.element_count())
    }

    pub fn member_layouts(&self, aggregate: &str) -> Option<Vec<MemberLayout>> {
        let aggregate = self.aggregate(aggregate)?;
        let layouts = aggregate
            .members()
            .iter()
            .map(|member| MemberLayout {
                name: member.name.clone(),
                type_name: member.type_name.clone(),
                offset: member.offset,
                element_size: self.resolve_at_depth(&member.type_name, 1).size,
                array_count: member.array_count,
            })
            .collect();
        Some(layouts)
    }

    pub fn offset_of(&self, aggregate: &str, member: &str) -> Option<u64> {
        self.aggregate(aggregate)?.member(member).map(|m| m.offset)
    }
}
