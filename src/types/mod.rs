// Wed Jan 15 2026 - Alex

pub mod primitive;
pub mod alias;
pub mod member;
pub mod alignment;
pub mod aggregate;
pub mod registry;
pub mod builder;
pub mod layout;
pub mod error;
pub mod serializer;
pub mod definitions;

pub use primitive::{PointerWidth, PrimitiveCatalog, PrimitiveKind};
pub use alias::TypeAlias;
pub use member::{Member, MemberDef};
pub use alignment::Alignment;
pub use aggregate::{Aggregate, AggregateKind};
pub use registry::{Entity, TypeRegistry, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use builder::{AggregateBuilder, AggregateHandle};
pub use layout::{MemberLayout, Resolved};
pub use error::TypeError;
pub use serializer::SerializableLayout;
pub use definitions::{AggregateDef, AliasDef, DefinitionError, TypeDatabase};
