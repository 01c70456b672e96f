//! Mapping, SQL generation and row reconstruction for persistence.
//!
//! Everything here is pure apart from the [`Template`] seam: mapping tables
//! are derived from registered entity descriptors, dialects render DDL, query
//! builders render DML, and the [`RowMapper`] turns result rows back into
//! entities.

pub mod criteria;
pub mod dialect;
pub mod entity;
pub mod error;
pub mod query;
pub mod row;
pub mod template;
mod tracing;

#[cfg(test)]
mod test_support;

// Re-export key types and traits
pub use criteria::{Criteria, Criterion, Operator};
pub use dialect::{Database, Dialect, DialectResolution};
pub use entity::{DomainType, Entity, EntityDescriptor, EntityMappingTable, FieldDescriptor};
pub use error::{
    DataAccessError, MappingError, PersistenceError, ReflectionError, ResolutionError, Result,
};
pub use persistence_types::{FieldType, FieldValue, SqlType, Value, ValueError};
pub use query::{DeleteQueryBuilder, InsertQueryBuilder, SelectQueryBuilder, UpdateQueryBuilder};
pub use row::{Row, RowError, RowMapper};
pub use template::Template;
