//! # persistence
//!
//! A minimal metadata-driven ORM: register a struct's fields once, then
//! create tables, insert, load and delete rows without writing SQL.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::LazyLock;
//! use persistence::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Person1 {
//!     id: Option<i64>,
//!     name: String,
//!     age: i32,
//! }
//!
//! impl Entity for Person1 {
//!     fn descriptor() -> &'static EntityDescriptor<Self> {
//!         static DESCRIPTOR: LazyLock<EntityDescriptor<Person1>> = LazyLock::new(|| {
//!             EntityDescriptor::new("Person1")
//!                 .constructor(Person1::default)
//!                 .field(FieldDescriptor::new("id", |p: &Person1| &p.id, |p| &mut p.id)
//!                     .primary_key()
//!                     .auto_increment())
//!                 .field(FieldDescriptor::new("name", |p: &Person1| &p.name, |p| &mut p.name))
//!                 .field(FieldDescriptor::new("age", |p: &Person1| &p.age, |p| &mut p.age))
//!         });
//!         &DESCRIPTOR
//!     }
//! }
//!
//! # fn main() -> persistence::Result<()> {
//! let manager = EntityManager::new(SqliteTemplate::open_in_memory()?)?;
//! manager.create_table::<Person1>()?;
//! manager.persist(&Person1 { id: None, name: "kim".into(), age: 20 })?;
//!
//! let kim: Person1 = manager.find(1)?;
//! assert_eq!(kim.name, "kim");
//! # Ok(())
//! # }
//! ```
//!
//! ## Database Support
//!
//! | Database   | DDL | Template                   |
//! |------------|-----|----------------------------|
//! | H2         | yes | bring your own             |
//! | SQLite     | yes | `SqliteTemplate` (`rusqlite`) |
//! | MySQL      | yes | bring your own             |
//! | PostgreSQL | yes | bring your own             |

pub mod config;
mod manager;
mod repository;
pub mod template;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for persistence operations
pub use persistence_core::Result;

pub use config::{ConfigError, ConnectionConfig, PersistenceConfig};
pub use manager::EntityManager;
pub use repository::Repository;

#[cfg(feature = "rusqlite")]
pub use template::SqliteTemplate;

/// Error types
pub mod error {
    pub use persistence_core::error::{
        DataAccessError, MappingError, PersistenceError, ReflectionError, ResolutionError,
    };
    pub use persistence_core::row::RowError;
    pub use persistence_types::ValueError;
}

/// Entity registration and mapping metadata
pub use persistence_core::entity;

/// Dialects and the database registry
pub use persistence_core::dialect;

/// WHERE-clause predicates
pub use persistence_core::criteria;

/// SQL statement builders
pub use persistence_core::query;

/// Result rows and the row mapper
pub use persistence_core::row;

/// Value-level types shared by every crate
pub use persistence_types as types;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::config::PersistenceConfig;
    pub use crate::manager::EntityManager;
    pub use crate::repository::Repository;
    #[cfg(feature = "rusqlite")]
    pub use crate::template::SqliteTemplate;
    pub use persistence_core::{
        Criteria, Criterion, Database, Dialect, Entity, EntityDescriptor, EntityMappingTable,
        FieldDescriptor, Operator, PersistenceError, Row, Template,
    };
    pub use persistence_types::prelude::*;
}
