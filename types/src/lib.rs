//! Shared type definitions for persistence
//!
//! This crate provides the value-level vocabulary used across the persistence
//! crates:
//!
//! - [`FieldType`] - the Rust-side kind of a mapped entity field
//! - [`SqlType`] - the dialect-neutral column type a field maps to
//! - [`Value`] - a runtime column value read from or written to a row
//! - [`FieldValue`] - conversions between field types and [`Value`]

mod field_type;
mod sql_type;
mod value;

pub use field_type::FieldType;
pub use sql_type::SqlType;
pub use value::{FieldValue, Value, ValueError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{FieldType, FieldValue, SqlType, Value, ValueError};
}
