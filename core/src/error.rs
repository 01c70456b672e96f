use persistence_types::{FieldType, SqlType, ValueError};
use thiserror::Error;

use crate::row::RowError;

/// Entity metadata cannot be turned into a mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The entity registers no fields at all
    #[error("entity `{entity}` declares no fields")]
    NoFields { entity: String },

    /// No field is marked as the primary key
    #[error("entity `{entity}` declares no primary key")]
    NoPrimaryKeyDeclared { entity: String },

    /// More than one field is marked as the primary key
    #[error("entity `{entity}` declares more than one primary key: {fields:?}")]
    MultiplePrimaryKeys { entity: String, fields: Vec<String> },

    /// An auto-increment key whose column type is not integral
    #[error("key `{entity}.{field}` of type {sql_type} cannot be auto-incremented")]
    AutoIncrementNotInteger {
        entity: String,
        field: String,
        sql_type: SqlType,
    },

    /// A field's type has no SQL column type
    #[error("field `{entity}.{field}` has type `{field_type}` with no SQL type mapping")]
    UnsupportedFieldType {
        entity: String,
        field: String,
        field_type: FieldType,
    },
}

/// Failure going through an entity's registered constructor, accessors or
/// mutators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectionError {
    /// The entity registers no zero-argument constructor
    #[error("cannot instantiate `{entity}`: no constructor registered")]
    InstanceCreationFailed { entity: &'static str },

    /// No registered field carries the requested name
    #[error("entity `{entity}` has no field `{field}`")]
    FieldNotFound { entity: &'static str, field: String },

    /// A field was found but its value cannot be used
    #[error("cannot read field `{entity}.{field}`: {reason}")]
    FieldReadFailed {
        entity: &'static str,
        field: String,
        reason: String,
    },

    /// A row value could not be assigned to the field
    #[error("cannot set field `{entity}.{field}`")]
    FieldSetFailed {
        entity: &'static str,
        field: String,
        #[source]
        source: ValueError,
    },

    /// The row accessor failed to produce a value for the column
    #[error("invalid value for column `{column}` of `{entity}`")]
    InvalidFieldValue {
        entity: &'static str,
        column: String,
        #[source]
        source: RowError,
    },
}

/// A database product could not be resolved to a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("no dialect registered for database product `{product}`")]
    DialectNotFoundForProduct { product: String },
}

/// Errors passed through from the execution collaborator.
#[derive(Debug, Error)]
pub enum DataAccessError {
    /// A single-row query returned some other number of rows
    #[error("expected {expected} row(s), got {actual}")]
    IncorrectResultSize { expected: usize, actual: usize },

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Reflection(#[from] ReflectionError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    /// No row matched the requested primary key
    #[error("no `{entity}` found with id `{id}`")]
    NotFound { entity: &'static str, id: String },
}

#[cfg(feature = "rusqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(error: rusqlite::Error) -> Self {
        PersistenceError::DataAccess(DataAccessError::Rusqlite(error))
    }
}

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, PersistenceError>;
