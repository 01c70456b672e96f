//! Result-row access and reconstruction of entities from rows.

use std::marker::PhantomData;

use persistence_types::Value;
use thiserror::Error;

use crate::entity::{Entity, EntityMappingTable};
use crate::error::ReflectionError;

/// Failure reading a column off a result row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row has no column with this name
    #[error("no such column: {0}")]
    ColumnNotFound(String),

    /// The driver failed to read the column
    #[error("driver error: {0}")]
    Driver(String),
}

/// One row of a query result, accessed by column name.
pub trait Row {
    fn value(&self, column: &str) -> Result<Value, RowError>;
}

/// Rebuilds entities of type `T` from result rows.
///
/// Every column of the mapping table is read once and assigned through the
/// entity's registered mutator. The mapper performs no conversion of its own
/// beyond what [`FieldValue`](persistence_types::FieldValue) does.
#[derive(Debug)]
pub struct RowMapper<'a, T> {
    table: &'a EntityMappingTable,
    entity: PhantomData<fn() -> T>,
}

impl<'a, T: Entity> RowMapper<'a, T> {
    pub fn new(table: &'a EntityMappingTable) -> Self {
        Self {
            table,
            entity: PhantomData,
        }
    }

    pub fn map_row(&self, row: &dyn Row) -> Result<T, ReflectionError> {
        let descriptor = T::descriptor();
        let mut instance = descriptor.instantiate()?;

        for domain_type in self.table.domain_types() {
            let field = descriptor.field_named(domain_type.name())?;

            let value = row.value(domain_type.column_name()).map_err(|source| {
                ReflectionError::InvalidFieldValue {
                    entity: descriptor.name(),
                    column: domain_type.column_name().to_string(),
                    source,
                }
            })?;

            field
                .write(&mut instance, value)
                .map_err(|source| ReflectionError::FieldSetFailed {
                    entity: descriptor.name(),
                    field: domain_type.name().to_string(),
                    source,
                })?;
        }

        Ok(instance)
    }
}
