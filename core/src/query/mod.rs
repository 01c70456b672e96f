//! SQL text builders for DML statements.
//!
//! Builders are pure: they turn mapping metadata, criteria and entity values
//! into a complete statement string and never touch a connection. Criteria
//! columns are not checked against the table.

mod delete;
mod insert;
mod select;
mod update;

pub use delete::DeleteQueryBuilder;
pub use insert::InsertQueryBuilder;
pub use select::SelectQueryBuilder;
pub use update::UpdateQueryBuilder;

use persistence_types::Value;

use crate::criteria::Criteria;
use crate::entity::{Entity, EntityMappingTable};
use crate::error::ReflectionError;

/// Renders ` WHERE <criteria>` or nothing for empty criteria.
pub(crate) fn where_clause(criteria: Option<&Criteria>) -> String {
    match criteria {
        Some(criteria) if !criteria.is_empty() => format!(" WHERE {}", criteria.to_sql()),
        _ => String::new(),
    }
}

/// Reads every mapped column of `entity`, paired with its column name.
///
/// NaN and the infinities have no SQL literal and fail the read.
pub(crate) fn read_columns<T: Entity>(
    table: &EntityMappingTable,
    entity: &T,
) -> Result<Vec<(String, Value)>, ReflectionError> {
    let descriptor = T::descriptor();
    table
        .domain_types()
        .iter()
        .map(|domain_type| -> Result<_, ReflectionError> {
            let value = descriptor.read(entity, domain_type.name())?;
            if let Value::Real(real) = value
                && !real.is_finite()
            {
                return Err(ReflectionError::FieldReadFailed {
                    entity: descriptor.name(),
                    field: domain_type.name().to_string(),
                    reason: format!("{real} has no SQL literal"),
                });
            }
            Ok((domain_type.column_name().to_string(), value))
        })
        .collect()
}
