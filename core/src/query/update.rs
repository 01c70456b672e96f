use persistence_types::Value;

use crate::criteria::Criteria;
use crate::entity::{Entity, EntityMappingTable};
use crate::error::Result;

/// Builds an `UPDATE` writing every non-key column of one entity instance,
/// addressed by its primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQueryBuilder {
    table_name: String,
    assignments: Vec<(String, Value)>,
    criteria: Criteria,
}

impl UpdateQueryBuilder {
    #[allow(clippy::should_implement_trait)]
    pub fn from<T: Entity>(entity: &T) -> Result<Self> {
        let table = EntityMappingTable::from::<T>()?;
        Self::of(&table, entity)
    }

    pub fn of<T: Entity>(table: &EntityMappingTable, entity: &T) -> Result<Self> {
        let id = table.primary_key_value(entity)?;
        let pk_column = table.pk_domain_type().column_name();

        let assignments = super::read_columns(table, entity)?
            .into_iter()
            .filter(|(column, _)| column != pk_column)
            .collect();

        Ok(Self {
            table_name: table.table_name().to_string(),
            assignments,
            criteria: Criteria::primary_key(table, id),
        })
    }

    pub fn to_sql(&self) -> String {
        let assignments = self
            .assignments
            .iter()
            .map(|(column, value)| format!("{column} = {}", value.to_sql_literal()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {}{};",
            self.table_name,
            assignments,
            super::where_clause(Some(&self.criteria))
        )
    }
}
