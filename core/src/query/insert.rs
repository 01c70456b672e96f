use persistence_types::Value;

use crate::entity::{Entity, EntityMappingTable};
use crate::error::Result;

/// Builds an `INSERT` of every mapped column of one entity instance.
///
/// The primary key is written as supplied; a key the database generates has
/// to be left empty (`None`) on the instance, which renders `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertQueryBuilder {
    table_name: String,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl InsertQueryBuilder {
    /// Derives the mapping table of `T` and reads `entity` through it.
    #[allow(clippy::should_implement_trait)]
    pub fn from<T: Entity>(entity: &T) -> Result<Self> {
        let table = EntityMappingTable::from::<T>()?;
        Self::of(&table, entity)
    }

    /// Reads `entity` through an already derived mapping table.
    pub fn of<T: Entity>(table: &EntityMappingTable, entity: &T) -> Result<Self> {
        let (columns, values) = super::read_columns(table, entity)?.into_iter().unzip();

        Ok(Self {
            table_name: table.table_name().to_string(),
            columns,
            values,
        })
    }

    pub fn to_sql(&self) -> String {
        let values = self
            .values
            .iter()
            .map(Value::to_sql_literal)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table_name,
            self.columns.join(", "),
            values
        )
    }
}
