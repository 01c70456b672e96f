use crate::criteria::Criteria;
use crate::entity::EntityMappingTable;

/// Builds a `SELECT *` over one mapped table.
#[derive(Debug, Clone, Copy)]
pub struct SelectQueryBuilder<'a> {
    table: &'a EntityMappingTable,
    criteria: Option<&'a Criteria>,
}

impl<'a> SelectQueryBuilder<'a> {
    /// Unfiltered select of every row
    #[allow(clippy::should_implement_trait)]
    pub fn from(table: &'a EntityMappingTable) -> Self {
        Self {
            table,
            criteria: None,
        }
    }

    /// Select filtered by `criteria`
    pub fn of(table: &'a EntityMappingTable, criteria: &'a Criteria) -> Self {
        Self {
            table,
            criteria: Some(criteria),
        }
    }

    pub fn to_sql(&self) -> String {
        format!(
            "SELECT * FROM {}{};",
            self.table.table_name(),
            super::where_clause(self.criteria)
        )
    }
}
