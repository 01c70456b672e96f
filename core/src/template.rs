//! The execution collaborator the entity manager hands its SQL to.

use crate::error::{DataAccessError, Result};
use crate::row::Row;

/// Executes finished SQL statements against a database connection.
///
/// Implementations own the connection. Statements arrive as complete text
/// with literal values already interpolated.
pub trait Template {
    /// Product name of the connected database, e.g. `"SQLite"`.
    fn database_product_name(&self) -> &str;

    /// Runs a statement that returns no rows.
    fn execute(&self, sql: &str) -> Result<()>;

    /// Runs a query and maps every result row in order.
    fn query<T>(
        &self,
        sql: &str,
        map_row: &mut dyn FnMut(&dyn Row) -> Result<T>,
    ) -> Result<Vec<T>>;

    /// Runs a query expected to produce exactly one row.
    ///
    /// Fails with [`DataAccessError::IncorrectResultSize`] for zero or
    /// several rows.
    fn query_for_object<T>(
        &self,
        sql: &str,
        map_row: &mut dyn FnMut(&dyn Row) -> Result<T>,
    ) -> Result<T> {
        let mut rows = self.query(sql, map_row)?;
        if rows.len() != 1 {
            return Err(DataAccessError::IncorrectResultSize {
                expected: 1,
                actual: rows.len(),
            }
            .into());
        }
        rows.pop().ok_or_else(|| {
            DataAccessError::IncorrectResultSize {
                expected: 1,
                actual: 0,
            }
            .into()
        })
    }
}
