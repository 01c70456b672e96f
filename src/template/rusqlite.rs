use ::rusqlite::Connection;
use ::rusqlite::types::ValueRef;

use persistence_core::{Result, Row, RowError, Template, Value};

use crate::config::ConnectionConfig;

/// [`Template`] over a single rusqlite [`Connection`].
#[derive(Debug)]
pub struct SqliteTemplate {
    conn: Connection,
}

impl SqliteTemplate {
    pub const fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    /// Opens the configured database file, or a private in-memory database
    /// for `:memory:`.
    pub fn open(config: &ConnectionConfig) -> Result<Self> {
        if config.is_in_memory() {
            return Self::open_in_memory();
        }
        Ok(Self::new(Connection::open(&config.url)?))
    }

    /// Gets a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Template for SqliteTemplate {
    fn database_product_name(&self) -> &str {
        "SQLite"
    }

    /// Runs exactly one statement. Trailing statements are rejected with
    /// `rusqlite::Error::MultipleStatement` before anything executes.
    fn execute(&self, sql: &str) -> Result<()> {
        self.conn.execute(sql, [])?;
        Ok(())
    }

    fn query<T>(
        &self,
        sql: &str,
        map_row: &mut dyn FnMut(&dyn Row) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;

        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(map_row(&SqliteRow(row))?);
        }

        Ok(results)
    }
}

struct SqliteRow<'a, 'stmt>(&'a ::rusqlite::Row<'stmt>);

impl Row for SqliteRow<'_, '_> {
    fn value(&self, column: &str) -> std::result::Result<Value, RowError> {
        let value = self.0.get_ref(column).map_err(|error| match error {
            ::rusqlite::Error::InvalidColumnName(name) => RowError::ColumnNotFound(name),
            other => RowError::Driver(other.to_string()),
        })?;

        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(text) => core::str::from_utf8(text)
                .map(|text| Value::Text(text.to_string()))
                .map_err(|error| RowError::Driver(format!("column `{column}`: {error}")))?,
            ValueRef::Blob(blob) => Value::Blob(blob.to_vec()),
        })
    }
}
