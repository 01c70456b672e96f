//! SQL dialects and the database registry resolving them.
//!
//! A [`Dialect`] renders the DDL of a mapping table. Each variant owns its
//! column type names and primary key phrasing; the statement layout is shared.
//!
//! ```
//! use persistence_core::dialect::{Database, Dialect, DialectResolution};
//!
//! let database = Database::from(&DialectResolution::new("H2")).unwrap();
//! assert_eq!(database.dialect(), Dialect::H2);
//! assert_eq!(Dialect::H2.drop_table_sql("Person1"), "DROP TABLE IF EXISTS Person1;");
//! ```

mod database;
mod h2;
mod mysql;
mod postgres;
mod sqlite;

pub use database::{Database, DialectResolution};

use core::fmt;

use persistence_types::SqlType;

use crate::entity::{DomainType, Entity, EntityMappingTable};
use crate::error::MappingError;

/// SQL dialect used to render DDL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    H2,
    Sqlite,
    MySql,
    Postgres,
}

impl Dialect {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Dialect::H2 => "H2",
            Dialect::Sqlite => "SQLite",
            Dialect::MySql => "MySQL",
            Dialect::Postgres => "PostgreSQL",
        }
    }

    /// Column type name of `sql_type` in this dialect.
    #[must_use]
    pub const fn column_type(&self, sql_type: SqlType) -> &'static str {
        match self {
            Dialect::H2 => h2::column_type(sql_type),
            Dialect::Sqlite => sqlite::column_type(sql_type),
            Dialect::MySql => mysql::column_type(sql_type),
            Dialect::Postgres => postgres::column_type(sql_type),
        }
    }

    /// Derives the mapping table of `T` and renders its `CREATE TABLE`.
    pub fn create_table<T: Entity>(&self) -> Result<String, MappingError> {
        let table = EntityMappingTable::from::<T>()?;
        Ok(self.create_table_sql(&table))
    }

    /// Renders `CREATE TABLE <name>(\n<column>,\n...\n);` with one line per
    /// column in declaration order.
    pub fn create_table_sql(&self, table: &EntityMappingTable) -> String {
        let columns = table
            .domain_types()
            .iter()
            .map(|domain_type| self.column_definition(domain_type))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("CREATE TABLE {}(\n{}\n);", table.table_name(), columns)
    }

    pub fn drop_table<T: Entity>(&self) -> Result<String, MappingError> {
        let table = EntityMappingTable::from::<T>()?;
        Ok(self.drop_table_sql(table.table_name()))
    }

    pub fn drop_table_sql(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {table_name};")
    }

    fn column_definition(&self, domain_type: &DomainType) -> String {
        let column = domain_type.column_name();

        if domain_type.is_primary_key() {
            let definition = match self {
                Dialect::H2 => h2::primary_key(domain_type),
                Dialect::Sqlite => sqlite::primary_key(domain_type),
                Dialect::MySql => mysql::primary_key(domain_type),
                Dialect::Postgres => postgres::primary_key(domain_type),
            };
            return format!("{column} {definition}");
        }

        let sql_type = self.column_type(domain_type.sql_type());
        if domain_type.is_nullable() {
            format!("{column} {sql_type}")
        } else {
            format!("{column} {sql_type} NOT NULL")
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
