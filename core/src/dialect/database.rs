use core::fmt;

use super::Dialect;
use crate::error::ResolutionError;

/// Database product reported by a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    H2,
    SQLite,
    MySQL,
    PostgreSQL,
}

/// Product information used to pick a dialect, as reported by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectResolution {
    database_name: String,
    major_version: Option<u32>,
}

impl DialectResolution {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            major_version: None,
        }
    }

    pub fn with_major_version(mut self, major_version: u32) -> Self {
        self.major_version = Some(major_version);
        self
    }

    #[inline]
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    #[inline]
    pub fn major_version(&self) -> Option<u32> {
        self.major_version
    }
}

struct RegistryEntry {
    database: Database,
    matches: fn(&str) -> bool,
    dialect: fn() -> Dialect,
}

static H2_ENTRY: RegistryEntry = RegistryEntry {
    database: Database::H2,
    matches: |name| name == "H2",
    dialect: || Dialect::H2,
};

static SQLITE_ENTRY: RegistryEntry = RegistryEntry {
    database: Database::SQLite,
    matches: |name| name == "SQLite",
    dialect: || Dialect::Sqlite,
};

static MYSQL_ENTRY: RegistryEntry = RegistryEntry {
    database: Database::MySQL,
    matches: |name| name == "MySQL",
    dialect: || Dialect::MySql,
};

static POSTGRES_ENTRY: RegistryEntry = RegistryEntry {
    database: Database::PostgreSQL,
    matches: |name| name == "PostgreSQL",
    dialect: || Dialect::Postgres,
};

/// Scanned in order, first match wins. Product names compare exactly.
static REGISTRY: [&RegistryEntry; 4] = [&H2_ENTRY, &SQLITE_ENTRY, &MYSQL_ENTRY, &POSTGRES_ENTRY];

impl Database {
    /// Resolves the registered database whose matcher accepts the product
    /// name.
    #[allow(clippy::should_implement_trait)]
    pub fn from(resolution: &DialectResolution) -> Result<Self, ResolutionError> {
        let entry = Self::entry_for(resolution.database_name()).ok_or_else(|| {
            ResolutionError::DialectNotFoundForProduct {
                product: resolution.database_name().to_string(),
            }
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            product = resolution.database_name(),
            major_version = ?resolution.major_version(),
            database = %entry.database,
            "persistence.dialect.resolved"
        );

        Ok(entry.database)
    }

    /// Builds the dialect registered for this database.
    pub fn dialect(&self) -> Dialect {
        (self.entry().dialect)()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Database::H2 => "H2",
            Database::SQLite => "SQLite",
            Database::MySQL => "MySQL",
            Database::PostgreSQL => "PostgreSQL",
        }
    }

    fn entry(&self) -> &'static RegistryEntry {
        match self {
            Database::H2 => &H2_ENTRY,
            Database::SQLite => &SQLITE_ENTRY,
            Database::MySQL => &MYSQL_ENTRY,
            Database::PostgreSQL => &POSTGRES_ENTRY,
        }
    }

    fn entry_for(product: &str) -> Option<&'static RegistryEntry> {
        REGISTRY.iter().copied().find(|entry| (entry.matches)(product))
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
