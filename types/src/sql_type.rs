//! Dialect-neutral column types
//!
//! Every mapped field resolves to one of these before a dialect renders it.
//! The canonical names are the ones H2 uses, which is also what a mapped
//! `DomainType` reports as its SQL type.

/// Column type of a mapped field, independent of any database product.
///
/// # Examples
///
/// ```
/// use persistence_types::SqlType;
///
/// assert_eq!(SqlType::BigInt.as_str(), "BIGINT");
/// assert!(SqlType::Integer.is_integer());
/// assert!(!SqlType::Varchar.is_integer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// 2-byte signed integer
    SmallInt,
    /// 4-byte signed integer
    Integer,
    /// 8-byte signed integer
    BigInt,
    /// single precision float
    Real,
    /// double precision float
    Double,
    Boolean,
    /// variable length character data
    Varchar,
    /// binary data
    Blob,
}

impl SqlType {
    /// Canonical upper-case type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "REAL",
            SqlType::Double => "DOUBLE",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Varchar => "VARCHAR",
            SqlType::Blob => "BLOB",
        }
    }

    /// Returns `true` for the integral types, the only ones that can back an
    /// auto-increment key.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, SqlType::SmallInt | SqlType::Integer | SqlType::BigInt)
    }
}

impl core::fmt::Display for SqlType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
