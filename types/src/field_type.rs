use crate::SqlType;

/// The Rust-side kind of a mapped field.
///
/// `Custom` covers user types that implement [`FieldValue`](crate::FieldValue)
/// themselves; it carries the type's name for error reporting and has no
/// column type, so mapping an entity that uses one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    String,
    Bytes,
    Custom(&'static str),
}

impl FieldType {
    /// Resolves the column type this field kind is stored as.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistence_types::{FieldType, SqlType};
    ///
    /// assert_eq!(FieldType::I64.sql_type(), Some(SqlType::BigInt));
    /// assert_eq!(FieldType::String.sql_type(), Some(SqlType::Varchar));
    /// assert_eq!(FieldType::Custom("Money").sql_type(), None);
    /// ```
    #[must_use]
    pub const fn sql_type(&self) -> Option<SqlType> {
        match self {
            FieldType::I16 => Some(SqlType::SmallInt),
            FieldType::I32 => Some(SqlType::Integer),
            FieldType::I64 => Some(SqlType::BigInt),
            FieldType::F32 => Some(SqlType::Real),
            FieldType::F64 => Some(SqlType::Double),
            FieldType::Bool => Some(SqlType::Boolean),
            FieldType::String => Some(SqlType::Varchar),
            FieldType::Bytes => Some(SqlType::Blob),
            FieldType::Custom(_) => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::Bool => "bool",
            FieldType::String => "String",
            FieldType::Bytes => "Vec<u8>",
            FieldType::Custom(name) => name,
        }
    }
}

impl core::fmt::Display for FieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
