//! Runtime column values and the conversions entity fields go through.

use crate::FieldType;
use thiserror::Error;

/// A single column value, as read from a result row or about to be written
/// into a statement.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub enum Value {
    /// NULL value
    #[default]
    Null,
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    Boolean(bool),
    /// Text value (owned string)
    Text(String),
    /// Blob value (owned binary data)
    Blob(Vec<u8>),
}

impl Value {
    /// Returns `true` if this is [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Storage class name, used in conversion errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
            Value::Boolean(_) => "BOOLEAN",
            Value::Text(_) => "TEXT",
            Value::Blob(_) => "BLOB",
        }
    }

    /// Renders the value as an inline SQL literal.
    ///
    /// Text is wrapped in single quotes as-is. Embedded quotes are NOT
    /// escaped, so text coming from untrusted input can break out of the
    /// literal. Non-finite reals render as `NaN`/`inf`, which SQL reads as
    /// identifiers; the query builders refuse them before rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistence_types::Value;
    ///
    /// assert_eq!(Value::Integer(20).to_sql_literal(), "20");
    /// assert_eq!(Value::Text("kim".into()).to_sql_literal(), "'kim'");
    /// assert_eq!(Value::Null.to_sql_literal(), "NULL");
    /// ```
    #[must_use]
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Boolean(true) => "TRUE".to_string(),
            Value::Boolean(false) => "FALSE".to_string(),
            Value::Text(s) => format!("'{s}'"),
            Value::Blob(b) => format!("X'{}'", hex(b)),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    use core::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02X}");
    }
    out
}

/// Raw, unquoted rendering. This is the form criteria values are built from.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(b) => f.write_str(&hex(b)),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Failure assigning a [`Value`] to a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// NULL read for a field that cannot hold it
    #[error("unexpected NULL for non-optional {expected} field")]
    UnexpectedNull { expected: FieldType },

    /// The value's storage class does not fit the field
    #[error("cannot assign {found} value to {expected} field")]
    TypeMismatch {
        expected: FieldType,
        found: &'static str,
    },

    /// Integer value does not fit the narrower field type
    #[error("{value} is out of range for {expected}")]
    OutOfRange { expected: FieldType, value: i64 },
}

/// A field type that can be stored in a mapped column.
///
/// Implemented for the primitive types the SQL type table knows about, and
/// for `Option<T>` of any of them. Implement it for a newtype with
/// [`FieldType::Custom`] to carry it through the row mapper; such a field has
/// no column type and the entity cannot be mapped until it is given one.
pub trait FieldValue: Sized {
    const FIELD_TYPE: FieldType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, ValueError>;
}

fn mismatch<T>(expected: FieldType, value: &Value) -> Result<T, ValueError> {
    if value.is_null() {
        Err(ValueError::UnexpectedNull { expected })
    } else {
        Err(ValueError::TypeMismatch {
            expected,
            found: value.kind(),
        })
    }
}

macro_rules! impl_narrow_integer {
    ($($ty:ty => $kind:ident),* $(,)?) => { $(
        impl FieldValue for $ty {
            const FIELD_TYPE: FieldType = FieldType::$kind;

            fn to_value(&self) -> Value {
                Value::Integer(i64::from(*self))
            }

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::Integer(i) => <$ty>::try_from(i).map_err(|_| ValueError::OutOfRange {
                        expected: Self::FIELD_TYPE,
                        value: i,
                    }),
                    other => mismatch(Self::FIELD_TYPE, &other),
                }
            }
        }
    )* }
}

impl_narrow_integer!(i16 => I16, i32 => I32);

impl FieldValue for i64 {
    const FIELD_TYPE: FieldType = FieldType::I64;

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }
}

impl FieldValue for f64 {
    const FIELD_TYPE: FieldType = FieldType::F64;

    fn to_value(&self) -> Value {
        Value::Real(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Real(r) => Ok(r),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }
}

impl FieldValue for f32 {
    const FIELD_TYPE: FieldType = FieldType::F32;

    fn to_value(&self) -> Value {
        Value::Real(f64::from(*self))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Real(r) => Ok(r as f32),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }
}

// Drivers without a boolean storage class hand back 0/1.
impl FieldValue for bool {
    const FIELD_TYPE: FieldType = FieldType::Bool;

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Boolean(b) => Ok(b),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::Integer(i) => Err(ValueError::OutOfRange {
                expected: Self::FIELD_TYPE,
                value: i,
            }),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }
}

impl FieldValue for String {
    const FIELD_TYPE: FieldType = FieldType::String;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(s) => Ok(s),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }
}

impl FieldValue for Vec<u8> {
    const FIELD_TYPE: FieldType = FieldType::Bytes;

    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Blob(b) => Ok(b),
            other => mismatch(Self::FIELD_TYPE, &other),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
