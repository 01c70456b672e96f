use persistence_types::SqlType;

use crate::entity::DomainType;

pub(super) const fn column_type(sql_type: SqlType) -> &'static str {
    match sql_type {
        SqlType::SmallInt => "SMALLINT",
        SqlType::Integer => "INTEGER",
        SqlType::BigInt => "BIGINT",
        SqlType::Real => "REAL",
        SqlType::Double => "DOUBLE PRECISION",
        SqlType::Boolean => "BOOLEAN",
        SqlType::Varchar => "VARCHAR",
        SqlType::Blob => "BYTEA",
    }
}

/// Serial pseudo-type backing an auto-incremented integer key.
const fn serial_type(sql_type: SqlType) -> Option<&'static str> {
    match sql_type {
        SqlType::SmallInt => Some("SMALLSERIAL"),
        SqlType::Integer => Some("SERIAL"),
        SqlType::BigInt => Some("BIGSERIAL"),
        _ => None,
    }
}

pub(super) fn primary_key(domain_type: &DomainType) -> String {
    let sql_type = match serial_type(domain_type.sql_type()) {
        Some(serial) if domain_type.is_auto_increment() => serial,
        _ => column_type(domain_type.sql_type()),
    };
    format!("{sql_type} PRIMARY KEY")
}
