//! SQLite stores everything in five storage classes, so the column types
//! collapse onto their affinities.

use persistence_types::SqlType;

use crate::entity::DomainType;

pub(super) const fn column_type(sql_type: SqlType) -> &'static str {
    match sql_type {
        SqlType::SmallInt | SqlType::Integer | SqlType::BigInt | SqlType::Boolean => "INTEGER",
        SqlType::Real | SqlType::Double => "REAL",
        SqlType::Varchar => "TEXT",
        SqlType::Blob => "BLOB",
    }
}

/// `AUTOINCREMENT` is only accepted on an `INTEGER PRIMARY KEY` column.
pub(super) fn primary_key(domain_type: &DomainType) -> String {
    let sql_type = column_type(domain_type.sql_type());
    if domain_type.is_auto_increment() {
        format!("{sql_type} PRIMARY KEY AUTOINCREMENT")
    } else {
        format!("{sql_type} PRIMARY KEY")
    }
}
