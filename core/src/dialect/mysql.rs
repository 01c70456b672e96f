use persistence_types::SqlType;

use crate::entity::DomainType;

pub(super) const fn column_type(sql_type: SqlType) -> &'static str {
    match sql_type {
        SqlType::SmallInt => "SMALLINT",
        SqlType::Integer => "INT",
        SqlType::BigInt => "BIGINT",
        SqlType::Real => "FLOAT",
        SqlType::Double => "DOUBLE",
        SqlType::Boolean => "BOOLEAN",
        // MySQL requires a length on VARCHAR
        SqlType::Varchar => "VARCHAR(255)",
        SqlType::Blob => "BLOB",
    }
}

pub(super) fn primary_key(domain_type: &DomainType) -> String {
    let sql_type = column_type(domain_type.sql_type());
    if domain_type.is_auto_increment() {
        format!("{sql_type} PRIMARY KEY AUTO_INCREMENT")
    } else {
        format!("{sql_type} PRIMARY KEY")
    }
}
