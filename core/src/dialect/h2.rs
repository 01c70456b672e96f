use persistence_types::SqlType;

use crate::entity::DomainType;

pub(super) const fn column_type(sql_type: SqlType) -> &'static str {
    sql_type.as_str()
}

pub(super) fn primary_key(domain_type: &DomainType) -> String {
    let sql_type = column_type(domain_type.sql_type());
    if domain_type.is_auto_increment() {
        format!("{sql_type} PRIMARY KEY AUTO_INCREMENT")
    } else {
        format!("{sql_type} PRIMARY KEY")
    }
}
