use persistence_types::SqlType;

/// Schema facts about one mapped field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainType {
    name: String,
    column_name: String,
    sql_type: SqlType,
    primary_key: bool,
    nullable: bool,
    auto_increment: bool,
}

impl DomainType {
    /// A plain, nullable, non-key column whose name matches the field name.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        let name = name.into();
        Self {
            column_name: name.clone(),
            name,
            sql_type,
            primary_key: false,
            nullable: true,
            auto_increment: false,
        }
    }

    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Marks this column as the primary key. Keys are not nullable.
    pub fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable && !self.primary_key;
        self
    }

    pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    /// Field name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    #[inline]
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }
}
