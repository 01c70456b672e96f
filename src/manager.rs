use std::fmt::Display;

use persistence_core::{
    Criteria, DataAccessError, Database, DeleteQueryBuilder, Dialect, DialectResolution, Entity,
    EntityMappingTable, InsertQueryBuilder, PersistenceError, Result, Row, RowMapper,
    SelectQueryBuilder, Template, UpdateQueryBuilder, persistence_show_sql,
    persistence_trace_sql,
};

use crate::config::{ConfigError, PersistenceConfig};

/// Entry point for CRUD on registered entities.
///
/// Every operation derives the entity's mapping table, renders one statement
/// and hands it to the template. Nothing is cached between calls.
#[derive(Debug)]
pub struct EntityManager<X: Template> {
    template: X,
    dialect: Dialect,
    show_sql: bool,
}

impl<X: Template> EntityManager<X> {
    /// Resolves the dialect from the template's database product name.
    pub fn new(template: X) -> Result<Self> {
        let resolution = DialectResolution::new(template.database_product_name());
        let database = Database::from(&resolution)?;
        Ok(Self::with_dialect(template, database.dialect()))
    }

    pub fn with_dialect(template: X, dialect: Dialect) -> Self {
        Self {
            template,
            dialect,
            show_sql: false,
        }
    }

    /// Takes the dialect and statement logging from `config` instead of the
    /// template.
    pub fn from_config(
        template: X,
        config: &PersistenceConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let dialect = config.database()?.dialect();
        Ok(Self::with_dialect(template, dialect).show_sql(config.show_sql))
    }

    /// Log statements at info level instead of debug
    pub fn show_sql(mut self, show_sql: bool) -> Self {
        self.show_sql = show_sql;
        self
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub fn template(&self) -> &X {
        &self.template
    }

    pub fn find_all<T: Entity>(&self) -> Result<Vec<T>> {
        let table = EntityMappingTable::from::<T>()?;
        self.select_all(&table)
    }

    /// Loads the entity whose primary key equals `id`.
    ///
    /// Fails with [`PersistenceError::NotFound`] when no row matches.
    pub fn find<T: Entity>(&self, id: impl Display) -> Result<T> {
        let table = EntityMappingTable::from::<T>()?;
        self.select_by_id(&table, id)
    }

    /// Inserts every mapped field of `entity`. A generated key is not written
    /// back.
    pub fn persist<T: Entity>(&self, entity: &T) -> Result<()> {
        let table = EntityMappingTable::from::<T>()?;
        self.insert(&table, entity)
    }

    /// Deletes the row matching the primary key of `entity`.
    pub fn remove<T: Entity>(&self, entity: &T) -> Result<()> {
        let table = EntityMappingTable::from::<T>()?;
        let id = table.primary_key_value(entity)?;
        self.delete_by_id(&table, id)
    }

    pub fn remove_all<T: Entity>(&self) -> Result<()> {
        let table = EntityMappingTable::from::<T>()?;
        self.delete_all(&table)
    }

    /// Writes every non-key field of `entity` to the row matching its key.
    pub fn merge<T: Entity>(&self, entity: &T) -> Result<()> {
        let table = EntityMappingTable::from::<T>()?;
        let sql = UpdateQueryBuilder::of(&table, entity)?.to_sql();
        self.execute("merge", &sql)
    }

    pub fn create_table<T: Entity>(&self) -> Result<()> {
        let sql = self.dialect.create_table::<T>()?;
        self.execute("create_table", &sql)
    }

    pub fn drop_table<T: Entity>(&self) -> Result<()> {
        let sql = self.dialect.drop_table::<T>()?;
        self.execute("drop_table", &sql)
    }

    pub(crate) fn select_all<T: Entity>(&self, table: &EntityMappingTable) -> Result<Vec<T>> {
        let sql = SelectQueryBuilder::from(table).to_sql();
        self.log_sql("find_all", &sql);

        let mapper = RowMapper::<T>::new(table);
        self.template
            .query(&sql, &mut |row: &dyn Row| -> Result<T> { Ok(mapper.map_row(row)?) })
    }

    pub(crate) fn select_by_id<T: Entity>(
        &self,
        table: &EntityMappingTable,
        id: impl Display,
    ) -> Result<T> {
        let id = id.to_string();
        let criteria = Criteria::primary_key(table, &id);
        let sql = SelectQueryBuilder::of(table, &criteria).to_sql();
        self.log_sql("find", &sql);

        let mapper = RowMapper::<T>::new(table);
        let found = self
            .template
            .query_for_object(&sql, &mut |row: &dyn Row| -> Result<T> { Ok(mapper.map_row(row)?) });

        match found {
            Err(PersistenceError::DataAccess(DataAccessError::IncorrectResultSize {
                actual: 0,
                ..
            })) => Err(PersistenceError::NotFound {
                entity: T::descriptor().name(),
                id,
            }),
            other => other,
        }
    }

    pub(crate) fn insert<T: Entity>(&self, table: &EntityMappingTable, entity: &T) -> Result<()> {
        let sql = InsertQueryBuilder::of(table, entity)?.to_sql();
        self.execute("persist", &sql)
    }

    pub(crate) fn delete_by_id(&self, table: &EntityMappingTable, id: impl Display) -> Result<()> {
        let criteria = Criteria::primary_key(table, id);
        let sql = DeleteQueryBuilder::of(table.table_name(), &criteria).to_sql();
        self.execute("remove", &sql)
    }

    pub(crate) fn delete_all(&self, table: &EntityMappingTable) -> Result<()> {
        let sql = DeleteQueryBuilder::from(table.table_name()).to_sql();
        self.execute("remove_all", &sql)
    }

    fn execute(&self, op: &'static str, sql: &str) -> Result<()> {
        self.log_sql(op, sql);
        self.template.execute(sql)
    }

    fn log_sql(&self, op: &'static str, sql: &str) {
        if self.show_sql {
            persistence_show_sql!(op, sql);
        } else {
            persistence_trace_sql!(op, sql);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::sync::LazyLock;

    use persistence_core::{EntityDescriptor, FieldDescriptor, RowError, Value};

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Person1 {
        id: Option<i64>,
        name: String,
        age: i32,
    }

    impl Entity for Person1 {
        fn descriptor() -> &'static EntityDescriptor<Self> {
            static DESCRIPTOR: LazyLock<EntityDescriptor<Person1>> = LazyLock::new(|| {
                EntityDescriptor::new("Person1")
                    .constructor(Person1::default)
                    .field(
                        FieldDescriptor::new("id", |p: &Person1| &p.id, |p| &mut p.id)
                            .primary_key()
                            .auto_increment(),
                    )
                    .field(FieldDescriptor::new("name", |p: &Person1| &p.name, |p| &mut p.name))
                    .field(FieldDescriptor::new("age", |p: &Person1| &p.age, |p| &mut p.age))
            });
            &DESCRIPTOR
        }
    }

    #[derive(Debug)]
    struct Fields(HashMap<&'static str, Value>);

    impl Row for Fields {
        fn value(&self, column: &str) -> std::result::Result<Value, RowError> {
            self.0
                .get(column)
                .cloned()
                .ok_or_else(|| RowError::ColumnNotFound(column.to_string()))
        }
    }

    /// Records statements and answers every query with a fixed row set.
    #[derive(Debug)]
    struct Recording {
        product: &'static str,
        rows: Vec<Fields>,
        statements: RefCell<Vec<String>>,
    }

    impl Recording {
        fn new(product: &'static str) -> Self {
            Self {
                product,
                rows: Vec::new(),
                statements: RefCell::new(Vec::new()),
            }
        }

        fn with_person(mut self, id: i64, name: &str, age: i64) -> Self {
            self.rows.push(Fields(HashMap::from([
                ("id", Value::Integer(id)),
                ("name", Value::Text(name.to_string())),
                ("age", Value::Integer(age)),
            ])));
            self
        }

        fn statements(&self) -> Vec<String> {
            self.statements.borrow().clone()
        }
    }

    impl Template for Recording {
        fn database_product_name(&self) -> &str {
            self.product
        }

        fn execute(&self, sql: &str) -> Result<()> {
            self.statements.borrow_mut().push(sql.to_string());
            Ok(())
        }

        fn query<T>(
            &self,
            sql: &str,
            map_row: &mut dyn FnMut(&dyn Row) -> Result<T>,
        ) -> Result<Vec<T>> {
            self.statements.borrow_mut().push(sql.to_string());
            self.rows.iter().map(|row| map_row(row)).collect()
        }
    }

    #[test]
    fn test_dialect_from_product_name() {
        let manager = EntityManager::new(Recording::new("H2")).unwrap();
        assert_eq!(manager.dialect(), Dialect::H2);

        let err = EntityManager::new(Recording::new("Oracle")).unwrap_err();
        assert!(matches!(err, PersistenceError::Resolution(_)));
    }

    #[test]
    fn test_statements_handed_to_template() {
        let manager = EntityManager::new(Recording::new("H2")).unwrap();
        let person = Person1 {
            id: Some(1),
            name: "kim".to_string(),
            age: 20,
        };

        manager.create_table::<Person1>().unwrap();
        manager.persist(&person).unwrap();
        manager.merge(&person).unwrap();
        manager.remove(&person).unwrap();
        manager.remove_all::<Person1>().unwrap();

        assert_eq!(
            manager.template().statements(),
            [
                "CREATE TABLE Person1(\nid BIGINT PRIMARY KEY AUTO_INCREMENT,\nname VARCHAR,\nage INTEGER\n);",
                "INSERT INTO Person1 (id, name, age) VALUES (1, 'kim', 20);",
                "UPDATE Person1 SET name = 'kim', age = 20 WHERE id = '1';",
                "DELETE FROM Person1 WHERE id = '1';",
                "DELETE FROM Person1;",
            ]
        );
    }

    #[test]
    fn test_find_maps_single_row() {
        let manager = EntityManager::new(Recording::new("H2").with_person(1, "kim", 20)).unwrap();

        let person: Person1 = manager.find(1).unwrap();
        assert_eq!(
            person,
            Person1 {
                id: Some(1),
                name: "kim".to_string(),
                age: 20,
            }
        );
        assert_eq!(
            manager.template().statements(),
            ["SELECT * FROM Person1 WHERE id = '1';"]
        );
    }

    #[test]
    fn test_find_without_rows_is_not_found() {
        let manager = EntityManager::new(Recording::new("H2")).unwrap();

        let err = manager.find::<Person1>(42).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::NotFound { entity: "Person1", ref id } if id == "42"
        ));
    }

    #[test]
    fn test_find_with_several_rows_is_incorrect_result_size() {
        let template = Recording::new("H2")
            .with_person(1, "kim", 20)
            .with_person(1, "lee", 31);
        let manager = EntityManager::new(template).unwrap();

        let err = manager.find::<Person1>(1).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::DataAccess(DataAccessError::IncorrectResultSize {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_remove_without_key_touches_nothing() {
        let manager = EntityManager::new(Recording::new("H2")).unwrap();

        let err = manager.remove(&Person1::default()).unwrap_err();
        assert!(matches!(err, PersistenceError::Reflection(_)));
        assert!(manager.template().statements().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = PersistenceConfig::parse("database = \"PostgreSQL\"\nshow_sql = true").unwrap();
        let manager = EntityManager::from_config(Recording::new("H2"), &config).unwrap();

        assert_eq!(manager.dialect(), Dialect::Postgres);
        manager.create_table::<Person1>().unwrap();
        assert_eq!(
            manager.template().statements(),
            ["CREATE TABLE Person1(\nid BIGSERIAL PRIMARY KEY,\nname VARCHAR,\nage INTEGER\n);"]
        );
    }
}
