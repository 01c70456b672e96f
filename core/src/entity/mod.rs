//! Entity registration and the metadata derived from it.
//!
//! Entities are plain structs. Instead of discovering fields at runtime, each
//! entity registers an [`EntityDescriptor`] once: its simple name, a
//! zero-argument constructor, and one [`FieldDescriptor`] per mapped field
//! carrying an accessor/mutator pair.
//!
//! ```
//! use std::sync::LazyLock;
//! use persistence_core::entity::{Entity, EntityDescriptor, FieldDescriptor};
//!
//! #[derive(Debug, Default)]
//! struct Person1 {
//!     id: Option<i64>,
//!     name: String,
//!     age: i32,
//! }
//!
//! impl Entity for Person1 {
//!     fn descriptor() -> &'static EntityDescriptor<Self> {
//!         static DESCRIPTOR: LazyLock<EntityDescriptor<Person1>> = LazyLock::new(|| {
//!             EntityDescriptor::new("Person1")
//!                 .constructor(Person1::default)
//!                 .field(FieldDescriptor::new("id", |p: &Person1| &p.id, |p| &mut p.id)
//!                     .primary_key()
//!                     .auto_increment())
//!                 .field(FieldDescriptor::new("name", |p: &Person1| &p.name, |p| &mut p.name))
//!                 .field(FieldDescriptor::new("age", |p: &Person1| &p.age, |p| &mut p.age))
//!         });
//!         &DESCRIPTOR
//!     }
//! }
//!
//! assert_eq!(Person1::descriptor().name(), "Person1");
//! assert_eq!(Person1::descriptor().fields().len(), 3);
//! ```

mod domain_type;
mod mapping_table;

pub use domain_type::DomainType;
pub use mapping_table::EntityMappingTable;

use persistence_types::{FieldType, FieldValue, Value, ValueError};

use crate::error::ReflectionError;

/// A type mapped to a table.
pub trait Entity: Sized + 'static {
    /// The registered mapping for this type. Implementations return a
    /// process-wide static, built once.
    fn descriptor() -> &'static EntityDescriptor<Self>;
}

type Reader<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;
type Writer<T> = Box<dyn Fn(&mut T, Value) -> Result<(), ValueError> + Send + Sync>;

/// One mapped field of `T`.
pub struct FieldDescriptor<T> {
    name: &'static str,
    column: Option<&'static str>,
    field_type: FieldType,
    primary_key: bool,
    auto_increment: bool,
    nullable: bool,
    read: Reader<T>,
    write: Writer<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// Registers a field from a pair of projections onto it.
    ///
    /// The field type is taken from `V`. Fields are nullable unless marked
    /// otherwise; primary keys never are.
    pub fn new<V>(name: &'static str, get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V) -> Self
    where
        V: FieldValue + 'static,
    {
        Self {
            name,
            column: None,
            field_type: V::FIELD_TYPE,
            primary_key: false,
            auto_increment: false,
            nullable: true,
            read: Box::new(move |entity: &T| get(entity).to_value()),
            write: Box::new(move |entity: &mut T, value: Value| {
                *get_mut(entity) = V::from_value(value)?;
                Ok(())
            }),
        }
    }
}

impl<T> FieldDescriptor<T> {
    /// Marks this field as the primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Marks the key as generated by the database
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Stores the field under a column name other than the field name
    pub fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn column_name(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }

    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[inline]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    #[inline]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Reads the field's current value off `entity`.
    pub fn read(&self, entity: &T) -> Value {
        (self.read)(entity)
    }

    /// Assigns `value` to the field on `entity`.
    pub fn write(&self, entity: &mut T, value: Value) -> Result<(), ValueError> {
        (self.write)(entity, value)
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("column", &self.column_name())
            .field("field_type", &self.field_type)
            .field("primary_key", &self.primary_key)
            .field("auto_increment", &self.auto_increment)
            .field("nullable", &self.nullable)
            .finish()
    }
}

/// The registered mapping of an entity type: simple name, constructor and
/// fields in declaration order.
pub struct EntityDescriptor<T> {
    name: &'static str,
    constructor: Option<fn() -> T>,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> EntityDescriptor<T> {
    /// Starts a descriptor for the entity with the given simple name. The
    /// name doubles as the table name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            constructor: None,
            fields: Vec::new(),
        }
    }

    /// Registers the zero-argument constructor the row mapper instantiates
    /// through.
    pub fn constructor(mut self, constructor: fn() -> T) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Appends a field. Registration order is column order.
    pub fn field(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Looks up a field by its field name.
    pub fn field_named(&self, name: &str) -> Result<&FieldDescriptor<T>, ReflectionError> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| ReflectionError::FieldNotFound {
                entity: self.name,
                field: name.to_string(),
            })
    }

    /// Creates a blank instance through the registered constructor.
    pub fn instantiate(&self) -> Result<T, ReflectionError> {
        self.constructor
            .map(|constructor| constructor())
            .ok_or(ReflectionError::InstanceCreationFailed { entity: self.name })
    }

    /// Reads a field by name, failing if the field is not registered.
    pub fn read(&self, entity: &T, name: &str) -> Result<Value, ReflectionError> {
        Ok(self.field_named(name)?.read(entity))
    }
}

impl<T> std::fmt::Debug for EntityDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("name", &self.name)
            .field("has_constructor", &self.constructor.is_some())
            .field("fields", &self.fields)
            .finish()
    }
}
