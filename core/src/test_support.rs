//! Entities and a map-backed row shared by the unit tests.

use std::collections::HashMap;
use std::sync::LazyLock;

use persistence_types::{FieldType, FieldValue, Value, ValueError};

use crate::entity::{Entity, EntityDescriptor, FieldDescriptor};
use crate::row::{Row, RowError};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person1 {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
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

#[derive(Debug, Default)]
pub struct Renamed {
    pub id: i64,
    pub nick: String,
    pub active: bool,
}

impl Entity for Renamed {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<Renamed>> = LazyLock::new(|| {
            EntityDescriptor::new("Renamed")
                .constructor(Renamed::default)
                .field(FieldDescriptor::new("id", |r: &Renamed| &r.id, |r| &mut r.id).primary_key())
                .field(
                    FieldDescriptor::new("nick", |r: &Renamed| &r.nick, |r| &mut r.nick)
                        .column("nick_name")
                        .not_null(),
                )
                .field(FieldDescriptor::new("active", |r: &Renamed| &r.active, |r| &mut r.active))
        });
        &DESCRIPTOR
    }
}

#[derive(Debug)]
pub struct NoConstructor {
    pub id: i64,
}

impl Entity for NoConstructor {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<NoConstructor>> = LazyLock::new(|| {
            EntityDescriptor::new("NoConstructor").field(
                FieldDescriptor::new("id", |n: &NoConstructor| &n.id, |n| &mut n.id).primary_key(),
            )
        });
        &DESCRIPTOR
    }
}

#[derive(Default)]
pub struct NoPrimaryKey {
    pub name: String,
}

impl Entity for NoPrimaryKey {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<NoPrimaryKey>> = LazyLock::new(|| {
            EntityDescriptor::new("NoPrimaryKey")
                .constructor(NoPrimaryKey::default)
                .field(FieldDescriptor::new("name", |n: &NoPrimaryKey| &n.name, |n| &mut n.name))
        });
        &DESCRIPTOR
    }
}

#[derive(Default)]
pub struct TwoPrimaryKeys {
    pub a: i64,
    pub b: i64,
}

impl Entity for TwoPrimaryKeys {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<TwoPrimaryKeys>> = LazyLock::new(|| {
            EntityDescriptor::new("TwoPrimaryKeys")
                .constructor(TwoPrimaryKeys::default)
                .field(FieldDescriptor::new("a", |t: &TwoPrimaryKeys| &t.a, |t| &mut t.a).primary_key())
                .field(FieldDescriptor::new("b", |t: &TwoPrimaryKeys| &t.b, |t| &mut t.b).primary_key())
        });
        &DESCRIPTOR
    }
}

#[derive(Debug, Default)]
pub struct Measurement {
    pub id: i64,
    pub reading: f64,
}

impl Entity for Measurement {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<Measurement>> = LazyLock::new(|| {
            EntityDescriptor::new("Measurement")
                .constructor(Measurement::default)
                .field(FieldDescriptor::new("id", |m: &Measurement| &m.id, |m| &mut m.id).primary_key())
                .field(FieldDescriptor::new("reading", |m: &Measurement| &m.reading, |m| {
                    &mut m.reading
                }))
        });
        &DESCRIPTOR
    }
}

#[derive(Default)]
pub struct TextAutoKey {
    pub code: String,
}

impl Entity for TextAutoKey {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<TextAutoKey>> = LazyLock::new(|| {
            EntityDescriptor::new("TextAutoKey")
                .constructor(TextAutoKey::default)
                .field(
                    FieldDescriptor::new("code", |t: &TextAutoKey| &t.code, |t| &mut t.code)
                        .primary_key()
                        .auto_increment(),
                )
        });
        &DESCRIPTOR
    }
}

pub struct NoFields;

impl Entity for NoFields {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<NoFields>> =
            LazyLock::new(|| EntityDescriptor::new("NoFields").constructor(|| NoFields));
        &DESCRIPTOR
    }
}

/// Cents, stored as a user type without a column mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Money(pub i64);

impl FieldValue for Money {
    const FIELD_TYPE: FieldType = FieldType::Custom("Money");

    fn to_value(&self) -> Value {
        Value::Integer(self.0)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        i64::from_value(value).map(Money)
    }
}

#[derive(Default)]
pub struct WithCustomField {
    pub id: i64,
    pub price: Money,
}

impl Entity for WithCustomField {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<WithCustomField>> = LazyLock::new(|| {
            EntityDescriptor::new("WithCustomField")
                .constructor(WithCustomField::default)
                .field(
                    FieldDescriptor::new("id", |w: &WithCustomField| &w.id, |w| &mut w.id)
                        .primary_key(),
                )
                .field(FieldDescriptor::new("price", |w: &WithCustomField| &w.price, |w| {
                    &mut w.price
                }))
        });
        &DESCRIPTOR
    }
}

/// A result row backed by a column → value map.
#[derive(Debug, Default)]
pub struct MapRow(pub HashMap<String, Value>);

impl MapRow {
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.0.insert(column.to_string(), value.into());
        self
    }
}

impl Row for MapRow {
    fn value(&self, column: &str) -> Result<Value, RowError> {
        self.0
            .get(column)
            .cloned()
            .ok_or_else(|| RowError::ColumnNotFound(column.to_string()))
    }
}
