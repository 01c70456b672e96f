#![cfg(feature = "rusqlite")]
#![allow(dead_code)]

use std::sync::LazyLock;

use persistence::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person1 {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
}

impl Person1 {
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            age,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
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

/// Covers every supported field type, with an application-assigned key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gadget {
    pub code: i64,
    pub label: String,
    pub price: f64,
    pub in_stock: bool,
    pub rank: i16,
    pub payload: Vec<u8>,
    pub note: Option<String>,
}

impl Entity for Gadget {
    fn descriptor() -> &'static EntityDescriptor<Self> {
        static DESCRIPTOR: LazyLock<EntityDescriptor<Gadget>> = LazyLock::new(|| {
            EntityDescriptor::new("Gadget")
                .constructor(Gadget::default)
                .field(FieldDescriptor::new("code", |g: &Gadget| &g.code, |g| &mut g.code).primary_key())
                .field(
                    FieldDescriptor::new("label", |g: &Gadget| &g.label, |g| &mut g.label)
                        .column("gadget_label")
                        .not_null(),
                )
                .field(FieldDescriptor::new("price", |g: &Gadget| &g.price, |g| &mut g.price))
                .field(FieldDescriptor::new("in_stock", |g: &Gadget| &g.in_stock, |g| {
                    &mut g.in_stock
                }))
                .field(FieldDescriptor::new("rank", |g: &Gadget| &g.rank, |g| &mut g.rank))
                .field(FieldDescriptor::new("payload", |g: &Gadget| &g.payload, |g| {
                    &mut g.payload
                }))
                .field(FieldDescriptor::new("note", |g: &Gadget| &g.note, |g| &mut g.note))
        });
        &DESCRIPTOR
    }
}

pub fn sample_gadget(code: i64) -> Gadget {
    Gadget {
        code,
        label: format!("gadget-{code}"),
        price: 19.5,
        in_stock: true,
        rank: 3,
        payload: vec![0xde, 0xad, 0xbe, 0xef],
        note: None,
    }
}

/// Manager over a fresh in-memory SQLite database with both tables created.
pub fn setup_manager() -> EntityManager<SqliteTemplate> {
    let template = SqliteTemplate::open_in_memory().expect("open in-memory database");
    let manager = EntityManager::new(template).expect("resolve SQLite dialect");
    manager.create_table::<Person1>().expect("create Person1");
    manager.create_table::<Gadget>().expect("create Gadget");
    manager
}
