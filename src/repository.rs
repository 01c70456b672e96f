use std::fmt::Display;
use std::marker::PhantomData;

use persistence_core::{Entity, EntityMappingTable, PersistenceError, Result, Template};

use crate::manager::EntityManager;

/// Typed CRUD for one entity over a shared [`EntityManager`].
///
/// The mapping table is derived once at construction, so a badly registered
/// entity is reported before any statement runs.
#[derive(Debug)]
pub struct Repository<'m, T, X: Template> {
    manager: &'m EntityManager<X>,
    table: EntityMappingTable,
    entity: PhantomData<fn() -> T>,
}

impl<'m, T: Entity, X: Template> Repository<'m, T, X> {
    pub fn new(manager: &'m EntityManager<X>) -> Result<Self> {
        Ok(Self {
            manager,
            table: EntityMappingTable::from::<T>()?,
            entity: PhantomData,
        })
    }

    #[inline]
    pub fn table(&self) -> &EntityMappingTable {
        &self.table
    }

    pub fn find_all(&self) -> Result<Vec<T>> {
        self.manager.select_all(&self.table)
    }

    /// `None` when no row has this primary key.
    pub fn find_by_id(&self, id: impl Display) -> Result<Option<T>> {
        match self.manager.select_by_id(&self.table, id) {
            Ok(entity) => Ok(Some(entity)),
            Err(PersistenceError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Inserts `entity` and hands it back unchanged.
    pub fn save(&self, entity: T) -> Result<T> {
        self.manager.insert(&self.table, &entity)?;
        Ok(entity)
    }

    pub fn delete_all(&self) -> Result<()> {
        self.manager.delete_all(&self.table)
    }

    pub fn delete_by_id(&self, id: impl Display) -> Result<()> {
        self.manager.delete_by_id(&self.table, id)
    }
}
