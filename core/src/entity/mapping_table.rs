use persistence_types::Value;

use crate::entity::{DomainType, Entity};
use crate::error::{MappingError, ReflectionError};

/// Table name plus the ordered column metadata of one entity.
///
/// Always holds at least one column and exactly one primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMappingTable {
    table_name: String,
    domain_types: Vec<DomainType>,
    pk_index: usize,
}

impl EntityMappingTable {
    /// Derives the mapping table of `T` from its registered descriptor.
    ///
    /// The table is named after the entity, columns follow registration
    /// order.
    pub fn from<T: Entity>() -> Result<Self, MappingError> {
        let descriptor = T::descriptor();

        let domain_types = descriptor
            .fields()
            .iter()
            .map(|field| -> Result<DomainType, MappingError> {
                let sql_type = field.field_type().sql_type().ok_or_else(|| {
                    MappingError::UnsupportedFieldType {
                        entity: descriptor.name().to_string(),
                        field: field.name().to_string(),
                        field_type: field.field_type(),
                    }
                })?;

                let mut domain_type = DomainType::new(field.name(), sql_type)
                    .with_column_name(field.column_name())
                    .with_auto_increment(field.is_auto_increment());
                if field.is_primary_key() {
                    domain_type = domain_type.with_primary_key();
                }
                Ok(domain_type.with_nullable(field.is_nullable()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(descriptor.name(), domain_types)
    }

    /// Assembles a mapping table by hand, checking the same invariants as
    /// [`EntityMappingTable::from`].
    pub fn new(
        table_name: impl Into<String>,
        domain_types: Vec<DomainType>,
    ) -> Result<Self, MappingError> {
        let table_name = table_name.into();

        if domain_types.is_empty() {
            return Err(MappingError::NoFields { entity: table_name });
        }

        let keys: Vec<usize> = domain_types
            .iter()
            .enumerate()
            .filter(|(_, domain_type)| domain_type.is_primary_key())
            .map(|(index, _)| index)
            .collect();

        let pk_index = match keys.as_slice() {
            [index] => *index,
            [] => return Err(MappingError::NoPrimaryKeyDeclared { entity: table_name }),
            _ => {
                return Err(MappingError::MultiplePrimaryKeys {
                    entity: table_name,
                    fields: keys
                        .iter()
                        .map(|&index| domain_types[index].name().to_string())
                        .collect(),
                });
            }
        };

        let pk = &domain_types[pk_index];
        if pk.is_auto_increment() && !pk.sql_type().is_integer() {
            return Err(MappingError::AutoIncrementNotInteger {
                field: pk.name().to_string(),
                sql_type: pk.sql_type(),
                entity: table_name,
            });
        }

        Ok(Self {
            table_name,
            domain_types,
            pk_index,
        })
    }

    #[inline]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    #[inline]
    pub fn domain_types(&self) -> &[DomainType] {
        &self.domain_types
    }

    /// The primary key column
    #[inline]
    pub fn pk_domain_type(&self) -> &DomainType {
        &self.domain_types[self.pk_index]
    }

    /// Looks up a column by field name.
    pub fn domain_type(&self, name: &str) -> Option<&DomainType> {
        self.domain_types
            .iter()
            .find(|domain_type| domain_type.name() == name)
    }

    /// Reads the primary key off `entity`. A NULL key identifies no row and
    /// is reported as a read failure.
    pub fn primary_key_value<T: Entity>(&self, entity: &T) -> Result<Value, ReflectionError> {
        let descriptor = T::descriptor();
        let pk = self.pk_domain_type();

        match descriptor.read(entity, pk.name())? {
            Value::Null => Err(ReflectionError::FieldReadFailed {
                entity: descriptor.name(),
                field: pk.name().to_string(),
                reason: "primary key is NULL".to_string(),
            }),
            value => Ok(value),
        }
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.domain_types.iter().map(DomainType::column_name)
    }
}
