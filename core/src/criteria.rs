//! WHERE-clause predicates.
//!
//! A [`Criteria`] is an ordered list of [`Criterion`]s joined with `AND`.
//! Values are interpolated as quoted string literals without escaping.

use std::fmt::Display;

use crate::entity::EntityMappingTable;

/// Comparison operator of a [`Criterion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,
    Like,
}

impl Operator {
    /// SQL token for this operator
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "<>",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEquals => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEquals => "<=",
            Operator::Like => "LIKE",
        }
    }
}

/// `column <op> 'value'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    column: String,
    value: String,
    operator: Operator,
}

impl Criterion {
    pub fn new(column: impl Into<String>, value: impl Display, operator: Operator) -> Self {
        Self {
            column: column.into(),
            value: value.to_string(),
            operator,
        }
    }

    /// `column = 'value'`
    pub fn eq(column: impl Into<String>, value: impl Display) -> Self {
        Self::new(column, value, Operator::Equals)
    }

    #[inline]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn to_sql(&self) -> String {
        format!("{} {} '{}'", self.column, self.operator.as_sql(), self.value)
    }
}

/// Conjunction of criteria, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self(criteria)
    }

    pub fn single(criterion: Criterion) -> Self {
        Self(vec![criterion])
    }

    /// `<pk column> = 'id'` for the table's primary key.
    pub fn primary_key(table: &EntityMappingTable, id: impl Display) -> Self {
        Self::single(Criterion::eq(table.pk_domain_type().column_name(), id))
    }

    /// Appends another predicate.
    pub fn and(mut self, criterion: Criterion) -> Self {
        self.0.push(criterion);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    pub fn to_sql(&self) -> String {
        self.0
            .iter()
            .map(Criterion::to_sql)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
