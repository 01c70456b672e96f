use crate::criteria::Criteria;

/// Builds a `DELETE` against a table by name.
#[derive(Debug, Clone, Copy)]
pub struct DeleteQueryBuilder<'a> {
    table_name: &'a str,
    criteria: Option<&'a Criteria>,
}

impl<'a> DeleteQueryBuilder<'a> {
    /// Deletes every row
    #[allow(clippy::should_implement_trait)]
    pub fn from(table_name: &'a str) -> Self {
        Self {
            table_name,
            criteria: None,
        }
    }

    /// Deletes the rows matching `criteria`
    pub fn of(table_name: &'a str, criteria: &'a Criteria) -> Self {
        Self {
            table_name,
            criteria: Some(criteria),
        }
    }

    pub fn to_sql(&self) -> String {
        format!(
            "DELETE FROM {}{};",
            self.table_name,
            super::where_clause(self.criteria)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Criterion, Operator};

    #[test]
    fn test_delete_all() {
        assert_eq!(
            DeleteQueryBuilder::from("Person1").to_sql(),
            "DELETE FROM Person1;"
        );
    }

    #[test]
    fn test_delete_with_criteria() {
        let criteria = Criteria::single(Criterion::new("id", "1", Operator::Equals));

        assert_eq!(
            DeleteQueryBuilder::of("Person1", &criteria).to_sql(),
            "DELETE FROM Person1 WHERE id = '1';"
        );
    }

    #[test]
    fn test_delete_with_two_criteria() {
        let criteria = Criteria::single(Criterion::eq("name", "kim"))
            .and(Criterion::new("age", 30, Operator::LessThan));

        assert_eq!(
            DeleteQueryBuilder::of("Person1", &criteria).to_sql(),
            "DELETE FROM Person1 WHERE name = 'kim' AND age < '30';"
        );
    }
}
