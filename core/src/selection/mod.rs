//! A filter resolved against one target type: conditions on fields the type lacks are dropped and
//! the rest are folded strictly left to right by their connectives.

pub mod filter;
mod sql;

use crate::condition::{ComparisonOperator, Connective};
use crate::filter::Filter;
use crate::model::Filterable;
use crate::value::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// No condition matched; accepts everything.
    True,
    Comparison {
        field: String,
        operator: ComparisonOperator,
        value: Value,
    },
    And(Box<Selection>, Box<Selection>),
    Or(Box<Selection>, Box<Selection>),
}

impl Selection {
    /// Resolve `filter` against `R`'s fields.
    ///
    /// There is no operator precedence: `a OR b AND c` folds to `(a OR b) AND c`.
    pub fn resolve<R: Filterable>(filter: &Filter) -> Selection {
        let fields = R::fields();
        let mut folded: Option<Selection> = None;

        for (name, condition) in filter.conditions() {
            if !fields.iter().any(|field| field.name == name) {
                debug!("{} has no field {}, skipping condition", R::collection(), name);
                continue;
            }

            let comparison =
                Selection::Comparison { field: name.to_string(), operator: condition.operator, value: condition.value.clone() };

            folded = Some(match folded {
                None => comparison,
                Some(left) => match condition.connective {
                    Connective::And => Selection::And(Box::new(left), Box::new(comparison)),
                    Connective::Or => Selection::Or(Box::new(left), Box::new(comparison)),
                },
            });
        }

        folded.unwrap_or(Selection::True)
    }

    /// Field names referenced by this selection, left to right.
    pub fn fields(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_fields(&mut names);
        names
    }

    fn collect_fields<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Selection::True => {}
            Selection::Comparison { field, .. } => names.push(field),
            Selection::And(left, right) | Selection::Or(left, right) => {
                left.collect_fields(names);
                right.collect_fields(names);
            }
        }
    }
}
