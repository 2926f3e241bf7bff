use crate::condition::ComparisonOperator;
use crate::value::{CastError, ValueType};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("field not found: {0}")]
    FieldNotFound(String),
    #[error("invalid accessor: not a registered field getter of {collection}")]
    InvalidAccessor { collection: &'static str },
    #[error("type mismatch for {collection}.{field}: {source}")]
    TypeMismatch {
        collection: &'static str,
        field: String,
        #[source]
        source: CastError,
    },
    #[error("unsupported operator {operator} for {collection}.{field} of type {value_type}")]
    UnsupportedOperator { collection: &'static str, field: String, operator: ComparisonOperator, value_type: ValueType },
}
