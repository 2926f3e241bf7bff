//! Build field conditions at runtime and compile them into predicates over any
//! [`Filterable`](model::Filterable) type.

pub mod condition;
pub mod error;
pub mod filter;
pub mod model;
pub mod selection;
pub mod value;

pub use condition::{ComparisonOperator, Condition, Connective};
pub use error::Error;
pub use filter::Filter;
pub use model::{Field, FieldValue, Filterable, Getter};
pub use selection::filter::{FilterIterator, Predicate};
pub use selection::Selection;
pub use value::{Value, ValueRef, ValueType};
