//! # dynfilter
//!
//! Describe filter conditions at runtime as (field, operator, value) triples, then compile them into a
//! reusable, type-checked predicate for any type that registers its fields.
//!
//! ## Core Concepts
//!
//! - **Filter**: an ordered set of conditions keyed by field name, each joined to the ones before it by
//!   AND or OR
//! - **Filterable**: a type whose readable fields are registered by name, usually via `#[derive(Filterable)]`
//! - **Predicate**: a filter compiled for one concrete type. Literals are cast to the field types once,
//!   at compile time, so evaluation cannot fail
//!
//! Conditions naming fields the target type does not have are skipped, so one filter can be compiled
//! against several types that share only some field names. Connectives fold strictly left to right:
//! `a OR b AND c` means `(a OR b) AND c`.
//!
//! ## Example
//!
//! ```rust
//! use dynfilter::{ComparisonOperator::*, Filter, Filterable};
//!
//! #[derive(Filterable, Debug)]
//! pub struct Album {
//!     pub name: String,
//!     pub year: i32,
//! }
//!
//! #[derive(Filterable, Debug)]
//! pub struct Artist {
//!     pub name: String,
//! }
//!
//! # fn main() -> Result<(), dynfilter::Error> {
//! let mut filter = Filter::new();
//! filter.add("name", Contains, "Symmetry").or("year", GreaterThanOrEqual, "2001");
//!
//! let albums = vec![
//!     Album { name: "Showbiz".into(), year: 1999 },
//!     Album { name: "Origin of Symmetry".into(), year: 2001 },
//!     Album { name: "Absolution".into(), year: 2003 },
//! ];
//! let predicate = filter.compile::<Album>()?;
//! assert_eq!(albums.iter().filter(|a| predicate.matches(a)).count(), 2);
//! assert_eq!(filter.render::<Album>(), "name CONTAINS 'Symmetry' OR year >= '2001'");
//!
//! // `year` does not exist on Artist and is ignored
//! let artists = filter.compile::<Artist>()?;
//! assert!(!artists.matches(&Artist { name: "Muse".into() }));
//!
//! // typed accessors name fields without string literals
//! filter.clear();
//! filter.add_typed::<Album>(AlbumFields::year, LessThan, 2000)?;
//! assert_eq!(filter.compile::<Album>()?.filter(&albums).count(), 1);
//! # Ok(())
//! # }
//! ```

pub use dynfilter_core as core;
#[cfg(feature = "derive")]
pub use dynfilter_derive as derive;

// Re-export commonly used types
pub use dynfilter_core::{
    condition, error, model, selection, value, ComparisonOperator, Condition, Connective, Error, Field, FieldValue, Filter,
    Filterable, Predicate, Selection, Value, ValueRef, ValueType,
};

// Re-export the derive macro
#[cfg(feature = "derive")]
pub use dynfilter_derive::*;
