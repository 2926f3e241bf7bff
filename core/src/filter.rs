//! The condition store: an ordered set of field conditions keyed by field name.

use crate::condition::{ComparisonOperator, Condition, Connective};
use crate::error::Error;
use crate::model::{Filterable, Getter};
use crate::selection::filter::Predicate;
use crate::selection::Selection;
use crate::value::Value;
use indexmap::IndexMap;

/// Field conditions joined by AND/OR in the order they were first added.
///
/// Re-adding a field replaces its operator, value and connective but keeps the entry where it
/// was, so the fold order is the order in which distinct field names first appeared.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: IndexMap<String, Condition>,
}

// Order is significant, unlike IndexMap's own equality
impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool { self.conditions.iter().eq(other.conditions.iter()) }
}

impl Filter {
    pub fn new() -> Self { Self::default() }

    /// A filter seeded with a single condition.
    pub fn with(field: impl Into<String>, operator: ComparisonOperator, value: impl Into<Value>) -> Self {
        let mut filter = Self::new();
        filter.set(field, operator, value);
        filter
    }

    pub fn add(&mut self, field: impl Into<String>, operator: ComparisonOperator, value: impl Into<Value>) -> &mut Self {
        self.insert(field.into(), Condition::new(operator, value, Connective::And));
        self
    }

    pub fn or(&mut self, field: impl Into<String>, operator: ComparisonOperator, value: impl Into<Value>) -> &mut Self {
        self.insert(field.into(), Condition::new(operator, value, Connective::Or));
        self
    }

    /// Like [`Filter::add`], naming the field by one of `R`'s registered getters.
    pub fn add_typed<R: Filterable>(
        &mut self,
        accessor: Getter<R>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Result<&mut Self, Error> {
        let name = Self::accessor_name(accessor)?;
        Ok(self.add(name, operator, value))
    }

    pub fn or_typed<R: Filterable>(
        &mut self,
        accessor: Getter<R>,
        operator: ComparisonOperator,
        value: impl Into<Value>,
    ) -> Result<&mut Self, Error> {
        let name = Self::accessor_name(accessor)?;
        Ok(self.or(name, operator, value))
    }

    fn accessor_name<R: Filterable>(accessor: Getter<R>) -> Result<&'static str, Error> {
        R::fields()
            .iter()
            .find(|field| field.is_getter(accessor))
            .map(|field| field.name)
            .ok_or(Error::InvalidAccessor { collection: R::collection() })
    }

    pub fn exists(&self, field: &str) -> bool { self.conditions.contains_key(field) }

    pub fn clear(&mut self) { self.conditions.clear() }

    pub fn len(&self) -> usize { self.conditions.len() }

    pub fn is_empty(&self) -> bool { self.conditions.is_empty() }

    /// The stored value and operator for `field`.
    pub fn get(&self, field: &str) -> Result<(&Value, ComparisonOperator), Error> {
        self.conditions
            .get(field)
            .map(|condition| (&condition.value, condition.operator))
            .ok_or_else(|| Error::FieldNotFound(field.to_string()))
    }

    /// Set a condition joined with AND, replacing any existing condition on `field`.
    pub fn set(&mut self, field: impl Into<String>, operator: ComparisonOperator, value: impl Into<Value>) {
        self.add(field, operator, value);
    }

    /// [`Filter::set`] with the default `Equal` operator.
    pub fn set_equal(&mut self, field: impl Into<String>, value: impl Into<Value>) { self.set(field, ComparisonOperator::Equal, value) }

    /// Conditions in fold order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Condition)> + '_ {
        self.conditions.iter().map(|(field, condition)| (field.as_str(), condition))
    }

    fn insert(&mut self, field: String, condition: Condition) {
        // IndexMap::insert keeps the original slot for an existing key
        self.conditions.insert(field, condition);
    }

    /// Resolve the conditions against `R`'s fields without type checking.
    pub fn selection<R: Filterable>(&self) -> Selection { Selection::resolve::<R>(self) }

    /// Compile into a predicate over `R`.
    #[cfg_attr(feature = "instrument", tracing::instrument(level = "debug", skip_all, fields(collection = R::collection())))]
    pub fn compile<R: Filterable>(&self) -> Result<Predicate<R>, Error> { Predicate::compile(self.selection::<R>()) }

    /// SQL-like text of the expression `compile::<R>()` would evaluate.
    pub fn render<R: Filterable>(&self) -> String { self.selection::<R>().to_string() }
}
