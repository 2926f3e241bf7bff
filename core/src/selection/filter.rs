//! Compile a resolved [`Selection`] into a predicate over a concrete type.
//!
//! All type checking and literal coercion happen here, once. Evaluating the result only reads
//! fields through their registered getters and compares them with already-cast literals, so it
//! cannot fail.

use super::Selection;
use crate::condition::ComparisonOperator;
use crate::error::Error;
use crate::model::{Field, Filterable, Getter};
use crate::value::{Value, ValueRef};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

enum Test {
    Equal(Value),
    NotEqual(Value),
    LessThan(Value),
    LessThanOrEqual(Value),
    GreaterThan(Value),
    GreaterThanOrEqual(Value),
    Contains(String),
}

impl Test {
    fn evaluate(&self, field: ValueRef<'_>) -> bool {
        match self {
            Test::Equal(v) => field.compare(v) == Some(Ordering::Equal),
            Test::NotEqual(v) => field.compare(v) != Some(Ordering::Equal),
            Test::LessThan(v) => field.compare(v) == Some(Ordering::Less),
            Test::LessThanOrEqual(v) => matches!(field.compare(v), Some(Ordering::Less | Ordering::Equal)),
            Test::GreaterThan(v) => field.compare(v) == Some(Ordering::Greater),
            Test::GreaterThanOrEqual(v) => matches!(field.compare(v), Some(Ordering::Greater | Ordering::Equal)),
            Test::Contains(needle) => match field {
                ValueRef::String(haystack) => haystack.contains(needle.as_str()),
                _ => false,
            },
        }
    }
}

enum Node<R> {
    True,
    Comparison { get: Getter<R>, test: Test },
    And(Box<Node<R>>, Box<Node<R>>),
    Or(Box<Node<R>>, Box<Node<R>>),
}

impl<R> Node<R> {
    fn evaluate(&self, item: &R) -> bool {
        match self {
            Node::True => true,
            Node::Comparison { get, test } => test.evaluate(get(item)),
            Node::And(left, right) => left.evaluate(item) && right.evaluate(item),
            Node::Or(left, right) => left.evaluate(item) || right.evaluate(item),
        }
    }
}

/// A compiled filter for `R`.
///
/// Holds only getters and cast literals, so it is `Send + Sync` and can be shared and called
/// from any number of threads.
pub struct Predicate<R> {
    selection: Selection,
    root: Node<R>,
}

impl<R: Filterable> Predicate<R> {
    pub(crate) fn compile(selection: Selection) -> Result<Self, Error> {
        let root = compile_node::<R>(&selection)?;
        trace!("compiled predicate for {}: {}", R::collection(), selection);
        Ok(Self { selection, root })
    }
}

impl<R> Predicate<R> {
    pub fn matches(&self, item: &R) -> bool { self.root.evaluate(item) }

    /// Borrow as a closure, e.g. for `Iterator::filter`.
    pub fn as_fn(&self) -> impl Fn(&R) -> bool + '_ { move |item| self.matches(item) }

    pub fn into_fn(self) -> impl Fn(&R) -> bool { move |item| self.matches(item) }

    /// Yield only the items this predicate accepts.
    pub fn filter<I>(&self, iter: I) -> FilterIterator<'_, I::IntoIter, R>
    where
        I: IntoIterator,
        I::Item: Borrow<R>,
    {
        FilterIterator { iter: iter.into_iter(), predicate: self }
    }

    /// The resolved expression this predicate evaluates.
    pub fn selection(&self) -> &Selection { &self.selection }

    pub fn accepts_all(&self) -> bool { matches!(self.root, Node::True) }
}

impl<R> fmt::Display for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.selection, f) }
}

impl<R> fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_tuple("Predicate").field(&self.selection.to_string()).finish() }
}

fn compile_node<R: Filterable>(selection: &Selection) -> Result<Node<R>, Error> {
    Ok(match selection {
        Selection::True => Node::True,
        Selection::Comparison { field, operator, value } => {
            // Resolution only keeps fields the type registers
            let field = R::field(field).ok_or_else(|| Error::FieldNotFound(field.clone()))?;
            Node::Comparison { get: field.get, test: compile_test::<R>(field, *operator, value)? }
        }
        Selection::And(left, right) => Node::And(Box::new(compile_node(left)?), Box::new(compile_node(right)?)),
        Selection::Or(left, right) => Node::Or(Box::new(compile_node(left)?), Box::new(compile_node(right)?)),
    })
}

fn compile_test<R: Filterable>(field: &Field<R>, operator: ComparisonOperator, value: &Value) -> Result<Test, Error> {
    let unsupported = || Error::UnsupportedOperator {
        collection: R::collection(),
        field: field.name.to_string(),
        operator,
        value_type: field.value_type,
    };
    if operator.is_ordering() && !field.value_type.is_ordered() {
        return Err(unsupported());
    }
    if operator == ComparisonOperator::Contains && !field.value_type.is_textual() {
        return Err(unsupported());
    }

    let value = value.cast_to(field.value_type).map_err(|source| Error::TypeMismatch {
        collection: R::collection(),
        field: field.name.to_string(),
        source,
    })?;

    Ok(match operator {
        ComparisonOperator::Equal => Test::Equal(value),
        ComparisonOperator::NotEqual => Test::NotEqual(value),
        ComparisonOperator::LessThan => Test::LessThan(value),
        ComparisonOperator::LessThanOrEqual => Test::LessThanOrEqual(value),
        ComparisonOperator::GreaterThan => Test::GreaterThan(value),
        ComparisonOperator::GreaterThanOrEqual => Test::GreaterThanOrEqual(value),
        ComparisonOperator::Contains => match value {
            Value::String(needle) => Test::Contains(needle),
            _ => return Err(unsupported()),
        },
    })
}

/// Iterator adaptor returned by [`Predicate::filter`].
pub struct FilterIterator<'p, I, R> {
    iter: I,
    predicate: &'p Predicate<R>,
}

impl<'p, I, R> Iterator for FilterIterator<'p, I, R>
where
    I: Iterator,
    I::Item: Borrow<R>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.iter.find(|item| predicate.matches(<I::Item as Borrow<R>>::borrow(item)))
    }
}
