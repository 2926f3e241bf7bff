mod cast;

pub use cast::CastError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// An untyped condition literal. Its target type is only known once the condition is
/// matched against a field, at which point it is cast to the field's [`ValueType`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    // Numbers
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),

    Bool(bool),
    String(String),
}

/// Borrowed view of a field's current value, as returned by a registered getter.
///
/// Strings are borrowed from the item so evaluating a predicate never allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),
    Bool(bool),
    String(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    I16,
    I32,
    I64,
    F64,
    Bool,
    String,
}

impl ValueType {
    /// Whether `<`, `<=`, `>` and `>=` are meaningful for this type.
    pub fn is_ordered(&self) -> bool { !matches!(self, ValueType::Bool) }

    pub fn is_textual(&self) -> bool { matches!(self, ValueType::String) }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::I16 => "i16",
            ValueType::I32 => "i32",
            ValueType::I64 => "i64",
            ValueType::F64 => "f64",
            ValueType::Bool => "bool",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}

impl ValueRef<'_> {
    /// Compare against a literal of the same type. Returns `None` when the variants differ
    /// or when either side is a NaN.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (ValueRef::I16(a), Value::I16(b)) => Some(a.cmp(b)),
            (ValueRef::I32(a), Value::I32(b)) => Some(a.cmp(b)),
            (ValueRef::I64(a), Value::I64(b)) => Some(a.cmp(b)),
            (ValueRef::F64(a), Value::F64(b)) => a.partial_cmp(b),
            (ValueRef::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (ValueRef::String(a), Value::String(b)) => Some((*a).cmp(b.as_str())),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self { Value::$variant(value.into()) }
            }
        )*
    };
}

value_from! {
    i8 => I16,
    u8 => I16,
    i16 => I16,
    u16 => I32,
    i32 => I32,
    u32 => I64,
    i64 => I64,
    f32 => F64,
    f64 => F64,
    bool => Bool,
    String => String,
    &str => String,
}

impl From<&String> for Value {
    fn from(value: &String) -> Self { Value::String(value.clone()) }
}
