use crate::value::{ValueRef, ValueType};

/// Reads one field of an item.
pub type Getter<R> = for<'a> fn(&'a R) -> ValueRef<'a>;

/// A readable field registered for a [`Filterable`] type.
pub struct Field<R> {
    pub name: &'static str,
    pub value_type: ValueType,
    pub get: Getter<R>,
}

impl<R> Field<R> {
    pub const fn new(name: &'static str, value_type: ValueType, get: Getter<R>) -> Self { Self { name, value_type, get } }

    /// Whether `getter` is this field's registered getter.
    ///
    /// Registered getters are non-generic functions (the derive emits one per field), so each has
    /// a single instantiation and a stable address within the final binary.
    pub fn is_getter(&self, getter: Getter<R>) -> bool { std::ptr::fn_addr_eq(self.get, getter) }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self { *self }
}

impl<R> Copy for Field<R> {}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).field("value_type", &self.value_type).finish()
    }
}

/// Types whose fields can be matched by name against filter conditions.
///
/// Usually derived with `#[derive(Filterable)]`. A hand-written registration lists each
/// readable field once:
///
/// ```
/// use dynfilter_core::model::{Field, FieldValue, Filterable};
/// use dynfilter_core::value::ValueRef;
///
/// struct Pet {
///     name: String,
///     age: i32,
/// }
///
/// fn pet_name(pet: &Pet) -> ValueRef<'_> { pet.name.value_ref() }
/// fn pet_age(pet: &Pet) -> ValueRef<'_> { pet.age.value_ref() }
///
/// impl Filterable for Pet {
///     fn collection() -> &'static str { "Pet" }
///     fn fields() -> &'static [Field<Self>] {
///         const FIELDS: &[Field<Pet>] = &[
///             Field::new("name", <String as FieldValue>::VALUE_TYPE, pet_name),
///             Field::new("age", <i32 as FieldValue>::VALUE_TYPE, pet_age),
///         ];
///         FIELDS
///     }
/// }
///
/// assert_eq!(Pet::field("age").map(|f| f.name), Some("age"));
/// ```
pub trait Filterable: Sized + 'static {
    /// Name of the type, used in diagnostics.
    fn collection() -> &'static str;

    fn fields() -> &'static [Field<Self>];

    fn field(name: &str) -> Option<&'static Field<Self>> { Self::fields().iter().find(|field| field.name == name) }
}

/// Rust types that can back a filterable field.
pub trait FieldValue {
    const VALUE_TYPE: ValueType;
    fn value_ref(&self) -> ValueRef<'_>;
}

macro_rules! field_value {
    ($($ty:ty => $variant:ident as $repr:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const VALUE_TYPE: ValueType = ValueType::$variant;
                fn value_ref(&self) -> ValueRef<'_> { ValueRef::$variant(<$repr>::from(*self)) }
            }
        )*
    };
}

field_value! {
    i8 => I16 as i16,
    u8 => I16 as i16,
    i16 => I16 as i16,
    u16 => I32 as i32,
    i32 => I32 as i32,
    u32 => I64 as i64,
    i64 => I64 as i64,
    f32 => F64 as f64,
    f64 => F64 as f64,
    bool => Bool as bool,
}

impl FieldValue for String {
    const VALUE_TYPE: ValueType = ValueType::String;
    fn value_ref(&self) -> ValueRef<'_> { ValueRef::String(self) }
}

impl FieldValue for &str {
    const VALUE_TYPE: ValueType = ValueType::String;
    fn value_ref(&self) -> ValueRef<'_> { ValueRef::String(self) }
}

impl FieldValue for Box<str> {
    const VALUE_TYPE: ValueType = ValueType::String;
    fn value_ref(&self) -> ValueRef<'_> { ValueRef::String(self) }
}
