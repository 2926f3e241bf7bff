mod common;

use dynfilter::{ComparisonOperator::*, Error, Filter, Filterable, ValueRef, ValueType};

#[allow(unused)]
#[derive(Debug, Filterable)]
pub struct Sample {
    pub small: i8,
    pub byte: u8,
    pub short: i16,
    pub word: u16,
    pub int: i32,
    pub uint: u32,
    pub long: i64,
    pub single: f32,
    pub double: f64,
    pub flag: bool,
    pub text: String,
    pub boxed: Box<str>,
    #[filterable(rename = "Label")]
    pub label: String,
    #[filterable(skip)]
    pub hidden: Vec<u8>,
    pub r#type: String,
    private: i32,
}

impl Sample {
    fn new() -> Self {
        Self {
            small: -1,
            byte: 2,
            short: 3,
            word: 4,
            int: 5,
            uint: 6,
            long: 7,
            single: 8.5,
            double: 9.25,
            flag: true,
            text: "text".into(),
            boxed: "boxed".into(),
            label: "label".into(),
            hidden: vec![1, 2, 3],
            r#type: "kind".into(),
            private: 42,
        }
    }
}

#[test]
fn test_registered_fields_in_declaration_order() {
    let names: Vec<_> = Sample::fields().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec!["small", "byte", "short", "word", "int", "uint", "long", "single", "double", "flag", "text", "boxed", "Label", "type", "private"]
    );
    assert_eq!(Sample::collection(), "Sample");
}

#[test]
fn test_field_value_types() {
    let types: Vec<_> = Sample::fields().iter().map(|f| f.value_type).collect();
    use ValueType::*;
    assert_eq!(types, vec![I16, I16, I16, I32, I32, I64, I64, F64, F64, Bool, String, String, String, String, I32]);
}

#[test]
fn test_generated_getters() {
    let sample = Sample::new();
    assert_eq!(SampleFields::small(&sample), ValueRef::I16(-1));
    assert_eq!(SampleFields::uint(&sample), ValueRef::I64(6));
    assert_eq!(SampleFields::single(&sample), ValueRef::F64(8.5));
    assert_eq!(SampleFields::boxed(&sample), ValueRef::String("boxed"));
    assert_eq!(SampleFields::r#type(&sample), ValueRef::String("kind"));
    assert_eq!(SampleFields::private(&sample), ValueRef::I32(42));
}

#[test]
fn test_rename_and_skip() {
    let mut filter = Filter::new();
    filter.add_typed::<Sample>(SampleFields::label, Equal, "label").unwrap();
    assert!(filter.exists("Label"));
    assert!(!filter.exists("label"));

    // a condition on the skipped field is ignored, as for any missing field
    filter.add("hidden", Equal, 1);
    assert_eq!(filter.render::<Sample>(), "Label = 'label'");
    assert!(filter.compile::<Sample>().unwrap().matches(&Sample::new()));
}

#[test]
fn test_compile_against_every_field_type() {
    let sample = Sample::new();
    let mut filter = Filter::new();
    filter
        .add("small", LessThan, 0)
        .add("byte", Equal, "2")
        .add("short", GreaterThanOrEqual, 3i64)
        .add("word", LessThanOrEqual, 4.0)
        .add("int", NotEqual, 6)
        .add("uint", GreaterThan, 5)
        .add("long", Equal, 7u8)
        .add("single", GreaterThan, 8)
        .add("double", LessThan, "9.5")
        .add("flag", Equal, "yes")
        .add("text", Contains, "ex")
        .add("boxed", Contains, "box")
        .add("type", Equal, "kind")
        .add("private", Equal, 42);

    let predicate = filter.compile::<Sample>().unwrap();
    assert!(predicate.matches(&sample));

    filter.add("flag", Equal, false);
    assert!(!filter.compile::<Sample>().unwrap().matches(&sample));
}

#[test]
fn test_typed_accessor_must_be_registered() {
    fn not_a_field(sample: &Sample) -> ValueRef<'_> { ValueRef::I32(sample.int * 2) }

    let mut filter = Filter::new();
    let err = filter.add_typed::<Sample>(not_a_field, Equal, 1).map(|_| ()).unwrap_err();
    assert_eq!(err, Error::InvalidAccessor { collection: "Sample" });
}

#[cfg(feature = "serde")]
#[test]
fn test_condition_serializes() {
    let condition = dynfilter::Condition::new(LessThanOrEqual, 3, dynfilter::Connective::Or);
    let json = serde_json::to_value(&condition).unwrap();
    assert_eq!(json, serde_json::json!({ "operator": "LessThanOrEqual", "value": { "I32": 3 }, "connective": "Or" }));
}
