#![allow(dead_code)]

use dynfilter::Filterable;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Filterable)]
pub struct TestDomain {
    pub id: i32,
    pub description: String,
    pub value: f64,
}

impl TestDomain {
    pub fn new(id: i32, description: &str) -> Self { Self { id, description: description.to_string(), value: 0.0 } }
}

/// Same field names as [`TestDomain`], used to build filters with typed accessors.
#[allow(unused)]
#[derive(Debug, Clone, Filterable)]
pub struct TestDto {
    pub id: i64,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Filterable)]
pub struct AnotherClass {
    pub description: String,
}

impl AnotherClass {
    pub fn new(description: &str) -> Self { Self { description: description.to_string() } }
}

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_test_writer().init(); }

#[allow(unused)]
pub fn domain_objects() -> Vec<TestDomain> {
    vec![
        TestDomain::new(1, "number 1"),
        TestDomain::new(2, "number 2"),
        TestDomain::new(3, "person 3"),
        TestDomain::new(4, "animal 4"),
        TestDomain::new(5, "person 5"),
    ]
}

#[allow(unused)]
pub fn other_objects() -> Vec<AnotherClass> { vec![AnotherClass::new("person 1"), AnotherClass::new("person 2"), AnotherClass::new("empty")] }

#[allow(unused)]
pub fn ids<'a>(items: impl IntoIterator<Item = &'a TestDomain>) -> Vec<i32> { items.into_iter().map(|item| item.id).collect() }
