//! One filter compiled against several types that share only some field names.

mod common;

use anyhow::Result;
use common::{domain_objects, ids, other_objects, AnotherClass, TestDomain};
use dynfilter::{ComparisonOperator::*, Filter, Filterable};

#[derive(Debug, Filterable)]
struct Invoice {
    #[filterable(rename = "id")]
    number: u32,
    paid: bool,
}

#[test]
fn test_shared_field_is_honoured_by_both_types() -> Result<()> {
    let mut filter = Filter::new();
    filter.add("description", Contains, "person").add("id", GreaterThan, 3);

    let domain = filter.compile::<TestDomain>()?;
    assert_eq!(ids(domain.filter(&domain_objects())), vec![5]);

    let other = filter.compile::<AnotherClass>()?;
    assert_eq!(other.filter(&other_objects()).count(), 2);
    assert_eq!(other.selection().fields(), vec!["description"]);
    Ok(())
}

#[test]
fn test_no_overlap_accepts_everything() -> Result<()> {
    let mut filter = Filter::new();
    filter.add("paid", Equal, true).or("missing", Equal, 1);

    let predicate = filter.compile::<AnotherClass>()?;
    assert!(predicate.accepts_all());
    assert_eq!(predicate.filter(&other_objects()).count(), 3);
    assert_eq!(filter.render::<AnotherClass>(), "TRUE");
    Ok(())
}

#[test]
fn test_literal_cast_per_target_type() -> Result<()> {
    // `id` is i32 on TestDomain and u32 (registered as i64) on Invoice
    let filter = Filter::with("id", LessThanOrEqual, "2");
    let invoices = vec![Invoice { number: 1, paid: false }, Invoice { number: 2, paid: true }, Invoice { number: 40, paid: true }];

    let predicate = filter.compile::<Invoice>()?;
    assert_eq!(invoices.iter().filter(|i| predicate.matches(i)).map(|i| i.number).collect::<Vec<_>>(), vec![1, 2]);

    let predicate = filter.compile::<TestDomain>()?;
    assert_eq!(ids(predicate.filter(&domain_objects())), vec![1, 2]);
    Ok(())
}

#[test]
fn test_same_filter_different_errors() {
    // `paid` only exists on Invoice, where Contains is not valid for a bool
    let filter = Filter::with("paid", Contains, "yes");
    assert!(filter.compile::<Invoice>().is_err());
    assert!(filter.compile::<TestDomain>().is_ok());
}

#[test]
fn test_predicate_shared_across_threads() -> Result<()> {
    let predicate = std::sync::Arc::new(Filter::with("description", Contains, "person").compile::<TestDomain>()?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let predicate = predicate.clone();
            std::thread::spawn(move || ids(predicate.filter(&domain_objects())))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), vec![3, 5]);
    }
    Ok(())
}
