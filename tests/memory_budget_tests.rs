//! Materialization budget enforcement tests

use std::sync::Arc;
use std::thread;

use rlinq::mem::{MaterializeBudget, SharedBuffer};
use rlinq::{Error, QueryConfig, QueryContext};

#[test]
fn test_budget_acquire_release() {
    let budget = MaterializeBudget::new(1024 * 1024); // 1MB

    assert_eq!(budget.used_bytes(), 0);

    let guard = budget
        .try_acquire(100 * 1024, "test")
        .expect("Acquire failed");
    assert_eq!(budget.used_bytes(), 100 * 1024);
    assert_eq!(guard.bytes(), 100 * 1024);
    assert_eq!(guard.tag(), "test");

    drop(guard);
    assert_eq!(budget.used_bytes(), 0);
}

#[test]
fn test_budget_exhaustion() {
    let budget = MaterializeBudget::new(500 * 1024);

    let guard1 = budget
        .try_acquire(400 * 1024, "test")
        .expect("First acquire failed");

    // 400KB + 200KB > 500KB
    assert!(budget.try_acquire(200 * 1024, "test").is_none());
    assert_eq!(budget.used_bytes(), 400 * 1024);

    drop(guard1);
    let guard2 = budget
        .try_acquire(200 * 1024, "test")
        .expect("Acquire after release failed");
    assert_eq!(budget.used_bytes(), 200 * 1024);
    drop(guard2);
}

#[test]
fn test_budget_concurrent_access() {
    let budget = Arc::new(MaterializeBudget::new(1024 * 1024));
    let mut handles = vec![];

    for _ in 0..10 {
        let budget_clone = Arc::clone(&budget);
        handles.push(thread::spawn(move || {
            let items: Vec<u64> = (0..1024).collect();
            if let Ok(buf) = SharedBuffer::new(&*budget_clone, items, "thread") {
                thread::sleep(std::time::Duration::from_millis(5));
                assert_eq!(buf.bytes(), 8 * 1024);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(budget.used_bytes(), 0);
    assert!(budget.peak_bytes() <= 1024 * 1024);
}

#[test]
fn test_query_buffers_release_on_last_drop() {
    let ctx = QueryContext::new(QueryConfig::default().with_cap(4096)).expect("valid config");
    let data: Vec<u32> = (0..100).collect();

    let distinct = ctx.from(&data).distinct().expect("distinct failed");
    assert_eq!(ctx.used_bytes(), 400);

    // Cursor copies keep the buffer alive after the handle is gone.
    let begin = distinct.span().begin.clone();
    drop(distinct);
    assert_eq!(ctx.used_bytes(), 400);

    drop(begin);
    assert_eq!(ctx.used_bytes(), 0);
    assert_eq!(ctx.peak_materialized_bytes(), 400);
}

#[test]
fn test_query_exceeding_cap_fails() {
    let ctx = QueryContext::new(QueryConfig::default().with_cap(64)).expect("valid config");
    let data: Vec<u64> = (0..100).collect();

    let res = ctx.from(&data).reverse();
    match res {
        Err(Error::BudgetExceeded {
            tag,
            requested,
            capacity,
            ..
        }) => {
            assert_eq!(tag, "reverse");
            assert_eq!(requested, 800);
            assert_eq!(capacity, 64);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("reverse should not fit in 64 bytes"),
    }
    assert_eq!(ctx.used_bytes(), 0);

    // Small enough inputs still materialize under the same context.
    let small = ctx.from(&data[..4]).reverse().expect("reverse failed");
    assert_eq!(small.to_vec(), vec![3, 2, 1, 0]);
}

#[test]
fn test_lazy_chains_do_not_touch_the_budget() {
    let ctx = QueryContext::new(QueryConfig::default().with_cap(8)).expect("valid config");
    let data: Vec<u64> = (0..1000).collect();
    let total = ctx
        .from(&data)
        .where_(|x| x % 3 == 0)
        .select(|x| x / 3)
        .take(10)
        .sum()
        .expect("sum failed");
    assert_eq!(total, 45);
    assert_eq!(ctx.peak_materialized_bytes(), 0);
}

#[test]
fn test_budget_reports_bytes_per_operator() {
    let ctx = QueryContext::default();
    let data: Vec<u32> = vec![3, 1, 2, 3];

    let zipped = ctx.from(&data).zip(&data).expect("zip failed");
    let sorted = ctx.from(&data).order_by(|x| *x).expect("order_by failed");
    let budget = ctx.budget();
    assert_eq!(budget.used_bytes_for("zip"), 4 * 8);
    assert_eq!(budget.used_bytes_for("order_by"), 4 * 4);
    assert_eq!(budget.used_bytes(), 48);

    drop(zipped);
    assert_eq!(budget.used_bytes_for("zip"), 0);
    assert_eq!(budget.used_bytes_for("order_by"), 16);
    drop(sorted);
    assert_eq!(budget.peak_bytes(), 48);
}
