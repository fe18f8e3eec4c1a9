//! Data command tests outside of any transaction.

use crate::common::*;

#[test]
fn set_then_get_returns_value() {
    let mut engine = TransactionEngine::new();

    assert_eq!(engine.apply(set("a", "10")), Output::Unit);
    assert_eq!(engine.apply(get("a")), some("10"));
}

#[test]
fn get_missing_key_is_null() {
    let mut engine = TransactionEngine::new();
    assert_eq!(engine.apply(get("missing")), Output::Maybe(None));
}

#[test]
fn overwrite_moves_count() {
    let mut engine = engine_with(&[("a", "10"), ("b", "10")]);

    engine.apply(set("a", "20"));

    assert_eq!(engine.apply(count("10")), Output::Count(1));
    assert_eq!(engine.apply(count("20")), Output::Count(1));
    assert_consistent(&engine);
}

#[test]
fn set_same_value_twice_counts_once() {
    let mut engine = engine_with(&[("a", "10"), ("a", "10")]);
    assert_eq!(engine.apply(count("10")), Output::Count(1));
}

#[test]
fn unset_removes_and_second_unset_is_not_found() {
    let mut engine = engine_with(&[("a", "10")]);

    assert_eq!(engine.apply(unset("a")), Output::Unit);
    assert_eq!(engine.apply(get("a")), Output::Maybe(None));
    assert_eq!(engine.apply(count("10")), Output::Count(0));
    assert_eq!(engine.apply(unset("a")), Output::NotFound);
}

#[test]
fn count_of_unknown_value_is_zero() {
    let mut engine = engine_with(&[("a", "10")]);
    assert_eq!(engine.apply(count("nope")), Output::Count(0));
}

#[test]
fn commit_and_rollback_without_transaction() {
    let mut engine = engine_with(&[("a", "10")]);
    let before = engine.store().clone();

    assert_eq!(engine.apply(Command::Commit), Output::NoTransaction);
    assert_eq!(engine.apply(Command::Rollback), Output::NoTransaction);

    assert_eq!(engine.store(), &before);
    assert_eq!(engine.depth(), 0);
    assert_eq!(engine.metrics().no_transaction_requests, 2);
}

#[test]
fn keys_and_values_are_opaque_strings() {
    let mut engine = TransactionEngine::new();

    engine.apply(set("ключ", "значение"));
    engine.apply(set("10", "a"));

    assert_eq!(engine.apply(get("ключ")), some("значение"));
    assert_eq!(engine.apply(count("a")), Output::Count(1));
    assert_eq!(engine.apply(count("10")), Output::Count(0));
}

#[test]
fn engine_over_existing_store_keeps_contents() {
    let mut store = Store::new();
    store.set("a", "10");
    store.set("b", "10");

    let mut engine = TransactionEngine::with_store(store);

    assert_eq!(engine.depth(), 0);
    assert_eq!(engine.apply(get("a")), some("10"));
    assert_eq!(engine.apply(count("10")), Output::Count(2));

    engine.apply(Command::Begin);
    engine.apply(unset("a"));
    engine.apply(Command::Rollback);

    assert_eq!(engine.apply(get("a")), some("10"));
    assert_consistent(&engine);
}
