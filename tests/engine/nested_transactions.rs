//! Nested transaction semantics: rollback pops one level, commit
//! finalizes every level.

use crate::common::*;

#[test]
fn rollback_discards_innermost_only() {
    let mut engine = TransactionEngine::new();

    engine.apply(Command::Begin);
    engine.apply(set("a", "1"));
    engine.apply(Command::Begin);
    engine.apply(set("a", "2"));
    assert_eq!(engine.depth(), 2);

    assert_eq!(engine.apply(Command::Rollback), Output::Unit);

    assert_eq!(engine.depth(), 1);
    assert!(engine.in_transaction());
    assert_eq!(engine.apply(get("a")), some("1"));

    assert_eq!(engine.apply(Command::Rollback), Output::Unit);
    assert_eq!(engine.apply(get("a")), Output::Maybe(None));
    assert_eq!(engine.apply(Command::Rollback), Output::NoTransaction);
}

#[test]
fn commit_finalizes_all_levels() {
    let mut engine = TransactionEngine::new();

    engine.apply(Command::Begin);
    engine.apply(set("a", "30"));
    engine.apply(Command::Begin);
    engine.apply(set("a", "40"));

    assert_eq!(engine.apply(Command::Commit), Output::Unit);

    assert_eq!(engine.depth(), 0);
    assert_eq!(engine.pending_undo(), 0);
    assert_eq!(engine.apply(get("a")), some("40"));
    assert_eq!(engine.apply(Command::Rollback), Output::NoTransaction);

    let metrics = engine.metrics();
    assert_eq!(metrics.total_begun, 2);
    assert_eq!(metrics.total_committed, 2);
    assert_eq!(metrics.active_count, 0);
}

#[test]
fn rollback_restores_unset_key() {
    let mut engine = engine_with(&[("a", "10"), ("b", "10")]);

    engine.apply(Command::Begin);
    engine.apply(unset("a"));
    assert_eq!(engine.apply(count("10")), Output::Count(1));

    engine.apply(Command::Rollback);

    assert_eq!(engine.apply(get("a")), some("10"));
    assert_eq!(engine.apply(count("10")), Output::Count(2));
    assert_consistent(&engine);
}

#[test]
fn rollback_of_repeated_sets_restores_original() {
    let mut engine = engine_with(&[("a", "orig")]);

    engine.apply(Command::Begin);
    engine.apply(set("a", "x"));
    engine.apply(unset("a"));
    engine.apply(set("a", "y"));
    engine.apply(set("a", "z"));
    engine.apply(Command::Rollback);

    assert_eq!(engine.apply(get("a")), some("orig"));
    assert_eq!(engine.apply(count("z")), Output::Count(0));
    assert_eq!(engine.apply(count("orig")), Output::Count(1));
}

#[test]
fn unset_of_absent_key_records_nothing() {
    let mut engine = TransactionEngine::new();

    engine.apply(Command::Begin);
    assert_eq!(engine.apply(unset("ghost")), Output::NotFound);
    assert_eq!(engine.pending_undo(), 0);

    engine.apply(set("ghost", "1"));
    assert_eq!(engine.pending_undo(), 1);
}

#[test]
fn empty_transaction_rollback_is_noop() {
    let mut engine = engine_with(&[("a", "1")]);
    let before = engine.store().clone();

    engine.apply(Command::Begin);
    engine.apply(Command::Begin);
    engine.apply(Command::Rollback);
    engine.apply(Command::Rollback);

    assert_eq!(engine.store(), &before);
    assert_eq!(engine.metrics().undo_records_applied, 0);
}

#[test]
fn deep_nesting_unwinds_level_by_level() {
    let mut engine = TransactionEngine::new();

    for level in 1..=50 {
        engine.apply(Command::Begin);
        engine.apply(set("k", &level.to_string()));
    }
    assert_eq!(engine.depth(), 50);

    for level in (1..50).rev() {
        engine.apply(Command::Rollback);
        assert_eq!(engine.apply(get("k")), some(&level.to_string()));
    }
    engine.apply(Command::Rollback);
    assert_eq!(engine.apply(get("k")), Output::Maybe(None));
    assert!(engine.store().is_empty());
}
