//! End-to-end command traces.

use crate::common::*;

#[test]
fn counts_survive_rollback() {
    let mut engine = TransactionEngine::new();

    let outputs = engine.execute_many(vec![
        set("a", "10"),
        set("b", "10"),
        count("10"),
        Command::Begin,
        set("a", "20"),
        count("10"),
        Command::Rollback,
        get("a"),
        count("10"),
    ]);

    assert_eq!(
        outputs,
        vec![
            Output::Unit,
            Output::Unit,
            Output::Count(2),
            Output::Unit,
            Output::Unit,
            Output::Count(1),
            Output::Unit,
            some("10"),
            Output::Count(2),
        ]
    );
}

#[test]
fn interleaved_commit_and_rollback() {
    let mut engine = TransactionEngine::new();

    let outputs = engine.execute_many(vec![
        Command::Begin,
        set("a", "10"),
        get("a"),
        Command::Begin,
        set("a", "20"),
        get("a"),
        Command::Rollback,
        get("a"),
        Command::Rollback,
        get("a"),
    ]);

    assert_eq!(
        outputs,
        vec![
            Output::Unit,
            Output::Unit,
            some("10"),
            Output::Unit,
            Output::Unit,
            some("20"),
            Output::Unit,
            some("10"),
            Output::Unit,
            Output::Maybe(None),
        ]
    );
}

#[test]
fn commit_then_rollback_reports_no_transaction() {
    let mut engine = TransactionEngine::new();

    let outputs = engine.execute_many(vec![
        Command::Begin,
        set("a", "30"),
        Command::Begin,
        set("a", "40"),
        Command::Commit,
        get("a"),
        Command::Rollback,
    ]);

    assert_eq!(outputs[5], some("40"));
    assert_eq!(outputs[6], Output::NoTransaction);
}

#[test]
fn unset_inside_nested_transactions() {
    let mut engine = TransactionEngine::new();

    let outputs = engine.execute_many(vec![
        set("a", "50"),
        Command::Begin,
        get("a"),
        set("a", "60"),
        Command::Begin,
        unset("a"),
        get("a"),
        Command::Rollback,
        get("a"),
        Command::Commit,
        get("a"),
    ]);

    assert_eq!(outputs[2], some("50"));
    assert_eq!(outputs[6], Output::Maybe(None));
    assert_eq!(outputs[8], some("60"));
    assert_eq!(outputs[10], some("60"));
}
