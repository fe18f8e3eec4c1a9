//! Property tests over arbitrary command sequences.

use crate::common::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Unset(String),
}

impl Op {
    fn into_command(self) -> Command {
        match self {
            Op::Set(key, value) => set(&key, &value),
            Op::Unset(key) => unset(&key),
        }
    }
}

// Small alphabets so keys and values collide often
fn op_strategy() -> impl Strategy<Value = Op> {
    let key = "[a-e]";
    let value = "[0-3]";
    prop_oneof![
        3 => (key, value).prop_map(|(k, v)| Op::Set(k, v)),
        1 => key.prop_map(Op::Unset),
    ]
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => op_strategy().prop_map(Op::into_command),
        1 => Just(Command::Begin),
        1 => Just(Command::Rollback),
        1 => Just(Command::Commit),
    ]
}

proptest! {
    #[test]
    fn rollback_restores_exactly(
        setup in prop::collection::vec(op_strategy(), 0..20),
        inside in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut engine = TransactionEngine::new();
        engine.execute_many(setup.into_iter().map(Op::into_command));
        let before = engine.store().clone();

        engine.apply(Command::Begin);
        engine.execute_many(inside.into_iter().map(Op::into_command));
        prop_assert_eq!(engine.apply(Command::Rollback), Output::Unit);

        prop_assert_eq!(engine.store(), &before);
        prop_assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn count_matches_scan_for_any_sequence(
        cmds in prop::collection::vec(any_command(), 0..80),
    ) {
        let mut engine = TransactionEngine::new();
        for cmd in cmds {
            engine.apply(cmd);
            prop_assert!(engine.store().is_consistent());
        }

        for value in ["0", "1", "2", "3"] {
            let scanned = engine.store().iter().filter(|(_, v)| *v == value).count() as u64;
            prop_assert_eq!(engine.apply(count(value)), Output::Count(scanned));
        }
    }

    #[test]
    fn commit_keeps_every_change(
        inside in prop::collection::vec(op_strategy(), 0..40),
        depth in 1usize..5,
    ) {
        let mut reference = TransactionEngine::new();
        reference.execute_many(inside.iter().cloned().map(Op::into_command));

        let mut engine = TransactionEngine::new();
        for _ in 0..depth {
            engine.apply(Command::Begin);
        }
        engine.execute_many(inside.into_iter().map(Op::into_command));
        prop_assert_eq!(engine.apply(Command::Commit), Output::Unit);

        prop_assert_eq!(engine.store(), reference.store());
        prop_assert_eq!(engine.depth(), 0);
        prop_assert_eq!(engine.pending_undo(), 0);
    }
}
