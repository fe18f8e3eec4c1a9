#[path = "../common/mod.rs"]
mod common;

mod basic_operations;
mod nested_transactions;
mod properties;
mod trace;
