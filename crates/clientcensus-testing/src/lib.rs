//! Testing infrastructure for clientcensus tests.
//!
//! This crate provides:
//! - `fixtures`: session rows shaped like the ones the store returns
//! - `users`: an in-memory `UserDirectory`
//! - `logs`: capture of log events emitted by engine code
//! - `TestWorld`: an isolated directory with config files for CLI tests

pub mod fixtures;
pub mod logs;
pub mod users;
pub mod world;

pub use logs::capture_logs;
pub use users::InMemoryUsers;
pub use world::TestWorld;
