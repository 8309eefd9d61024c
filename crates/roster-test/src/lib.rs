//! Roster - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use `roster_test::`
//! paths, plus shared fixtures.

pub use roster_app as app;
pub use roster_core as core;
pub use roster_rfc as rfc;
pub use roster_service as service;

pub mod fixtures;
