//! Roster core: configuration, errors, constants, and the domain model shared
//! by every other crate in the workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
