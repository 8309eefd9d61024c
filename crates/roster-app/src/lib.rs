//! The `roster` command-line front end: row loading, term resolution, and the
//! `search`, `course` and `export` commands.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod loader;
