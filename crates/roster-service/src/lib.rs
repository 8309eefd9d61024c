//! Roster services: meeting-pattern parsing, conflict detection, schedule
//! management, calendar export, and catalog search.
//!
//! Everything here is synchronous and free of I/O. Callers load rows, invoke
//! these functions, and persist or render the results.

pub mod catalog;
pub mod error;
pub mod export;
pub mod meeting;
pub mod schedule;
