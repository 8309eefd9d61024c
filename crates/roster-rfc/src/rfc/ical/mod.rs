//! iCalendar (RFC 5545) support.
//!
//! - `core`: component, property, parameter and value types
//! - `build`: escaping, line folding, and serialization
//! - `timezone`: the fixed zone every exported event is anchored to

pub mod build;
pub mod core;
pub mod timezone;
