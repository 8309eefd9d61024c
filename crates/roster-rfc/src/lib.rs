//! Standards-facing formats for Roster: the iCalendar (RFC 5545) document
//! model and serializer used by calendar export.

pub mod error;
pub mod rfc;
