//! iCalendar core models (RFC 5545).
//!
//! Only what calendar export produces is modelled: components with ordered
//! properties and children, typed values, and weekly/yearly recurrence rules.

mod component;
mod parameter;
mod property;
mod recur;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::Parameter;
pub use property::{Property, names};
pub use recur::{Frequency, Recur, WeekdayNum, weekday_code};
pub use value::{UtcOffset, Value};
