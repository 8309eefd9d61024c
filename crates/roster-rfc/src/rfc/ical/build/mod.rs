//! iCalendar serialization (RFC 5545).
//!
//! - Escape: TEXT value escaping
//! - Fold: content line folding at 75 octets
//! - Serializer: document serialization with canonical property ordering

mod escape;
mod fold;
mod serializer;

pub use escape::escape_text;
pub use fold::fold_line;
pub use serializer::{serialize, serialize_component, serialize_property};
