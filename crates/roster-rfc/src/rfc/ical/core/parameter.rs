//! iCalendar parameter types (RFC 5545 §3.2).

/// A single iCalendar property parameter.
///
/// For example: `DTSTART;TZID=America/Los_Angeles:20250106T091500`
///
/// The `TZID` is a parameter with name `TZID` and value `America/Los_Angeles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values, usually exactly one.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(tzid: impl Into<String>) -> Self {
        Self::new("TZID", tzid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tzid_parameter() {
        let param = Parameter::tzid("America/Los_Angeles");
        assert_eq!(param.name, "TZID");
        assert_eq!(param.values, vec!["America/Los_Angeles".to_string()]);
    }

    #[test]
    fn name_is_uppercased() {
        assert_eq!(Parameter::new("value", "DATE").name, "VALUE");
    }
}
