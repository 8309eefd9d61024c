//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::{Property, names};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTIMEZONE component.
    Timezone,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Timezone => "VTIMEZONE",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An iCalendar component.
///
/// Components contain properties and nested sub-components: a VCALENDAR holds
/// a VTIMEZONE and VEVENTs, and the VTIMEZONE holds STANDARD and DAYLIGHT.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Properties in insertion order.
    pub properties: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTIMEZONE component.
    #[must_use]
    pub fn timezone() -> Self {
        Self::new(ComponentKind::Timezone)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Builder-style [`add_property`](Self::add_property).
    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.add_property(prop);
        self
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }
}

/// Top-level iCalendar object.
///
/// A convenience wrapper around a VCALENDAR component.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates a new empty iCalendar with required properties.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::text(names::VERSION, "2.0"));
        root.add_property(Property::text(names::PRODID, prodid));
        root.add_property(Property::text(names::CALSCALE, "GREGORIAN"));
        Self { root }
    }

    /// Adds a VEVENT component.
    pub fn add_event(&mut self, event: Component) {
        self.root.add_child(event);
    }

    /// Adds a VTIMEZONE component.
    pub fn add_timezone(&mut self, tz: Component) {
        self.root.add_child(tz);
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Event)
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new(roster_core::constants::DEFAULT_PRODID)
    }
}
