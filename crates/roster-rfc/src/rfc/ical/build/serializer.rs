//! iCalendar serializer (RFC 5545).
//!
//! Serializes iCalendar structures to compliant text format.

use super::escape::escape_text;
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Parameter, Property, Value};

/// Serializes an iCalendar document to a string.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

/// Serializes a component to a string.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = String::new();

    result.push_str(&fold_line(&format!("BEGIN:{}", component.name())));

    for prop in canonical_property_order(&component.properties, component.kind) {
        result.push_str(&serialize_property(prop));
    }

    for child in canonical_component_order(&component.children) {
        result.push_str(&serialize_component(child));
    }

    result.push_str(&fold_line(&format!("END:{}", component.name())));

    result
}

/// Serializes a property to a folded, CRLF-terminated content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in canonical_param_order(&prop.params) {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    line.push_str(&serialize_value(&prop.value));

    fold_line(&line)
}

fn serialize_parameter(param: &Parameter) -> String {
    let values: Vec<String> = param.values.iter().map(|v| quote_param_value(v)).collect();
    format!("{}={}", param.name, values.join(","))
}

/// Quotes a parameter value containing `:`, `;` or `,`.
fn quote_param_value(s: &str) -> String {
    if s.chars().any(|c| matches!(c, ':' | ';' | ',')) {
        format!("\"{}\"", s.replace('"', ""))
    } else {
        s.to_string()
    }
}

/// TEXT is escaped; every other value type is already in lexical form.
fn serialize_value(value: &Value) -> String {
    match value {
        Value::Text(s) => escape_text(s),
        other => other.to_string(),
    }
}

/// Returns properties in canonical order for deterministic output.
fn canonical_property_order(props: &[Property], kind: ComponentKind) -> Vec<&Property> {
    let order: &[&str] = match kind {
        ComponentKind::Calendar => &["VERSION", "PRODID", "CALSCALE", "METHOD"],
        ComponentKind::Event => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "RRULE",
            "SUMMARY",
            "DESCRIPTION",
            "LOCATION",
            "CATEGORIES",
        ],
        ComponentKind::Timezone => &["TZID"],
        ComponentKind::Standard | ComponentKind::Daylight => &[
            "DTSTART",
            "TZOFFSETFROM",
            "TZOFFSETTO",
            "RRULE",
            "TZNAME",
        ],
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());

    for &name in order {
        ordered.extend(props.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }

    // Remaining properties keep their insertion order
    ordered.extend(
        props
            .iter()
            .filter(|p| !order.iter().any(|n| p.name.eq_ignore_ascii_case(n))),
    );

    ordered
}

/// Returns parameters in canonical order.
fn canonical_param_order(params: &[Parameter]) -> Vec<&Parameter> {
    const ORDER: [&str; 2] = ["VALUE", "TZID"];

    let mut ordered: Vec<&Parameter> = Vec::with_capacity(params.len());
    for name in ORDER {
        ordered.extend(params.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }
    ordered.extend(
        params
            .iter()
            .filter(|p| !ORDER.iter().any(|n| p.name.eq_ignore_ascii_case(n))),
    );
    ordered
}

/// Time zones precede events so TZID references resolve on a single pass.
/// Within a kind, insertion order is kept.
fn canonical_component_order(children: &[Component]) -> Vec<&Component> {
    let rank = |c: &Component| match c.kind {
        ComponentKind::Timezone => 0,
        ComponentKind::Standard => 1,
        ComponentKind::Daylight => 2,
        ComponentKind::Event => 3,
        ComponentKind::Calendar => 4,
    };
    let mut ordered: Vec<&Component> = children.iter().collect();
    ordered.sort_by_key(|c| rank(c));
    ordered
}
