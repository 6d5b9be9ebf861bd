//! Minimal xpath parsing for the attribute lookups row assembly needs.
//!
//! Paths look like `//ldml/dates/timeZoneNames/zone[@type="America/Los_Angeles"]/exemplarCity`.
//! Attribute values may contain `/`, so splitting is quote-aware.

use crate::constants::paths::{
    ANNOTATION_PREFIX, ATTR_ALT, ATTR_DRAFT, PROPOSED_DRAFT, PROPOSED_MARKER,
};

/// One element step of a parsed xpath.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XpathElement {
    /// Element name.
    pub name: String,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
}

impl XpathElement {
    /// Value of attribute `name` on this element.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parsed element steps of an xpath.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XpathParts {
    elements: Vec<XpathElement>,
}

impl XpathParts {
    /// Parse `xpath`; malformed attribute syntax ends parsing at that point.
    pub fn parse(xpath: &str) -> Self {
        let mut elements = Vec::new();
        let chars: Vec<char> = xpath.chars().collect();
        let mut pos = 0usize;
        while pos < chars.len() && chars[pos] == '/' {
            pos += 1;
        }
        while pos < chars.len() {
            let mut name = String::new();
            while pos < chars.len() && chars[pos] != '[' && chars[pos] != '/' {
                name.push(chars[pos]);
                pos += 1;
            }
            let mut attributes = Vec::new();
            while pos < chars.len() && chars[pos] == '[' {
                match parse_attribute(&chars, pos) {
                    Some((key, value, next)) => {
                        attributes.push((key, value));
                        pos = next;
                    }
                    None => {
                        elements.push(XpathElement { name, attributes });
                        return Self { elements };
                    }
                }
            }
            if !name.is_empty() {
                elements.push(XpathElement { name, attributes });
            }
            while pos < chars.len() && chars[pos] == '/' {
                pos += 1;
            }
        }
        Self { elements }
    }

    /// Element steps in order.
    pub fn elements(&self) -> &[XpathElement] {
        &self.elements
    }

    /// Final element step.
    pub fn last(&self) -> Option<&XpathElement> {
        self.elements.last()
    }

    /// Value of `attribute` on the last element called `element`.
    pub fn find_attribute(&self, element: &str, attribute: &str) -> Option<&str> {
        self.elements
            .iter()
            .rev()
            .find(|step| step.name == element)
            .and_then(|step| step.attribute(attribute))
    }
}

/// Parse `[@key="value"]` starting at `start` (which points at `[`).
fn parse_attribute(chars: &[char], start: usize) -> Option<(String, String, usize)> {
    let mut pos = start + 1;
    if chars.get(pos) != Some(&'@') {
        return None;
    }
    pos += 1;
    let mut key = String::new();
    while pos < chars.len() && chars[pos] != '=' {
        key.push(chars[pos]);
        pos += 1;
    }
    pos += 1;
    let quote = *chars.get(pos)?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    pos += 1;
    let mut value = String::new();
    while pos < chars.len() && chars[pos] != quote {
        value.push(chars[pos]);
        pos += 1;
    }
    pos += 1;
    if chars.get(pos) != Some(&']') {
        return None;
    }
    Some((key, value, pos + 1))
}

/// The `alt` attribute of the final element.
pub fn alt_of(xpath: &str) -> Option<String> {
    XpathParts::parse(xpath)
        .last()
        .and_then(|step| step.attribute(ATTR_ALT))
        .map(str::to_string)
}

/// Split an `alt` value into its alternate type and proposed suffix.
///
/// `variant-proposed-u3` gives `(Some("variant"), Some("proposed-u3"))`,
/// `proposed` gives `(None, Some("proposed"))`, `short` gives `(Some("short"), None)`.
pub fn parse_alt(alt: &str) -> (Option<String>, Option<String>) {
    match alt.find(PROPOSED_MARKER) {
        Some(idx) => {
            let alt_type = alt[..idx].trim_end_matches('-');
            let alt_type = (!alt_type.is_empty()).then(|| alt_type.to_string());
            (alt_type, Some(alt[idx..].to_string()))
        }
        None => (Some(alt.to_string()), None),
    }
}

/// Proposed suffix of a path, treating unproposed drafts as `proposed-draft`.
pub fn proposed_suffix(xpath: &str, full_path: &str) -> Option<String> {
    let proposed = alt_of(xpath).and_then(|alt| parse_alt(&alt).1);
    if proposed.is_some() {
        return proposed;
    }
    let draft = XpathParts::parse(full_path)
        .last()
        .and_then(|step| step.attribute(ATTR_DRAFT).map(str::to_string));
    match draft {
        Some(draft) if draft != "false" => Some(PROPOSED_DRAFT.to_string()),
        _ => None,
    }
}

/// Whether `xpath` is an annotation path.
pub fn is_annotation(xpath: &str) -> bool {
    xpath.starts_with(ANNOTATION_PREFIX)
}

/// Short code of a path: the last `type` attribute, else the final element name.
pub fn default_code(xpath: &str) -> String {
    let parts = XpathParts::parse(xpath);
    parts
        .elements()
        .iter()
        .rev()
        .find_map(|step| step.attribute("type"))
        .map(str::to_string)
        .or_else(|| parts.last().map(|step| step.name.clone()))
        .unwrap_or_else(|| "?".to_string())
}
