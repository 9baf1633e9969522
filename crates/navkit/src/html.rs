//! HTML attribute maps and escaping.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTML-escape a string for safe output in text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Ordered HTML attribute map.
///
/// Attributes render in insertion order. Re-inserting an existing name
/// replaces its value but keeps its position, so merged output stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Create a map holding only a `class` attribute.
    pub fn class(class: impl Into<String>) -> Self {
        Self::new().with("class", class)
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append a class name to the `class` attribute, creating it if absent.
    pub fn append_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        match self.0.get_mut("class") {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some(existing) => existing.push_str(class),
            None => {
                self.0.insert("class".to_string(), class.to_string());
            }
        }
    }

    /// Merge `extra` into this map.
    ///
    /// An extra `class` is appended to the existing class list; every other
    /// attribute overrides the current value.
    pub fn merge(&mut self, extra: &Attributes) {
        for (name, value) in &extra.0 {
            if name == "class" {
                self.append_class(value);
            } else {
                self.0.insert(name.clone(), value.clone());
            }
        }
    }

    /// Keep only the attributes for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.0.retain(|name, value| keep(name.as_str(), value.as_str()));
    }

    /// Convert a JSON object into attributes.
    ///
    /// Arrays join their string members with spaces (the usual shape of a
    /// class list); other scalars are stringified. Non-objects yield an
    /// empty map.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::new();
        };
        map.iter()
            .map(|(k, v)| (k.clone(), attribute_value(v)))
            .collect()
    }
}

/// Stringify a JSON value for use as an attribute value.
pub(crate) fn attribute_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Array(arr) => arr
            .iter()
            .map(attribute_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => value.to_string(),
    }
}

/// Whether `name` can be written into a tag as is.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

impl fmt::Display for Attributes {
    /// Render as ` name="value"` pairs with escaped values. Names that
    /// could break out of the tag are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.0.iter().filter(|(name, _)| is_attribute_name(name)) {
            write!(f, " {}=\"{}\"", name, html_escape(value))?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn render_keeps_insertion_order_and_escapes() {
        let attrs = Attributes::new()
            .with("href", "/a?b=1&c=2")
            .with("class", "nav")
            .with("title", "say \"hi\"");
        assert_eq!(
            attrs.to_string(),
            r#" href="/a?b=1&amp;c=2" class="nav" title="say &quot;hi&quot;""#
        );
    }

    #[test]
    fn empty_map_renders_nothing() {
        assert_eq!(Attributes::new().to_string(), "");
    }

    #[test]
    fn append_class_creates_then_extends() {
        let mut attrs = Attributes::new();
        attrs.append_class("nav-item");
        attrs.append_class("active");
        attrs.append_class("");
        assert_eq!(attrs.get("class"), Some("nav-item active"));
    }

    #[test]
    fn merge_appends_class_and_overrides_rest() {
        let mut attrs = Attributes::new().with("href", "#").with("class", "nav-link");
        let extra = Attributes::new()
            .with("class", "dropdown-toggle")
            .with("data-toggle", "dropdown")
            .with("href", "/x");
        attrs.merge(&extra);
        assert_eq!(
            attrs.to_string(),
            r#" href="/x" class="nav-link dropdown-toggle" data-toggle="dropdown""#
        );
    }

    #[test]
    fn unsafe_names_are_not_rendered() {
        let attrs = Attributes::new()
            .with("x onmouseover=alert(1) y", "z")
            .with("a\"b", "c")
            .with("", "empty")
            .with("rel", "me")
            .with("data-x/y", "1");
        assert_eq!(attrs.to_string(), r#" rel="me""#);
        assert!(is_attribute_name("data-toggle"));
        assert!(is_attribute_name("aria-label"));
        assert!(!is_attribute_name("on<b>"));
    }

    #[test]
    fn retain_filters_by_name() {
        let mut attrs = Attributes::new()
            .with("href", "/x")
            .with("rel", "me")
            .with("label", "y");
        attrs.retain(|name, _| name != "href" && name != "label");
        assert_eq!(attrs.to_string(), r#" rel="me""#);
    }

    #[test]
    fn from_json_joins_arrays() {
        let value = serde_json::json!({"class": ["a", "b"], "tabindex": 3, "hidden": false});
        let attrs = Attributes::from_json(&value);
        assert_eq!(attrs.get("class"), Some("a b"));
        assert_eq!(attrs.get("tabindex"), Some("3"));
        assert_eq!(attrs.get("hidden"), Some(""));
    }
}
