//! JSON decoding of menu input.
//!
//! Templates and configuration files describe menus as JSON. Collections
//! are decoded eagerly; individual mappings are decoded only when a builder
//! normalizes them, because which keys are reserved depends on the builder.

use serde_json::{Map, Value};

use super::{DIVIDER, Entry, ItemKey, ItemOptions, Items, Lazy, Param, ReservedKeys, Submenu, Target};
use crate::error::{MenuError, MenuResult, json_kind};
use crate::html::{Attributes, attribute_value};

impl Items {
    /// Decode a JSON collection.
    ///
    /// Arrays yield positional entries. Objects keep their key order; numeric
    /// keys are positional and every other key names its entry.
    pub fn from_json(value: &Value) -> MenuResult<Self> {
        match value {
            Value::Array(arr) => Ok(arr.iter().cloned().map(Entry::Json).collect()),
            Value::Object(map) => {
                let mut items = Items::new();
                for (key, value) in map {
                    items.insert(ItemKey::parse(key), Entry::Json(value.clone()));
                }
                Ok(items)
            }
            other => Err(MenuError::InvalidItemsCollection {
                found: json_kind(other),
            }),
        }
    }
}

impl Target {
    /// Decode a destination: `"path"` or `["path", positional..., {named...}]`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(parts) => {
                let (first, rest) = parts.split_first()?;
                let mut target = Target::new(attribute_value(first));
                for part in rest {
                    match part {
                        Value::Object(named) => {
                            for (k, v) in named {
                                target.params.push(Param::Named(k.clone(), attribute_value(v)));
                            }
                        }
                        other => target.params.push(Param::Positional(attribute_value(other))),
                    }
                }
                Some(target)
            }
            other => Some(Target::new(attribute_value(other))),
        }
    }
}

impl ItemOptions {
    /// Decode a JSON mapping.
    ///
    /// Reserved keys fill the typed fields; every other key is passed
    /// through as an attribute. `null` values count as absent.
    pub fn from_json_map(map: &Map<String, Value>, keys: &ReservedKeys) -> MenuResult<Self> {
        let mut options = ItemOptions::new();

        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            if !keys.contains(key) {
                options.attributes.insert(key.clone(), attribute_value(value));
                continue;
            }
            match key.as_str() {
                "label" => options.label = Some(attribute_value(value)),
                "href" => options.href = Some(attribute_value(value)),
                "url" => options.url = Target::from_json(value),
                "route" => options.route = Target::from_json(value),
                "secure" => options.secure = truthy(value),
                "icon" => options.icon = Some(attribute_value(value)),
                "badge" => options.badge = Some(Lazy::Value(attribute_value(value))),
                "visible" => options.visible = Some(Lazy::Value(truthy(value))),
                "active" => options.active = Some(Lazy::Value(truthy(value))),
                "disabled" => options.disabled = Some(Lazy::Value(truthy(value))),
                k if keys.submenu_key() == Some(k) => {
                    options.submenu = Some(Submenu::Items(Items::from_json(value)?));
                }
                k if keys.link_options_key() == Some(k) => {
                    options.link_options = Attributes::from_json(value);
                }
                _ => {}
            }
        }

        Ok(options)
    }
}

/// Decode one JSON entry into a divider, bare string or option set.
pub(crate) fn decode_entry(key: &ItemKey, value: &Value, keys: &ReservedKeys) -> MenuResult<Entry> {
    match value {
        Value::String(s) if s == DIVIDER => Ok(Entry::Divider),
        Value::String(s) => Ok(Entry::Text(s.clone())),
        Value::Object(map) => Ok(Entry::Options(ItemOptions::from_json_map(map, keys)?)),
        other => Err(MenuError::InvalidItemType {
            key: key.to_string(),
            found: json_kind(other),
        }),
    }
}

/// Loose truthiness: `false`, `0`, `""`, `"0"`, `null` and `[]` are false.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(_) => true,
    }
}
