//! Menu item model.
//!
//! Callers describe menus as an ordered list of keyed [`Entry`] values.
//! Entries come in several shapes (plain strings, option structs, divider
//! markers, objects implementing [`MenuItem`], raw JSON) and are normalized
//! by the builder into [`Node`]s before rendering.

pub(crate) mod json;
mod keys;
mod lazy;

use std::fmt;
use std::sync::Arc;

use crate::html::Attributes;

pub use keys::{BASE_RESERVED, ReservedKeys};
pub use lazy::Lazy;

/// The string that stands for a divider in every input form.
pub const DIVIDER: &str = "-";

/// Key of an entry within its list.
///
/// A named key doubles as the item label (`"Home" => "/"`); positional keys
/// carry no meaning beyond order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Index(usize),
    Name(String),
}

impl ItemKey {
    /// Parse a mapping key. Canonical decimal keys (`"0"`, `"12"`) are
    /// positional; anything else, including `"007"` and `"+1"`, is a name.
    pub fn parse(key: &str) -> Self {
        match key.parse::<usize>() {
            Ok(index) if index.to_string() == key => Self::Index(index),
            _ => Self::Name(key.to_string()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// A URL or route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Positional(String),
    Named(String, String),
}

/// A `url` or `route` destination: a path or route name plus parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub params: Vec<Param>,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a positional parameter.
    pub fn param(mut self, value: impl Into<String>) -> Self {
        self.params.push(Param::Positional(value.into()));
        self
    }

    /// Append a named parameter.
    pub fn named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Param::Named(key.into(), value.into()));
        self
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Nested menu content of an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Submenu {
    /// Entries rendered inline beneath the item.
    Items(Items),
    /// Markup produced by another builder (the nav bar's dropdowns).
    Rendered(String),
}

/// Options of a link item.
///
/// This is both the input struct for typed callers and the canonical form
/// produced by normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemOptions {
    pub label: Option<String>,
    pub href: Option<String>,
    pub url: Option<Target>,
    pub route: Option<Target>,
    /// Force https when resolving `url`.
    pub secure: bool,
    pub icon: Option<String>,
    pub badge: Option<Lazy<String>>,
    pub visible: Option<Lazy<bool>>,
    pub active: Option<Lazy<bool>>,
    pub disabled: Option<Lazy<bool>>,
    pub submenu: Option<Submenu>,
    /// Attributes applied to the anchor only.
    pub link_options: Attributes,
    /// Pass-through attributes.
    pub attributes: Attributes,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn url(mut self, url: impl Into<Target>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn route(mut self, route: impl Into<Target>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<Lazy<String>>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn visible(mut self, visible: impl Into<Lazy<bool>>) -> Self {
        self.visible = Some(visible.into());
        self
    }

    pub fn active(mut self, active: impl Into<Lazy<bool>>) -> Self {
        self.active = Some(active.into());
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Lazy<bool>>) -> Self {
        self.disabled = Some(disabled.into());
        self
    }

    /// Attach nested entries.
    pub fn items(mut self, items: impl Into<Items>) -> Self {
        self.submenu = Some(Submenu::Items(items.into()));
        self
    }

    pub fn link_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.link_options.insert(name, value);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Whether the item opens a submenu.
    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }
}

/// Anything that can describe itself as a menu item.
pub trait MenuItem: Send + Sync {
    fn menu_item_options(&self) -> ItemOptions;
}

/// A raw menu entry.
#[derive(Clone)]
pub enum Entry {
    Divider,
    /// A bare string: a link destination, or a header in dropdowns.
    Text(String),
    Options(ItemOptions),
    Item(Arc<dyn MenuItem>),
    /// Undecoded JSON, interpreted with the reserved keys of the builder
    /// that normalizes it.
    Json(serde_json::Value),
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Divider => f.write_str("Divider"),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Options(o) => f.debug_tuple("Options").field(o).finish(),
            Self::Item(_) => f.write_str("Item(..)"),
            Self::Json(v) => f.debug_tuple("Json").field(v).finish(),
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Divider, Self::Divider) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Options(a), Self::Options(b)) => a == b,
            (Self::Item(a), Self::Item(b)) => Arc::ptr_eq(a, b),
            (Self::Json(a), Self::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ItemOptions> for Entry {
    fn from(options: ItemOptions) -> Self {
        Self::Options(options)
    }
}

impl From<Arc<dyn MenuItem>> for Entry {
    fn from(item: Arc<dyn MenuItem>) -> Self {
        Self::Item(item)
    }
}

impl From<serde_json::Value> for Entry {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Node> for Entry {
    fn from(node: Node) -> Self {
        match node {
            Node::Divider => Self::Divider,
            Node::Header(title) => Self::Text(title),
            Node::Link(options) => Self::Options(options),
        }
    }
}

/// A normalized menu entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Divider,
    /// Non-interactive section label (dropdowns only).
    Header(String),
    Link(ItemOptions),
}

impl Node {
    pub fn is_marker(&self) -> bool {
        !matches!(self, Self::Link(_))
    }
}

/// Ordered, keyed list of raw entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items(Vec<(ItemKey, Entry)>);

impl Items {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry under the next positional key.
    pub fn push(mut self, entry: impl Into<Entry>) -> Self {
        let index = self.0.len();
        self.0.push((ItemKey::Index(index), entry.into()));
        self
    }

    /// Append an entry whose key doubles as its label.
    pub fn labeled(mut self, label: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.0.push((ItemKey::Name(label.into()), entry.into()));
        self
    }

    /// Append a `label => url` link.
    pub fn link(self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.labeled(label, Entry::Text(url.into()))
    }

    pub fn divider(self) -> Self {
        self.push(Entry::Divider)
    }

    /// Append a bare string; dropdowns render it as a section header.
    pub fn header(self, title: impl Into<String>) -> Self {
        self.push(Entry::Text(title.into()))
    }

    pub fn insert(&mut self, key: ItemKey, entry: impl Into<Entry>) {
        self.0.push((key, entry.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &Entry)> {
        self.0.iter().map(|(k, e)| (k, e))
    }
}

impl FromIterator<Entry> for Items {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .enumerate()
                .map(|(i, entry)| (ItemKey::Index(i), entry))
                .collect(),
        )
    }
}

impl From<Vec<Entry>> for Items {
    fn from(entries: Vec<Entry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Vec<Node>> for Items {
    fn from(nodes: Vec<Node>) -> Self {
        nodes.into_iter().map(Entry::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_canonical_numbers_are_positional() {
        assert_eq!(ItemKey::parse("0"), ItemKey::Index(0));
        assert_eq!(ItemKey::parse("7"), ItemKey::Index(7));
        assert_eq!(ItemKey::parse("007"), ItemKey::Name("007".to_string()));
        assert_eq!(ItemKey::parse("+1"), ItemKey::Name("+1".to_string()));
        assert_eq!(ItemKey::parse("-1"), ItemKey::Name("-1".to_string()));
        assert_eq!(ItemKey::parse("Home"), ItemKey::Name("Home".to_string()));
    }
}
