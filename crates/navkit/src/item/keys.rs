//! Reserved mapping keys.

use std::collections::BTreeSet;

/// Keys every builder interprets itself rather than passing through.
pub const BASE_RESERVED: [&str; 10] = [
    "route", "url", "href", "secure", "label", "icon", "badge", "visible", "active", "disabled",
];

/// The set of mapping keys a builder consumes.
///
/// Built once per style from [`BASE_RESERVED`] plus the variant's own
/// additions. Keys outside the set become HTML attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedKeys {
    keys: BTreeSet<String>,
    submenu: Option<String>,
    link_options: Option<String>,
}

impl ReservedKeys {
    pub fn base() -> Self {
        Self {
            keys: BASE_RESERVED.iter().map(|k| (*k).to_string()).collect(),
            submenu: None,
            link_options: None,
        }
    }

    /// Reserve `key` as the key holding nested entries.
    pub fn with_submenu(mut self, key: &str) -> Self {
        self.keys.insert(key.to_string());
        self.submenu = Some(key.to_string());
        self
    }

    /// Reserve `key` as the key holding anchor-only attributes.
    pub fn with_link_options(mut self, key: &str) -> Self {
        self.keys.insert(key.to_string());
        self.link_options = Some(key.to_string());
        self
    }

    /// Reserve additional keys that are consumed and dropped.
    pub fn with<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn submenu_key(&self) -> Option<&str> {
        self.submenu.as_deref()
    }

    pub fn link_options_key(&self) -> Option<&str> {
        self.link_options.as_deref()
    }
}

impl Default for ReservedKeys {
    fn default() -> Self {
        Self::base()
    }
}
