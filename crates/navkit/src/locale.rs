//! In-memory label translations.

use std::collections::HashMap;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tracing::info;

use crate::context::Translator;

/// Translation catalog for one language.
///
/// Lookups fall back to the source string, so untranslated labels render
/// unchanged.
#[derive(Default)]
pub struct Catalog {
    language: String,
    entries: DashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: DashMap::new(),
        }
    }

    /// Create a catalog from source → translation pairs.
    pub fn from_pairs<I, K, V>(language: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let catalog = Self::new(language);
        for (source, translation) in pairs {
            catalog.insert(source, translation);
        }
        catalog
    }

    /// Load translations from a JSON object of source → translation.
    pub fn load_json(&self, json: &str) -> Result<usize> {
        let map: HashMap<String, String> =
            serde_json::from_str(json).context("invalid translation catalog")?;
        let count = map.len();
        for (source, translation) in map {
            self.entries.insert(source, translation);
        }
        info!(language = %self.language, count = count, "loaded menu translations");
        Ok(count)
    }

    pub fn insert(&self, source: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(source.into(), translation.into());
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .map(|t| t.clone())
            .unwrap_or_else(|| key.to_string())
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("language", &self.language)
            .field("size", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_and_passes_unknown() {
        let catalog = Catalog::from_pairs("it", [("Home", "Inizio")]);
        assert_eq!(catalog.translate("Home"), "Inizio");
        assert_eq!(catalog.translate("About"), "About");
    }

    #[test]
    fn load_json_counts_entries() {
        let catalog = Catalog::new("it");
        let count = catalog.load_json(r#"{"Blog": "Diario", "News": "Notizie"}"#).unwrap();
        assert_eq!(count, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.translate("News"), "Notizie");
    }

    #[test]
    fn load_json_rejects_garbage() {
        assert!(Catalog::new("it").load_json("[1, 2]").is_err());
    }
}
