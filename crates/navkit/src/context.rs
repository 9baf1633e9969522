//! Collaborators consumed while rendering: the current request, URL
//! generation and translation.
//!
//! Builders never reach for global state. Everything request-dependent is
//! passed in through a [`MenuEnv`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::item::Param;

/// Read access to the request being served.
pub trait RequestInfo: Send + Sync {
    /// Scheme and authority, e.g. `http://localhost:3000`.
    fn root(&self) -> &str;

    /// Path without surrounding slashes, or `/` at the site root.
    fn path(&self) -> &str;

    /// Full URL without query string or trailing slash.
    fn url(&self) -> &str;

    /// Value of a query string parameter.
    fn query(&self, key: &str) -> Option<&str>;
}

/// URL and route generation.
pub trait UrlGenerator: Send + Sync {
    /// Absolute URL for a path.
    fn to(&self, path: &str, params: &[Param], secure: bool) -> String;

    /// Absolute URL for a named route.
    fn route(&self, name: &str, params: &[Param]) -> String;

    /// URL of the current page.
    fn current(&self) -> String;
}

/// Label translation.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Immutable snapshot of the request a menu is rendered for.
///
/// Serializable so handlers can put it in a template context and template
/// functions can read it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSnapshot {
    pub root: String,
    pub path: String,
    pub url: String,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl RequestSnapshot {
    /// Build a snapshot from a root URL and a request path.
    pub fn new(root: impl Into<String>, path: &str) -> Self {
        let root = root.into().trim_end_matches('/').to_string();
        let trimmed = path.trim_matches('/');
        let (path, url) = if trimmed.is_empty() {
            ("/".to_string(), root.clone())
        } else {
            (trimmed.to_string(), format!("{root}/{trimmed}"))
        };

        Self {
            root,
            path,
            url,
            query: BTreeMap::new(),
        }
    }

    /// Add a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Parse an absolute URL. Repeated query keys keep the last value.
    pub fn from_url(raw: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(raw)?;

        let mut root = format!("{}://{}", parsed.scheme(), parsed.host_str().unwrap_or_default());
        if let Some(port) = parsed.port() {
            root.push_str(&format!(":{port}"));
        }

        let mut snapshot = Self::new(root, parsed.path());
        for (key, value) in parsed.query_pairs() {
            snapshot.query.insert(key.into_owned(), value.into_owned());
        }
        Ok(snapshot)
    }
}

impl RequestInfo for RequestSnapshot {
    fn root(&self) -> &str {
        &self.root
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// The collaborators a builder renders against.
///
/// Cheap to clone; everything is behind `Arc`.
#[derive(Clone)]
pub struct MenuEnv {
    request: Arc<dyn RequestInfo>,
    urls: Option<Arc<dyn UrlGenerator>>,
    translator: Option<Arc<dyn Translator>>,
}

impl MenuEnv {
    pub fn new(request: Arc<dyn RequestInfo>) -> Self {
        Self {
            request,
            urls: None,
            translator: None,
        }
    }

    pub fn with_urls(mut self, urls: Arc<dyn UrlGenerator>) -> Self {
        self.urls = Some(urls);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn request(&self) -> &dyn RequestInfo {
        self.request.as_ref()
    }

    pub fn urls(&self) -> Option<&dyn UrlGenerator> {
        self.urls.as_deref()
    }

    pub fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }
}

impl fmt::Debug for MenuEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEnv")
            .field("url", &self.request.url())
            .field("urls", &self.urls.is_some())
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_from_url_splits_root_path_and_query() {
        let request = RequestSnapshot::from_url("http://localhost/foo/?bar=baz&n=1&n=2").unwrap();
        assert_eq!(request.root(), "http://localhost");
        assert_eq!(request.path(), "foo");
        assert_eq!(request.url(), "http://localhost/foo");
        assert_eq!(request.query("bar"), Some("baz"));
        assert_eq!(request.query("n"), Some("2"));
        assert_eq!(request.query("missing"), None);
    }

    #[test]
    fn snapshot_at_root() {
        let request = RequestSnapshot::from_url("https://example.com:8443/").unwrap();
        assert_eq!(request.root(), "https://example.com:8443");
        assert_eq!(request.path(), "/");
        assert_eq!(request.url(), "https://example.com:8443");
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let request = RequestSnapshot::new("http://localhost", "/a/b").with_query("page", "2");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["url"], "http://localhost/a/b");
        let back: RequestSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn invalid_url_is_an_error() {
        assert!(RequestSnapshot::from_url("/relative").is_err());
    }
}
