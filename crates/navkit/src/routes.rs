//! Named routes and URL generation.
//!
//! Route definitions are collected from JSON sources (one array per source)
//! and resolved against the current request by [`SiteUrls`].

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::context::{RequestInfo, UrlGenerator};
use crate::item::Param;

/// A named route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Route name used by menu items (e.g., "blog.post").
    pub name: String,
    /// URL path pattern (e.g., "/blog/:slug").
    pub path: String,
}

/// Registry of named routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Build a table from JSON arrays of [`RouteDefinition`]s.
    ///
    /// Each element of `sources` is a (source_name, json_array) tuple. A
    /// source that fails to parse is logged and skipped.
    pub fn from_json_sources(sources: Vec<(String, String)>) -> Self {
        let mut table = Self::new();

        for (source, json) in sources {
            match serde_json::from_str::<Vec<RouteDefinition>>(&json) {
                Ok(routes) => {
                    for route in routes {
                        table.register(route);
                    }
                }
                Err(e) => {
                    warn!(
                        source = %source,
                        error = %e,
                        "failed to parse route definitions"
                    );
                }
            }
        }

        debug!(routes = table.len(), "built route table");
        table
    }

    /// Register a route. A later definition replaces an earlier one.
    pub fn register(&mut self, route: RouteDefinition) {
        self.routes.insert(route.name, route.path);
    }

    /// Get a route pattern by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Build the path for a named route.
    ///
    /// Placeholders take the named parameter of the same name, else the next
    /// positional one. Leftover positional parameters are appended as path
    /// segments and leftover named ones become the query string.
    pub fn path_for(&self, name: &str, params: &[Param]) -> Option<String> {
        let pattern = self.get(name)?;
        Some(fill_pattern(name, pattern, params))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Substitute parameters into a route pattern.
///
/// Pattern: "/blog/:slug/edit", params: [Named("slug", "my post")]
/// Result: "/blog/my%20post/edit"
fn fill_pattern(name: &str, pattern: &str, params: &[Param]) -> String {
    let mut named: Vec<(&str, &str)> = Vec::new();
    let mut positional: Vec<&str> = Vec::new();
    for param in params {
        match param {
            Param::Named(k, v) => named.push((k.as_str(), v.as_str())),
            Param::Positional(v) => positional.push(v),
        }
    }
    let mut positional = positional.into_iter();

    let mut segments: Vec<String> = Vec::new();
    for part in pattern.trim_matches('/').split('/').filter(|p| !p.is_empty()) {
        let Some(placeholder) = part.strip_prefix(':') else {
            segments.push(part.to_string());
            continue;
        };

        let value = match named.iter().position(|(k, _)| *k == placeholder) {
            Some(i) => Some(named.remove(i).1),
            None => positional.next(),
        };
        match value {
            Some(v) => segments.push(urlencoding::encode(v).into_owned()),
            None => {
                warn!(route = %name, parameter = %placeholder, "missing route parameter");
                segments.push(part.to_string());
            }
        }
    }
    segments.extend(positional.map(|v| urlencoding::encode(v).into_owned()));

    let mut path = format!("/{}", segments.join("/"));
    append_query(&mut path, &named);
    path
}

/// Append `key=value` pairs as a percent-encoded query string.
fn append_query(target: &mut String, pairs: &[(&str, &str)]) {
    if pairs.is_empty() {
        return;
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    target.push(if target.contains('?') { '&' } else { '?' });
    target.push_str(&query);
}

/// URL generator bound to one request.
#[derive(Debug, Clone)]
pub struct SiteUrls {
    routes: Arc<RouteTable>,
    root: String,
    current: String,
}

impl SiteUrls {
    pub fn new(routes: Arc<RouteTable>, request: &dyn RequestInfo) -> Self {
        Self {
            routes,
            root: request.root().to_string(),
            current: request.url().to_string(),
        }
    }

    fn root_for(&self, secure: bool) -> String {
        match self.root.strip_prefix("http://") {
            Some(rest) if secure => format!("https://{rest}"),
            _ => self.root.clone(),
        }
    }
}

/// Whether a path is already a complete URL and must be left alone.
fn is_absolute(path: &str) -> bool {
    ["#", "//", "mailto:", "tel:"]
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || Url::parse(path).is_ok()
}

impl UrlGenerator for SiteUrls {
    fn to(&self, path: &str, params: &[Param], secure: bool) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        let mut segments: Vec<String> = Vec::new();
        let trimmed = path.trim_matches('/');
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
        let mut named: Vec<(&str, &str)> = Vec::new();
        for param in params {
            match param {
                Param::Positional(v) => segments.push(urlencoding::encode(v).into_owned()),
                Param::Named(k, v) => named.push((k.as_str(), v.as_str())),
            }
        }

        let mut url = self.root_for(secure);
        if !segments.is_empty() {
            url.push('/');
            url.push_str(&segments.join("/"));
        }
        append_query(&mut url, &named);
        url
    }

    fn route(&self, name: &str, params: &[Param]) -> String {
        match self.routes.path_for(name, params) {
            Some(path) => {
                let path = path.trim_start_matches('/');
                if path.is_empty() {
                    self.root.clone()
                } else {
                    format!("{}/{}", self.root, path)
                }
            }
            None => {
                warn!(route = %name, "route not defined");
                "#".to_string()
            }
        }
    }

    fn current(&self) -> String {
        self.current.clone()
    }
}
