//! Visible, disabled and active state of menu entries.

use std::borrow::Cow;

use url::Url;

use crate::context::RequestInfo;
use crate::item::{ItemOptions, Node};

use super::MenuBuilder;

impl ItemOptions {
    /// Resolve `visible`, defaulting to true.
    pub fn is_visible(&self) -> bool {
        self.visible.as_ref().is_none_or(|v| v.resolve())
    }

    /// Resolve `disabled`, defaulting to false.
    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().is_some_and(|d| d.resolve())
    }
}

impl Node {
    /// Markers are always visible.
    pub fn is_visible(&self) -> bool {
        match self {
            Node::Link(options) => options.is_visible(),
            _ => true,
        }
    }

    /// Markers are never disabled.
    pub fn is_disabled(&self) -> bool {
        match self {
            Node::Link(options) => options.is_disabled(),
            _ => false,
        }
    }
}

impl MenuBuilder {
    /// Whether `href` points at the page being viewed.
    ///
    /// An explicit `active` option wins. Otherwise the href is compared to
    /// the request URL ignoring a trailing slash; a query string in the href
    /// must be matched by the request's query parameters, extra request
    /// parameters are ignored. Relative hrefs are resolved against the site
    /// root first.
    pub fn is_active(&self, href: &str, options: &ItemOptions) -> bool {
        if let Some(active) = &options.active {
            return active.resolve();
        }

        if href.is_empty() || href == "#" {
            return false;
        }

        let request = self.env().request();

        if href == request.root() {
            return request.path() == "/";
        }

        let path = match href.split_once('?') {
            Some((path, query)) => {
                if !request_has_parameters(request, query) {
                    return false;
                }
                path
            }
            None => href,
        };

        absolute(path, request).trim_end_matches('/') == request.url()
    }
}

/// Resolve a relative href against the site root.
fn absolute<'a>(href: &'a str, request: &dyn RequestInfo) -> Cow<'a, str> {
    if href.starts_with("//") || Url::parse(href).is_ok() {
        return Cow::Borrowed(href);
    }
    Cow::Owned(format!("{}/{}", request.root(), href.trim_start_matches('/')))
}

/// Check that every parameter of `query` is present with an equal value.
fn request_has_parameters(request: &dyn RequestInfo, query: &str) -> bool {
    url::form_urlencoded::parse(query.as_bytes()).all(|(key, expected)| {
        request
            .query(&key)
            .is_some_and(|actual| loose_eq(actual, &expected))
    })
}

/// String equality that treats numeric strings as numbers ("1" == "01").
fn loose_eq(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}
