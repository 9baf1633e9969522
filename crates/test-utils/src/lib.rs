//! Navkit test utilities.
//!
//! Fixtures for integration tests: a fixed request, a URL generator that
//! returns canned answers and records how it was called, and translation
//! helpers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use navkit::locale::Catalog;
use navkit::{MenuEnv, Param, RequestSnapshot, Translator, UrlGenerator};

/// URL of the request every fixture renders against.
pub const FIXTURE_URL: &str = "http://localhost/foo?bar=baz";

/// Parse a request URL, panicking on malformed input.
pub fn request(url: &str) -> RequestSnapshot {
    RequestSnapshot::from_url(url).unwrap_or_else(|e| panic!("invalid test url {url}: {e}"))
}

/// One call received by [`RecordingUrls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCall {
    To {
        path: String,
        params: Vec<Param>,
        secure: bool,
    },
    Route {
        name: String,
        params: Vec<Param>,
    },
    Current,
}

/// URL generator with canned answers.
///
/// Unconfigured paths come back unchanged (with an `https://` prefix when
/// secure), unconfigured routes come back as their name and the current URL
/// is `"current"`.
#[derive(Default)]
pub struct RecordingUrls {
    paths: HashMap<String, String>,
    routes: HashMap<String, String>,
    current: Option<String>,
    calls: Mutex<Vec<UrlCall>>,
}

impl RecordingUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `to(path, ..)` with `url`.
    pub fn with_path(mut self, path: &str, url: &str) -> Self {
        self.paths.insert(path.to_string(), url.to_string());
        self
    }

    /// Answer `route(name, ..)` with `url`.
    pub fn with_route(mut self, name: &str, url: &str) -> Self {
        self.routes.insert(name.to_string(), url.to_string());
        self
    }

    pub fn with_current(mut self, url: &str) -> Self {
        self.current = Some(url.to_string());
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<UrlCall> {
        self.calls.lock().clone()
    }
}

impl UrlGenerator for RecordingUrls {
    fn to(&self, path: &str, params: &[Param], secure: bool) -> String {
        self.calls.lock().push(UrlCall::To {
            path: path.to_string(),
            params: params.to_vec(),
            secure,
        });
        match self.paths.get(path) {
            Some(url) => url.clone(),
            None if secure => format!("https://{path}"),
            None => path.to_string(),
        }
    }

    fn route(&self, name: &str, params: &[Param]) -> String {
        self.calls.lock().push(UrlCall::Route {
            name: name.to_string(),
            params: params.to_vec(),
        });
        self.routes
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    fn current(&self) -> String {
        self.calls.lock().push(UrlCall::Current);
        self.current.clone().unwrap_or_else(|| "current".to_string())
    }
}

/// Environment for [`FIXTURE_URL`] backed by `urls`.
pub fn env_with(urls: Arc<RecordingUrls>) -> MenuEnv {
    MenuEnv::new(Arc::new(request(FIXTURE_URL))).with_urls(urls)
}

/// Environment for [`FIXTURE_URL`] with a default [`RecordingUrls`].
pub fn fixture_env() -> MenuEnv {
    env_with(Arc::new(RecordingUrls::new()))
}

/// Translator backed by a [`Catalog`] of the given pairs.
pub fn translator(pairs: &[(&str, &str)]) -> Arc<dyn Translator> {
    Arc::new(Catalog::from_pairs("test", pairs.iter().copied()))
}
