//! Preview page state and handler.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::{Map, Value};
use tera::Tera;
use tracing::{error, info};

use navkit::config::{MenuConfig, ServerConfig};
use navkit::context::{RequestSnapshot, Translator};
use navkit::html::html_escape;
use navkit::locale::Catalog;
use navkit::routes::RouteTable;
use navkit::theme::register_functions;

const PAGE: &str = "preview.html";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>navkit preview</title></head>
<body>
<p>Rendered for <code>{{ request.url }}</code></p>
{% for name, items in menus %}
<section>
<h2>{{ name }}</h2>
<h3>menu</h3>
{{ menu(items=items, request=request) }}
<h3>nav</h3>
{{ nav(items=items, request=request) }}
<h3>dropdown</h3>
{{ dropdown(items=items, request=request) }}
</section>
{% endfor %}
</body>
</html>
"#;

/// Shared preview state.
#[derive(Clone)]
pub struct PreviewState {
    inner: Arc<PreviewInner>,
}

struct PreviewInner {
    tera: Tera,
    menus: Map<String, Value>,
}

impl PreviewState {
    pub fn new(
        menus: Map<String, Value>,
        routes: RouteTable,
        translator: Option<Arc<dyn Translator>>,
        config: &MenuConfig,
    ) -> Result<Self> {
        let mut tera = Tera::default();
        register_functions(&mut tera, Arc::new(routes), translator, config);
        tera.add_raw_template(PAGE, PAGE_TEMPLATE)
            .context("failed to compile preview template")?;

        Ok(Self {
            inner: Arc::new(PreviewInner { tera, menus }),
        })
    }

    /// Read the menu, route and translation files named by the config.
    pub fn load(config: &ServerConfig) -> Result<Self> {
        let raw = read(&config.menu_file)?;
        let menus: Map<String, Value> = serde_json::from_str(&raw)
            .context("menu file must be a JSON object of named menus")?;

        let routes = match &config.routes_file {
            Some(path) => RouteTable::from_json_sources(vec![(path.display().to_string(), read(path)?)]),
            None => RouteTable::new(),
        };

        let translator: Option<Arc<dyn Translator>> = match &config.translations_file {
            Some(path) => {
                let language = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let catalog = Catalog::new(language);
                catalog.load_json(&read(path)?)?;
                Some(Arc::new(catalog))
            }
            None => None,
        };

        info!(menus = menus.len(), routes = routes.len(), "Preview state loaded");
        Self::new(menus, routes, translator, &config.menu)
    }

    pub fn render(&self, request: &RequestSnapshot) -> tera::Result<String> {
        let mut ctx = tera::Context::new();
        ctx.insert("menus", &self.inner.menus);
        ctx.insert("request", request);
        self.inner.tera.render(PAGE, &ctx)
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn router(state: PreviewState) -> Router {
    Router::new().fallback(preview_page).with_state(state)
}

async fn preview_page(State(state): State<PreviewState>, request: RequestSnapshot) -> Response {
    match state.render(&request) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            let message = error_chain(&e);
            error!(error = %message, url = %request.url, "failed to render preview");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<pre>{}</pre>", html_escape(&message))),
            )
                .into_response()
        }
    }
}

/// Tera wraps function errors; surface the whole chain.
fn error_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn state(menus: Value) -> PreviewState {
        let Value::Object(menus) = menus else {
            panic!("menus must be an object");
        };
        PreviewState::new(menus, RouteTable::new(), None, &MenuConfig::default()).unwrap()
    }

    #[test]
    fn renders_every_style() {
        let state = state(json!({"main": {"Home": "http://localhost", "Docs": "http://localhost/docs"}}));
        let html = state
            .render(&RequestSnapshot::new("http://localhost", "/docs"))
            .unwrap();
        assert!(html.contains("<h2>main</h2>"));
        assert!(html.contains("<li class=\"active\"><a href=\"http://localhost/docs\">Docs</a></li>"));
        assert!(html.contains(
            "<li class=\"nav-item active\"><a href=\"http://localhost/docs\" class=\"nav-link\">Docs</a></li>"
        ));
        assert!(html.contains("<a href=\"http://localhost/docs\" class=\"dropdown-item active\">Docs</a>"));
    }

    #[test]
    fn bad_menu_reports_error() {
        let state = state(json!({"broken": 42}));
        let err = state
            .render(&RequestSnapshot::new("http://localhost", "/"))
            .unwrap_err();
        assert!(error_chain(&err).contains("unknown menu items type"));
    }
}
