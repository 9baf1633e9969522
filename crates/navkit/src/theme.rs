//! Tera template functions rendering menus.
//!
//! Registers `menu()`, `nav()` and `dropdown()`:
//!
//! ```text
//! {{ nav(items=menus.main, request=request) }}
//! {{ dropdown(items=account, request=request, attributes=account_attributes) }}
//! ```
//!
//! `request` is a serialized [`RequestSnapshot`]. Output is marked safe.

use std::collections::HashMap;
use std::sync::Arc;

use tera::{Function, Tera, Value};
use tracing::debug;

use crate::config::MenuConfig;
use crate::context::{MenuEnv, RequestSnapshot, Translator};
use crate::html::Attributes;
use crate::menu::{MenuBuilder, MenuStyle};
use crate::routes::{RouteTable, SiteUrls};

/// A menu-rendering template function bound to one style.
pub struct MenuFunction {
    name: &'static str,
    style: Arc<MenuStyle>,
    routes: Arc<RouteTable>,
    translator: Option<Arc<dyn Translator>>,
}

impl MenuFunction {
    pub fn new(
        name: &'static str,
        style: MenuStyle,
        routes: Arc<RouteTable>,
        translator: Option<Arc<dyn Translator>>,
    ) -> Self {
        Self {
            name,
            style: Arc::new(style),
            routes,
            translator,
        }
    }

    fn builder(&self, request: RequestSnapshot) -> MenuBuilder {
        let urls = SiteUrls::new(self.routes.clone(), &request);
        let mut env = MenuEnv::new(Arc::new(request)).with_urls(Arc::new(urls));
        if let Some(translator) = &self.translator {
            env = env.with_translator(translator.clone());
        }
        MenuBuilder::new(self.style.clone(), env)
    }
}

impl Function for MenuFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let items = args
            .get("items")
            .ok_or_else(|| tera::Error::msg(format!("{}() requires an `items` argument", self.name)))?;

        let request = args
            .get("request")
            .ok_or_else(|| tera::Error::msg(format!("{}() requires a `request` argument", self.name)))?;
        let request: RequestSnapshot = serde_json::from_value(request.clone())
            .map_err(|e| tera::Error::msg(format!("{}(): invalid request: {e}", self.name)))?;

        let attributes = args.get("attributes").map(Attributes::from_json);

        let html = self
            .builder(request)
            .render_json(items, attributes.as_ref())
            .map_err(|e| tera::Error::msg(format!("{}(): {e}", self.name)))?;

        Ok(Value::String(html))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Register `menu()`, `nav()` and `dropdown()` on a Tera instance.
pub fn register_functions(
    tera: &mut Tera,
    routes: Arc<RouteTable>,
    translator: Option<Arc<dyn Translator>>,
    config: &MenuConfig,
) {
    let styles = [
        ("menu", MenuStyle::menu()),
        ("nav", MenuStyle::nav()),
        ("dropdown", MenuStyle::dropdown()),
    ];
    for (name, style) in styles {
        let function = MenuFunction::new(
            name,
            style.with_config(config),
            routes.clone(),
            translator.clone(),
        );
        tera.register_function(name, function);
    }
    debug!("registered menu template functions");
}
