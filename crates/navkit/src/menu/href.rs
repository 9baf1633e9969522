//! Link destination resolution.

use tracing::warn;

use crate::item::ItemOptions;

use super::MenuBuilder;

impl MenuBuilder {
    /// Resolve the href of an item.
    ///
    /// Priority: `href`, then `url`, then `route`. An item without any of
    /// them links to `#` when it opens a submenu, else to the current page.
    pub fn href(&self, options: &ItemOptions) -> String {
        if let Some(href) = &options.href {
            return href.clone();
        }

        let urls = self.env().urls();

        if let Some(url) = &options.url {
            return match urls {
                Some(generator) => generator.to(&url.name, &url.params, options.secure),
                None => url.name.clone(),
            };
        }

        if let Some(route) = &options.route {
            return match urls {
                Some(generator) => generator.route(&route.name, &route.params),
                None => {
                    warn!(route = %route.name, "no url generator; route link rendered as '#'");
                    "#".to_string()
                }
            };
        }

        if options.has_submenu() {
            return "#".to_string();
        }

        urls.map_or_else(|| "#".to_string(), |generator| generator.current())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::context::{MenuEnv, RequestSnapshot};
    use crate::item::{Items, Target};
    use crate::routes::{RouteDefinition, RouteTable, SiteUrls};

    fn request() -> Arc<RequestSnapshot> {
        Arc::new(RequestSnapshot::from_url("http://localhost/foo").unwrap())
    }

    fn with_urls() -> MenuBuilder {
        let request = request();
        let mut table = RouteTable::new();
        table.register(RouteDefinition {
            name: "post".to_string(),
            path: "/blog/:slug".to_string(),
        });
        let urls = SiteUrls::new(Arc::new(table), request.as_ref());
        MenuBuilder::nav(MenuEnv::new(request).with_urls(Arc::new(urls)))
    }

    fn without_urls() -> MenuBuilder {
        MenuBuilder::nav(MenuEnv::new(request()))
    }

    #[test]
    fn explicit_href_wins() {
        let options = ItemOptions::new().href("javascript:void(0)").url("ignored");
        assert_eq!(with_urls().href(&options), "javascript:void(0)");
    }

    #[test]
    fn url_then_route() {
        let b = with_urls();
        let both = ItemOptions::new().url("docs").route("post");
        assert_eq!(b.href(&both), "http://localhost/docs");
        let secure = ItemOptions::new().url("docs").secure(true);
        assert_eq!(b.href(&secure), "https://localhost/docs");
        let route = ItemOptions::new().route(Target::new("post").param("hello"));
        assert_eq!(b.href(&route), "http://localhost/blog/hello");
    }

    #[test]
    fn fallbacks() {
        let b = with_urls();
        assert_eq!(b.href(&ItemOptions::new()), "http://localhost/foo");
        let parent = ItemOptions::new().items(Items::new().link("a", "b"));
        assert_eq!(b.href(&parent), "#");
    }

    #[test]
    fn without_generator() {
        let b = without_urls();
        assert_eq!(b.href(&ItemOptions::new().url("raw/path")), "raw/path");
        assert_eq!(b.href(&ItemOptions::new().route("post")), "#");
        assert_eq!(b.href(&ItemOptions::new()), "#");
    }
}
