//! Markup rendering.

use std::sync::Arc;

use serde_json::Value;

use crate::context::MenuEnv;
use crate::error::MenuResult;
use crate::html::{Attributes, html_escape};
use crate::item::{Entry, ItemKey, ItemOptions, Items, Node, Submenu};

use super::style::{MenuStyle, Placement};

/// Renders menus in one [`MenuStyle`] against one [`MenuEnv`].
///
/// A builder holds no per-render state; clone it or share it freely.
#[derive(Debug, Clone)]
pub struct MenuBuilder {
    style: Arc<MenuStyle>,
    env: MenuEnv,
}

impl MenuBuilder {
    pub fn new(style: impl Into<Arc<MenuStyle>>, env: MenuEnv) -> Self {
        Self {
            style: style.into(),
            env,
        }
    }

    /// Nested `<ul class="nav">` menu.
    pub fn menu(env: MenuEnv) -> Self {
        Self::new(MenuStyle::menu(), env)
    }

    /// Flat `<div class="dropdown-menu">` dropdown.
    pub fn dropdown(env: MenuEnv) -> Self {
        Self::new(MenuStyle::dropdown(), env)
    }

    /// `<ul class="nav">` nav bar with embedded dropdowns.
    pub fn nav(env: MenuEnv) -> Self {
        Self::new(MenuStyle::nav(), env)
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    pub fn env(&self) -> &MenuEnv {
        &self.env
    }

    /// Render a complete menu.
    ///
    /// `attributes` replaces the style's default container attributes; pass
    /// an empty set for a bare container. Returns an empty string when no
    /// entry survives cleaning.
    pub fn render(&self, items: &Items, attributes: Option<&Attributes>) -> MenuResult<String> {
        let nodes = self.normalize_items(items)?;
        if nodes.is_empty() {
            return Ok(String::new());
        }

        let attributes = attributes.unwrap_or(&self.style.container_attributes);
        let tag = &self.style.container_tag;
        Ok(format!("<{tag}{attributes}>{}\n</{tag}>", self.join(&nodes)?))
    }

    /// Render a menu described as a JSON array or object.
    pub fn render_json(&self, items: &Value, attributes: Option<&Attributes>) -> MenuResult<String> {
        self.render(&Items::from_json(items)?, attributes)
    }

    /// Render the entries without the container, each on its own line.
    pub fn items(&self, items: &Items) -> MenuResult<String> {
        self.join(&self.normalize_items(items)?)
    }

    /// Render a single positional entry.
    pub fn item(&self, entry: impl Into<Entry>) -> MenuResult<String> {
        self.render_entry(&ItemKey::Index(0), &entry.into())
    }

    /// Render a single entry under a label key (`"Home" => "/"`).
    pub fn link(&self, label: &str, entry: impl Into<Entry>) -> MenuResult<String> {
        self.render_entry(&ItemKey::Name(label.to_string()), &entry.into())
    }

    fn render_entry(&self, key: &ItemKey, entry: &Entry) -> MenuResult<String> {
        match self.normalize_item(key, entry)? {
            Some(node) if node.is_visible() => self.render_node(&node),
            _ => Ok(String::new()),
        }
    }

    fn join(&self, nodes: &[Node]) -> MenuResult<String> {
        let mut html = String::new();
        for node in nodes {
            html.push('\n');
            html.push_str(&self.render_node(node)?);
        }
        Ok(html)
    }

    /// Render one normalized entry.
    pub fn render_node(&self, node: &Node) -> MenuResult<String> {
        match node {
            Node::Divider => Ok(self.style.divider.clone()),
            Node::Header(title) => Ok(self.render_header(title)),
            Node::Link(options) => self.render_link(options),
        }
    }

    fn render_header(&self, title: &str) -> String {
        match &self.style.header_class {
            Some(class) => format!("<h6{}>{}</h6>", Attributes::class(class.as_str()), html_escape(title)),
            None => html_escape(title),
        }
    }

    fn render_link(&self, options: &ItemOptions) -> MenuResult<String> {
        let style = &self.style;
        let href = self.href(options);

        let mut link = Attributes::new().with("href", href.as_str());
        if let Some(class) = &style.link_class {
            link.insert("class", class.as_str());
        }
        let mut item = Attributes::new();
        if let Some(class) = &style.item_class {
            item.insert("class", class.as_str());
        }

        let wrapped = style.item_tag.is_some();
        target(style.extra_attributes, wrapped, &mut item, &mut link).merge(&options.attributes);
        if options.has_submenu() {
            link.merge(&style.toggle_attributes);
        }
        link.merge(&options.link_options);

        let state = target(style.state_classes, wrapped, &mut item, &mut link);
        if self.is_active(&href, options) {
            state.append_class(&style.active_class);
        }
        if options.is_disabled() {
            state.append_class(&style.disabled_class);
        }

        let mut html = format!("<a{link}>{}</a>", self.label_html(options));
        let nested = match &options.submenu {
            Some(Submenu::Items(items)) => self.render(items, Some(&style.submenu_attributes))?,
            Some(Submenu::Rendered(markup)) => markup.clone(),
            None => String::new(),
        };
        if !nested.is_empty() {
            html.push('\n');
            html.push_str(&nested);
        }

        Ok(match &style.item_tag {
            Some(tag) => format!("<{tag}{item}>{html}</{tag}>"),
            None => html,
        })
    }

    /// Translated label, or empty when the item has none.
    pub fn label(&self, options: &ItemOptions) -> String {
        let Some(label) = &options.label else {
            return String::new();
        };
        match self.env.translator() {
            Some(translator) => translator.translate(label),
            None => label.clone(),
        }
    }

    /// Anchor content: icon, label, badge and caret.
    fn label_html(&self, options: &ItemOptions) -> String {
        let style = &self.style;
        let separator = if style.spaced_label { " " } else { "" };
        let mut html = html_escape(&self.label(options));

        if let Some(badge) = &options.badge {
            html.push_str(separator);
            html.push_str(&format!(
                r#"<span class="{}">{}</span>"#,
                html_escape(&style.badge_class),
                html_escape(&badge.resolve())
            ));
        }

        if let Some(caret) = style.caret.as_ref().filter(|_| options.has_submenu()) {
            html.push_str(separator);
            html.push_str(caret);
        }

        match &options.icon {
            Some(icon) => format!(
                r#"<span class="{}"></span>{separator}{html}"#,
                html_escape(&format!("{}{icon}", style.icon_prefix))
            ),
            None => html,
        }
    }
}

/// The attribute set a placement refers to. Unwrapped styles put
/// everything on the anchor.
fn target<'a>(
    placement: Placement,
    wrapped: bool,
    item: &'a mut Attributes,
    link: &'a mut Attributes,
) -> &'a mut Attributes {
    match placement {
        Placement::Item if wrapped => item,
        _ => link,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::RequestSnapshot;
    use crate::item::Lazy;
    use crate::locale::Catalog;

    fn env() -> MenuEnv {
        MenuEnv::new(Arc::new(RequestSnapshot::new("http://localhost", "/foo")))
    }

    #[test]
    fn empty_menu_renders_nothing() {
        let menu = MenuBuilder::menu(env());
        assert_eq!(menu.render(&Items::new(), None).unwrap(), "");
        assert_eq!(menu.render_json(&json!(["-", "-"]), None).unwrap(), "");
    }

    #[test]
    fn container_attributes_can_be_replaced() {
        let menu = MenuBuilder::menu(env());
        let items = Items::new().link("foo", "bar");
        assert_eq!(
            menu.render(&items, Some(&Attributes::class("navbar-nav"))).unwrap(),
            "<ul class=\"navbar-nav\">\n<li><a href=\"bar\">foo</a></li>\n</ul>"
        );
        assert_eq!(
            menu.render(&items, Some(&Attributes::new())).unwrap(),
            "<ul>\n<li><a href=\"bar\">foo</a></li>\n</ul>"
        );
    }

    #[test]
    fn items_skips_the_container() {
        let nav = MenuBuilder::nav(env());
        let items = Items::new().link("a", "x").link("b", "y");
        assert_eq!(
            nav.items(&items).unwrap(),
            "\n<li class=\"nav-item\"><a href=\"x\" class=\"nav-link\">a</a></li>\n<li class=\"nav-item\"><a href=\"y\" class=\"nav-link\">b</a></li>"
        );
    }

    #[test]
    fn active_item_gets_class() {
        let menu = MenuBuilder::menu(env());
        let html = menu
            .item(ItemOptions::new().label("here").href("http://localhost/foo"))
            .unwrap();
        assert_eq!(html, "<li class=\"active\"><a href=\"http://localhost/foo\">here</a></li>");
    }

    #[test]
    fn dropdown_puts_state_on_link() {
        let dropdown = MenuBuilder::dropdown(env());
        let html = dropdown
            .link("off", ItemOptions::new().href("x").disabled(true).attr("class", "extra"))
            .unwrap();
        assert_eq!(html, "<a href=\"x\" class=\"dropdown-item extra disabled\">off</a>");
    }

    #[test]
    fn labels_and_badges_are_escaped() {
        let menu = MenuBuilder::menu(env());
        let html = menu
            .item(ItemOptions::new().label("<b>").href("x").badge("a&b"))
            .unwrap();
        assert_eq!(
            html,
            "<li><a href=\"x\">&lt;b&gt; <span class=\"badge\">a&amp;b</span></a></li>"
        );
    }

    #[test]
    fn deferred_values_resolve_at_render_time() {
        let menu = MenuBuilder::menu(env());
        let options = ItemOptions::new()
            .label("count")
            .href("x")
            .badge(Lazy::deferred(|| "7".to_string()))
            .visible(Lazy::deferred(|| true));
        assert_eq!(
            menu.item(options).unwrap(),
            "<li><a href=\"x\">count <span class=\"badge\">7</span></a></li>"
        );
    }

    #[test]
    fn invisible_single_item_renders_nothing() {
        let nav = MenuBuilder::nav(env());
        assert_eq!(nav.item(ItemOptions::new().href("x").visible(false)).unwrap(), "");
    }

    #[test]
    fn labels_are_translated() {
        let catalog = Catalog::from_pairs("fr", [("Home", "Accueil")]);
        let menu = MenuBuilder::menu(env().with_translator(Arc::new(catalog)));
        assert_eq!(
            menu.link("Home", "x").unwrap(),
            "<li><a href=\"x\">Accueil</a></li>"
        );
    }

    #[test]
    fn custom_style_without_wrapper() {
        let mut style = MenuStyle::menu();
        style.item_tag = None;
        style.container_tag = "nav".to_string();
        let builder = MenuBuilder::new(style, env());
        let html = builder
            .render(&Items::new().labeled("foo", ItemOptions::new().href("x").attr("rel", "me")), None)
            .unwrap();
        assert_eq!(html, "<nav class=\"nav\">\n<a href=\"x\" rel=\"me\">foo</a>\n</nav>");
    }
}
