#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Dropdown rendering tests.

use navkit::{Attributes, ItemOptions, Items, MenuBuilder};
use navkit_test_utils::fixture_env;

fn dropdown() -> MenuBuilder {
    MenuBuilder::dropdown(fixture_env())
}

#[test]
fn test_item() {
    let html = dropdown()
        .item(ItemOptions::new().url("bar").label("foo"))
        .unwrap();
    assert_eq!(html, r#"<a href="bar" class="dropdown-item">foo</a>"#);
}

#[test]
fn test_divider() {
    assert_eq!(dropdown().item("-").unwrap(), r#"<div class="dropdown-divider"></div>"#);
}

#[test]
fn test_named_divider_value() {
    assert_eq!(
        dropdown().link("Sep", "-").unwrap(),
        r#"<div class="dropdown-divider"></div>"#
    );
}

#[test]
fn test_header() {
    assert_eq!(
        dropdown().item("Header").unwrap(),
        r#"<h6 class="dropdown-header">Header</h6>"#
    );
}

#[test]
fn test_header_is_escaped() {
    assert_eq!(
        dropdown().item("Q&A").unwrap(),
        r#"<h6 class="dropdown-header">Q&amp;A</h6>"#
    );
}

#[test]
fn test_active_and_disabled_on_link() {
    let html = dropdown()
        .link("foo", ItemOptions::new().url("bar").active(true).disabled(true))
        .unwrap();
    assert_eq!(html, r#"<a href="bar" class="dropdown-item active disabled">foo</a>"#);
}

#[test]
fn test_render() {
    let html = dropdown().render(&Items::new().link("foo", "bar"), None).unwrap();
    assert_eq!(
        html,
        "<div class=\"dropdown-menu\">\n<a href=\"bar\" class=\"dropdown-item\">foo</a>\n</div>"
    );
}

#[test]
fn test_render_cleans_markers() {
    let items = Items::new()
        .header("Header1")
        .divider()
        .header("Header 2")
        .link("foo", "bar")
        .divider()
        .push(ItemOptions::new().visible(false))
        .divider()
        .divider()
        .link("baz", "bar")
        .divider();
    let html = dropdown().render(&items, Some(&Attributes::new())).unwrap();
    assert_eq!(
        html,
        "<div>\n<h6 class=\"dropdown-header\">Header 2</h6>\n<a href=\"bar\" class=\"dropdown-item\">foo</a>\n<div class=\"dropdown-divider\"></div>\n<a href=\"bar\" class=\"dropdown-item\">baz</a>\n</div>"
    );
}

#[test]
fn test_only_markers_render_nothing() {
    let items = Items::new().header("Lonely").divider();
    assert_eq!(dropdown().render(&items, None).unwrap(), "");
}
