//! Markup styles for the menu, dropdown and nav builders.
//!
//! The three builders share one pipeline and differ only in the data held
//! by a [`MenuStyle`]: tags, classes, where attributes land, and a handful
//! of policies.

use std::sync::Arc;

use crate::config::MenuConfig;
use crate::html::Attributes;
use crate::item::ReservedKeys;

/// Which element receives a group of attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The wrapping item element (`<li>`), or the anchor when there is none.
    Item,
    /// The anchor.
    Link,
}

/// How nested entries are handled.
#[derive(Debug, Clone)]
pub enum SubmenuMode {
    /// Normalize and render nested entries with the same style.
    Inline,
    /// Render nested entries through another style while normalizing, and
    /// embed the resulting markup.
    Embedded(Arc<MenuStyle>),
}

/// What happens to an item whose nested list is empty after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySubmenu {
    /// Keep the item as a plain link.
    DropKey,
    /// Discard the item.
    DropItem,
}

/// How consecutive markers are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collapse {
    /// Runs of dividers merge into one.
    Dividers,
    /// Runs of dividers and headers merge into their last marker.
    Markers,
}

/// Everything a builder needs to know about its markup.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub container_tag: String,
    /// Attributes used when the caller supplies none.
    pub container_attributes: Attributes,
    /// Element wrapping each item, if any.
    pub item_tag: Option<String>,
    pub item_class: Option<String>,
    pub link_class: Option<String>,
    /// Where pass-through item attributes go.
    pub extra_attributes: Placement,
    /// Where active and disabled classes go.
    pub state_classes: Placement,
    pub active_class: String,
    pub disabled_class: String,
    /// Separate icon, label, badge and caret with spaces.
    pub spaced_label: bool,
    pub caret: Option<String>,
    pub icon_prefix: String,
    pub badge_class: String,
    /// Merged onto the anchor of an item that opens a submenu.
    pub toggle_attributes: Attributes,
    pub divider: String,
    /// When set, positional strings become headers with this class.
    pub header_class: Option<String>,
    pub submenu: SubmenuMode,
    /// Container attributes for inline submenus.
    pub submenu_attributes: Attributes,
    pub empty_submenu: EmptySubmenu,
    pub collapse: Collapse,
    pub reserved: ReservedKeys,
}

fn toggle_attributes() -> Attributes {
    Attributes::class("dropdown-toggle").with("data-toggle", "dropdown")
}

impl MenuStyle {
    /// Nested `<ul>` menu with inline `items` submenus.
    pub fn menu() -> Self {
        let config = MenuConfig::default();
        Self {
            container_tag: "ul".to_string(),
            container_attributes: Attributes::class("nav"),
            item_tag: Some("li".to_string()),
            item_class: None,
            link_class: None,
            extra_attributes: Placement::Item,
            state_classes: Placement::Item,
            active_class: config.active_class,
            disabled_class: config.disabled_class,
            spaced_label: true,
            caret: Some(r#"<span class="caret"></span>"#.to_string()),
            icon_prefix: config.icon_prefix,
            badge_class: config.badge_class,
            toggle_attributes: toggle_attributes(),
            divider: r#"<li class="divider"></li>"#.to_string(),
            header_class: None,
            submenu: SubmenuMode::Inline,
            submenu_attributes: Attributes::class("dropdown-menu"),
            empty_submenu: EmptySubmenu::DropKey,
            collapse: Collapse::Dividers,
            reserved: ReservedKeys::base()
                .with_submenu("items")
                .with_link_options("linkOptions"),
        }
    }

    /// Flat `<div>` dropdown with headers and dividers.
    pub fn dropdown() -> Self {
        let config = MenuConfig::default();
        Self {
            container_tag: "div".to_string(),
            container_attributes: Attributes::class("dropdown-menu"),
            item_tag: None,
            item_class: None,
            link_class: Some("dropdown-item".to_string()),
            extra_attributes: Placement::Link,
            state_classes: Placement::Link,
            active_class: config.active_class,
            disabled_class: config.disabled_class,
            spaced_label: false,
            caret: None,
            icon_prefix: config.icon_prefix,
            badge_class: config.badge_class,
            toggle_attributes: toggle_attributes(),
            divider: r#"<div class="dropdown-divider"></div>"#.to_string(),
            header_class: Some("dropdown-header".to_string()),
            submenu: SubmenuMode::Inline,
            submenu_attributes: Attributes::class("dropdown-menu"),
            empty_submenu: EmptySubmenu::DropItem,
            collapse: Collapse::Markers,
            reserved: ReservedKeys::base(),
        }
    }

    /// Nav bar whose `dropdown` entries are rendered with [`MenuStyle::dropdown`].
    pub fn nav() -> Self {
        Self::nav_with_dropdown(Self::dropdown())
    }

    /// Nav bar embedding dropdowns rendered with a custom style.
    pub fn nav_with_dropdown(dropdown: MenuStyle) -> Self {
        let config = MenuConfig::default();
        Self {
            container_tag: "ul".to_string(),
            container_attributes: Attributes::class("nav"),
            item_tag: Some("li".to_string()),
            item_class: Some("nav-item".to_string()),
            link_class: Some("nav-link".to_string()),
            extra_attributes: Placement::Link,
            state_classes: Placement::Item,
            active_class: config.active_class,
            disabled_class: config.disabled_class,
            spaced_label: false,
            caret: None,
            icon_prefix: config.icon_prefix,
            badge_class: config.badge_class,
            toggle_attributes: toggle_attributes(),
            divider: r#"<li class="divider"></li>"#.to_string(),
            header_class: None,
            submenu: SubmenuMode::Embedded(Arc::new(dropdown)),
            submenu_attributes: Attributes::class("dropdown-menu"),
            empty_submenu: EmptySubmenu::DropKey,
            collapse: Collapse::Dividers,
            reserved: ReservedKeys::base().with_submenu("dropdown"),
        }
    }

    /// Apply shared class names, including to an embedded dropdown style.
    pub fn with_config(mut self, config: &MenuConfig) -> Self {
        self.active_class = config.active_class.clone();
        self.disabled_class = config.disabled_class.clone();
        self.icon_prefix = config.icon_prefix.clone();
        self.badge_class = config.badge_class.clone();
        if let SubmenuMode::Embedded(nested) = &self.submenu {
            let nested = nested.as_ref().clone().with_config(config);
            self.submenu = SubmenuMode::Embedded(Arc::new(nested));
        }
        self
    }

    pub fn with_container_attributes(mut self, attributes: Attributes) -> Self {
        self.container_attributes = attributes;
        self
    }

    pub fn with_empty_submenu(mut self, policy: EmptySubmenu) -> Self {
        self.empty_submenu = policy;
        self
    }

    /// Whether positional strings are headers.
    pub fn has_headers(&self) -> bool {
        self.header_class.is_some()
    }
}
