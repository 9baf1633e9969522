//! Conversion of raw entries into [`Node`]s.

use tracing::debug;

use crate::error::MenuResult;
use crate::item::json::decode_entry;
use crate::item::{DIVIDER, Entry, ItemKey, ItemOptions, Items, Node, Submenu, Target};

use super::MenuBuilder;
use super::clean::clean;
use super::style::{EmptySubmenu, SubmenuMode};

impl MenuBuilder {
    /// Normalize and clean a list of entries.
    pub fn normalize_items(&self, items: &Items) -> MenuResult<Vec<Node>> {
        let mut nodes = Vec::with_capacity(items.len());
        for (key, entry) in items.iter() {
            if let Some(node) = self.normalize_item(key, entry)? {
                nodes.push(node);
            }
        }
        Ok(clean(nodes, self.style().collapse))
    }

    /// Normalize one entry.
    ///
    /// Returns `None` when the entry is dropped, which only happens for an
    /// item whose submenu came out empty under [`EmptySubmenu::DropItem`].
    /// Visibility is not checked here.
    pub fn normalize_item(&self, key: &ItemKey, entry: &Entry) -> MenuResult<Option<Node>> {
        let options = match entry {
            Entry::Divider => return Ok(Some(Node::Divider)),
            Entry::Text(text) => return Ok(Some(self.normalize_text(key, text))),
            Entry::Json(value) => {
                let decoded = decode_entry(key, value, &self.style().reserved)?;
                return self.normalize_item(key, &decoded);
            }
            Entry::Options(options) => options.clone(),
            Entry::Item(item) => item.menu_item_options(),
        };
        self.normalize_options(key, options)
    }

    fn normalize_text(&self, key: &ItemKey, text: &str) -> Node {
        if text == DIVIDER {
            return Node::Divider;
        }
        match key.name() {
            None if self.style().has_headers() => Node::Header(text.to_string()),
            label => Node::Link(ItemOptions {
                label: label.map(str::to_string),
                url: Some(Target::new(text)),
                ..ItemOptions::default()
            }),
        }
    }

    fn normalize_options(&self, key: &ItemKey, mut options: ItemOptions) -> MenuResult<Option<Node>> {
        if let Some(label) = key.name() {
            options.label = Some(label.to_string());
        }
        let reserved = &self.style().reserved;
        options.attributes.retain(|name, _| !reserved.contains(name));

        options.submenu = match options.submenu.take() {
            Some(Submenu::Items(items)) => {
                let submenu = self.normalize_submenu(&items)?;
                if submenu.is_none() && self.style().empty_submenu == EmptySubmenu::DropItem {
                    debug!(item = %key, "dropping item with empty submenu");
                    return Ok(None);
                }
                submenu
            }
            other => other,
        };

        Ok(Some(Node::Link(options)))
    }

    /// `None` when nothing survives cleaning.
    fn normalize_submenu(&self, items: &Items) -> MenuResult<Option<Submenu>> {
        match &self.style().submenu {
            SubmenuMode::Inline => {
                let nodes = self.normalize_items(items)?;
                Ok((!nodes.is_empty()).then(|| Submenu::Items(nodes.into())))
            }
            SubmenuMode::Embedded(style) => {
                let nested = MenuBuilder::new(style.clone(), self.env().clone());
                let html = nested.render(items, None)?;
                Ok((!html.is_empty()).then_some(Submenu::Rendered(html)))
            }
        }
    }
}
