//! Navkit: HTML navigation menus for server-rendered pages.
//!
//! Menus are described as ordered lists of entries (plain links, option
//! sets, dividers, headers, nested lists, or JSON) and rendered by a
//! [`MenuBuilder`] in one of three markup styles:
//!
//! - [`MenuBuilder::menu`]: nested `<ul>`/`<li>` menus
//! - [`MenuBuilder::nav`]: nav bars whose items can open dropdowns
//! - [`MenuBuilder::dropdown`]: flat dropdown panels with headers
//!
//! Request state, URL generation and translation are supplied through a
//! [`MenuEnv`]. The [`theme`] module exposes the builders to Tera
//! templates and [`extract`] builds a [`RequestSnapshot`] inside axum
//! handlers.

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod html;
pub mod item;
pub mod locale;
pub mod menu;
pub mod routes;
pub mod theme;

pub use context::{MenuEnv, RequestInfo, RequestSnapshot, Translator, UrlGenerator};
pub use error::{MenuError, MenuResult};
pub use html::Attributes;
pub use item::{Entry, ItemKey, ItemOptions, Items, Lazy, MenuItem, Node, Param, Submenu, Target};
pub use menu::{MenuBuilder, MenuStyle};
