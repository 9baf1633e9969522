//! Menu, dropdown and nav rendering.
//!
//! A [`MenuBuilder`] runs raw entries through one pipeline: normalize each
//! entry into a [`Node`](crate::item::Node), drop hidden entries and
//! redundant markers, resolve hrefs and state, then emit markup according
//! to its [`MenuStyle`].

mod builder;
mod clean;
mod href;
mod normalize;
mod state;
mod style;

pub use builder::MenuBuilder;
pub use clean::clean;
pub use style::{Collapse, EmptySubmenu, MenuStyle, Placement, SubmenuMode};
