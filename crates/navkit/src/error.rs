//! Menu error types.

use thiserror::Error;

/// Errors raised while normalizing menu input.
///
/// Both variants describe malformed input owned by the caller, so a single
/// bad entry aborts the whole render call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// An entry is neither a mapping, a string, a divider nor a menu item.
    #[error("unknown menu item type at key `{key}`: found {found}")]
    InvalidItemType { key: String, found: &'static str },

    /// The items argument is not an ordered or keyed collection.
    #[error("unknown menu items type: found {found}")]
    InvalidItemsCollection { found: &'static str },
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;

/// Name the JSON shape of a value for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
