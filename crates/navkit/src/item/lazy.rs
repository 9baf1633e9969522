//! Literal-or-deferred field values.

use std::fmt;
use std::sync::Arc;

/// A field supplied either as a literal or as a zero-argument callback.
///
/// Deferred values are resolved at the point of use and never cached, so a
/// callback observes whatever state exists when the menu renders.
pub enum Lazy<T> {
    Value(T),
    Deferred(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Lazy<T> {
    /// Wrap a callback.
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(f))
    }
}

impl<T: Clone> Lazy<T> {
    /// Produce the current value.
    pub fn resolve(&self) -> T {
        match self {
            Self::Value(v) => v.clone(),
            Self::Deferred(f) => f(),
        }
    }
}

impl<T> From<T> for Lazy<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Lazy<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<T: Clone> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.clone()),
            Self::Deferred(f) => Self::Deferred(Arc::clone(f)),
        }
    }
}

impl<T: PartialEq> PartialEq for Lazy<T> {
    /// Literals compare by value, callbacks by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Deferred(a), Self::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn literal_resolves_to_itself() {
        let flag: Lazy<bool> = true.into();
        assert!(flag.resolve());
    }

    #[test]
    fn deferred_is_evaluated_on_every_resolve() {
        let state = Arc::new(AtomicBool::new(false));
        let observed = Arc::clone(&state);
        let flag = Lazy::deferred(move || observed.load(Ordering::SeqCst));

        assert!(!flag.resolve());
        state.store(true, Ordering::SeqCst);
        assert!(flag.resolve());
    }

    #[test]
    fn clones_share_the_callback() {
        let badge: Lazy<String> = Lazy::deferred(|| "3".to_string());
        let copy = badge.clone();
        assert_eq!(badge, copy);
        assert_ne!(badge, Lazy::deferred(|| "3".to_string()));
    }
}
