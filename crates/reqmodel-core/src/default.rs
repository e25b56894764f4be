//! Field default values.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Fallback for a field no source defines: a static value, or a
/// zero-argument producer invoked once per missing resolution.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::DefaultValue;
/// use serde_json::json;
///
/// let fixed = DefaultValue::from(json!(10));
/// assert_eq!(fixed.resolve(), json!(10));
///
/// let produced = DefaultValue::produced(|| json!("generated"));
/// assert_eq!(produced.resolve(), json!("generated"));
/// ```
#[derive(Clone)]
pub enum DefaultValue {
    /// A literal value used as-is.
    Static(Value),
    /// A producer invoked each time the default is needed; its return value
    /// is used verbatim.
    Producer(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl DefaultValue {
    /// Creates a static default.
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Static(value.into())
    }

    /// Creates a producer-backed default.
    #[must_use]
    pub fn produced(producer: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Producer(Arc::new(producer))
    }

    /// Resolves the default to a concrete value, invoking the producer if
    /// there is one.
    #[must_use]
    pub fn resolve(&self) -> Value {
        match self {
            Self::Static(value) => value.clone(),
            Self::Producer(producer) => producer(),
        }
    }
}

impl From<Value> for DefaultValue {
    fn from(value: Value) -> Self {
        Self::Static(value)
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_static_default() {
        let default = DefaultValue::from(json!({"a": 1}));
        assert_eq!(default.resolve(), json!({"a": 1}));
    }

    #[test]
    fn test_value_constructor() {
        assert_eq!(DefaultValue::value(10).resolve(), json!(10));
        assert_eq!(DefaultValue::value("x").resolve(), json!("x"));
        assert_eq!(DefaultValue::value(true).resolve(), json!(true));
    }

    #[test]
    fn test_producer_invoked_per_resolution() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();
        let default = DefaultValue::produced(move || json!(seen.fetch_add(1, Ordering::SeqCst)));

        assert_eq!(default.resolve(), json!(0));
        assert_eq!(default.resolve(), json!(1));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
