//! Custom field validation.
//!
//! A [`Validator`] pairs a predicate with an optional failure message. The
//! accepted forms (bare predicate, predicate with a literal message,
//! predicate with a message producer) are normalized at construction time
//! into the single internal check/message shape.

use crate::error::ModelError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Check = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Failure message: a literal, or produced from the rejected value.
#[derive(Clone)]
enum Message {
    Literal(String),
    Producer(Arc<dyn Fn(&Value) -> String + Send + Sync>),
}

/// A validation rule applied to a field's resolved, coerced value.
///
/// When the predicate rejects a value, the failure message is the declared
/// literal, the output of the declared message producer, or the fallback
/// `"{name} failed validation"`.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::Validator;
/// use serde_json::json;
///
/// let positive = Validator::new(|v| v.as_i64().is_some_and(|n| n > 0))
///     .message("points must be positive");
///
/// assert!(positive.run("points", &json!(3)).is_ok());
///
/// let err = positive.run("points", &json!(-1)).unwrap_err();
/// assert_eq!(err.to_string(), "points must be positive");
/// ```
#[derive(Clone)]
pub struct Validator {
    check: Check,
    message: Option<Message>,
}

impl Validator {
    /// Creates a validator from a bare predicate.
    ///
    /// The failure message falls back to `"{name} failed validation"`.
    #[must_use]
    pub fn new(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
            message: None,
        }
    }

    /// Sets a literal failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(Message::Literal(message.into()));
        self
    }

    /// Sets a failure message produced from the rejected value.
    #[must_use]
    pub fn message_with(
        mut self,
        producer: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.message = Some(Message::Producer(Arc::new(producer)));
        self
    }

    /// Runs the predicate against a resolved value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] carrying the failure message when
    /// the predicate rejects the value.
    pub fn run(&self, name: &str, value: &Value) -> Result<(), ModelError> {
        if (self.check)(value) {
            return Ok(());
        }

        let message = match &self.message {
            None => format!("{name} failed validation"),
            Some(Message::Literal(text)) => text.clone(),
            Some(Message::Producer(producer)) => producer(value),
        };
        Err(ModelError::validation(message))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match &self.message {
            None => "fallback",
            Some(Message::Literal(_)) => "literal",
            Some(Message::Producer(_)) => "producer",
        };
        f.debug_struct("Validator").field("message", &message).finish()
    }
}
