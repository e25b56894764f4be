//! The model middleware.
//!
//! [`ModelMiddleware`] is the entry point tying the pieces together: it
//! snapshots the request, runs the extraction, and either attaches the
//! resolved model and continues the chain, or short-circuits with a 400
//! response carrying the failure message.

use crate::adapt::request_parts;
use crate::middleware::{Middleware, Next};
use crate::types::{Request, Response, ResponseExt};
use reqmodel_core::{Definition, Model, ModelError};
use reqmodel_extract::Extractor;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// The output name used when none is configured.
pub const DEFAULT_OUTPUT: &str = "model";

/// Resolved models attached to a request, keyed by output name.
///
/// Stored in the request's extensions so several [`ModelMiddleware`]
/// instances with different output names compose on one request.
#[derive(Debug, Clone, Default)]
pub struct ModelSet {
    models: HashMap<String, Model>,
}

impl ModelSet {
    /// Looks up a model by output name.
    #[must_use]
    pub fn get(&self, output: &str) -> Option<&Model> {
        self.models.get(output)
    }

    /// Attaches a model under an output name, replacing any previous one.
    pub fn insert(&mut self, output: impl Into<String>, model: Model) {
        self.models.insert(output.into(), model);
    }

    /// Number of attached models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True if no model is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Convenience accessor for models attached to a request.
pub trait RequestModelExt {
    /// The model attached under an output name, if extraction ran and
    /// succeeded.
    fn model(&self, output: &str) -> Option<&Model>;
}

impl RequestModelExt for Request {
    fn model(&self, output: &str) -> Option<&Model> {
        self.extensions()
            .get::<ModelSet>()
            .and_then(|set| set.get(output))
    }
}

/// Middleware that extracts, coerces, defaults, and validates declared
/// request parameters.
///
/// On success the resolved [`Model`] is attached to the request under the
/// configured output name (default `"model"`) and the continuation runs
/// exactly once. On any failure the continuation is not invoked; the
/// response is status 400 with the failure's message as its plain-text
/// body.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::{Definition, FieldDef, FieldType};
/// use reqmodel_middleware::ModelMiddleware;
///
/// let middleware = ModelMiddleware::new(
///     Definition::new()
///         .field("customer", FieldType::String)
///         .field("points", FieldDef::new(FieldType::Int).default_value(10)),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ModelMiddleware {
    config: Result<Extractor, ModelError>,
    output: String,
}

impl ModelMiddleware {
    /// Creates the middleware over an already-built definition.
    #[must_use]
    pub fn new(definition: Definition) -> Self {
        Self {
            config: Ok(Extractor::new(definition)),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }

    /// Creates the middleware from configuration data (see
    /// [`Definition::from_config`]).
    ///
    /// A broken definition does not panic at construction: it is held and
    /// reported as a 400 on every request, like any other failure.
    #[must_use]
    pub fn from_config(config: &Value) -> Self {
        Self {
            config: Definition::from_config(config).map(Extractor::new),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }

    /// Sets the output name the model is attached under.
    #[must_use]
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }
}

impl Middleware for ModelMiddleware {
    fn name(&self) -> &'static str {
        "request_model"
    }

    fn handle(&self, mut request: Request, next: Next<'_>) -> Response {
        let extractor = match &self.config {
            Ok(extractor) => extractor,
            Err(err) => {
                debug!(middleware = self.name(), error = %err, "broken definition");
                return Response::bad_request(&err.to_string());
            }
        };

        let parts = request_parts(&request);
        match extractor.extract(&parts) {
            Ok(model) => {
                // Extensions has no entry API; take, update, put back.
                let mut set = request
                    .extensions_mut()
                    .remove::<ModelSet>()
                    .unwrap_or_default();
                set.insert(self.output.clone(), model);
                request.extensions_mut().insert(set);
                next.run(request)
            }
            Err(err) => {
                debug!(middleware = self.name(), error = %err, "extraction failed");
                Response::bad_request(&err.to_string())
            }
        }
    }
}
