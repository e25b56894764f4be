//! Source-priority resolution.

use crate::request::RequestParts;
use reqmodel_core::{DefaultValue, FieldDef, FieldType, Source};
use serde_json::Value;

/// Object-typed fields only ever read from the body, whatever their
/// configured sources say.
const OBJECT_SOURCES: [Source; 1] = [Source::Body];

/// Resolves the raw value for one field: scan the lookup sources in order
/// and take the first defined value; fall back to the configured default
/// (invoking a producer); otherwise the field is absent.
pub(crate) fn resolve(parts: &RequestParts, key: &str, def: &FieldDef) -> Option<Value> {
    let name = def.lookup_name(key);
    let sources: &[Source] = if def.ty() == FieldType::Object {
        &OBJECT_SOURCES
    } else {
        def.source_order()
    };

    for source in sources {
        if let Some(value) = parts.lookup(*source, name) {
            return Some(value.clone());
        }
    }

    def.default().map(DefaultValue::resolve)
}
