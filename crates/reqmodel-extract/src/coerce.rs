//! Type coercion.
//!
//! Applies a field's declared [`FieldType`] to its resolved raw value.
//! Coercion only runs when a value is present; absent fields never reach
//! this module.

use reqmodel_core::{FieldType, ModelError};
use serde_json::{Number, Value};

/// Coerces a resolved value to the declared type.
///
/// - `String` and `Object` pass through verbatim.
/// - `Int`/`Float` pass numeric values through unchanged and parse the
///   leading numeric characters of strings, discarding the remainder.
/// - `Bool` is true exactly for `true`, `"true"`, `1`, and `"1"`.
///
/// # Errors
///
/// Returns [`ModelError::Coercion`] when a string has no leading numeric
/// prefix for an `Int`/`Float` field, or when a non-numeric, non-string
/// value (a bool, array, object, or null) lands on a numeric field.
///
/// # Example
///
/// ```rust
/// use reqmodel_core::FieldType;
/// use reqmodel_extract::coerce;
/// use serde_json::json;
///
/// assert_eq!(coerce("points", json!("123abc"), FieldType::Int).unwrap(), json!(123));
/// assert_eq!(coerce("ratio", json!("99.3kg"), FieldType::Float).unwrap(), json!(99.3));
/// assert_eq!(coerce("flag", json!("1"), FieldType::Bool).unwrap(), json!(true));
/// assert_eq!(coerce("flag", json!("no"), FieldType::Bool).unwrap(), json!(false));
/// assert!(coerce("points", json!("abc"), FieldType::Int).is_err());
/// ```
pub fn coerce(name: &str, value: Value, ty: FieldType) -> Result<Value, ModelError> {
    match ty {
        FieldType::String | FieldType::Object => Ok(value),
        FieldType::Bool => Ok(Value::Bool(as_bool(&value))),
        FieldType::Int => as_int(name, value),
        FieldType::Float => as_float(name, value),
    }
}

/// The four-value truth table: `true`, `"true"`, `1`, `"1"`.
fn as_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true" || s == "1",
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

fn as_int(name: &str, value: Value) -> Result<Value, ModelError> {
    match &value {
        // Already numeric: passthrough, unchanged.
        Value::Number(_) => Ok(value),
        Value::String(s) => match leading_int(s) {
            Some(n) => Ok(Value::Number(Number::from(n))),
            None => Err(ModelError::coercion(name, value, FieldType::Int)),
        },
        _ => Err(ModelError::coercion(name, value, FieldType::Int)),
    }
}

fn as_float(name: &str, value: Value) -> Result<Value, ModelError> {
    match &value {
        Value::Number(_) => Ok(value),
        Value::String(s) => match leading_float(s).and_then(Number::from_f64) {
            Some(n) => Ok(Value::Number(n)),
            None => Err(ModelError::coercion(name, value, FieldType::Float)),
        },
        _ => Err(ModelError::coercion(name, value, FieldType::Float)),
    }
}

/// Parses the leading integer characters of a string: optional surrounding
/// whitespace, optional sign, then a digit run. The remainder is discarded.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = split_sign(s);
    let digits: &str = &rest[..digit_run(rest)];
    if digits.is_empty() {
        return None;
    }
    format!("{sign}{digits}").parse().ok()
}

/// Parses the leading decimal characters of a string: optional sign, digit
/// run, optional fraction, optional exponent. The remainder is discarded.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, rest) = split_sign(s);

    let int_len = digit_run(rest);
    let mut end = int_len;

    // Fraction: a dot followed by a digit run (a bare leading dot as in
    // ".5" counts, a trailing dot as in "5." does too).
    if rest[end..].starts_with('.') {
        let frac_len = digit_run(&rest[end + 1..]);
        if frac_len > 0 || int_len > 0 {
            end += 1 + frac_len;
        }
    }
    if end == 0 {
        return None;
    }

    // Exponent: e/E, optional sign, at least one digit; otherwise the
    // mantissa alone is the number ("3e" parses as 3).
    if let Some(tail) = rest[end..].strip_prefix(['e', 'E']) {
        let (_, exp_rest) = split_sign(tail);
        let exp_len = digit_run(exp_rest);
        if exp_len > 0 {
            // 'e' + consumed sign + digits.
            end += 1 + (tail.len() - exp_rest.len()) + exp_len;
        }
    }

    format!("{sign}{}", &rest[..end]).parse().ok()
}

fn split_sign(s: &str) -> (&str, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        ("", rest)
    } else {
        ("", s)
    }
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
