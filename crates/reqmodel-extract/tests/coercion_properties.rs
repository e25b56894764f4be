//! Property tests for type coercion.

use proptest::prelude::*;
use reqmodel_core::FieldType;
use reqmodel_extract::coerce;
use serde_json::json;

proptest! {
    /// Any string other than "true" or "1" coerces to false.
    #[test]
    fn bool_strings_outside_table_are_false(s in "\\PC*") {
        prop_assume!(s != "true" && s != "1");
        let coerced = coerce("flag", json!(s), FieldType::Bool).unwrap();
        prop_assert_eq!(coerced, json!(false));
    }

    /// Any number other than 1 coerces to false.
    #[test]
    fn bool_numbers_other_than_one_are_false(n in any::<i64>()) {
        prop_assume!(n != 1);
        let coerced = coerce("flag", json!(n), FieldType::Bool).unwrap();
        prop_assert_eq!(coerced, json!(false));
    }

    /// An integer rendered as a string round-trips through int coercion.
    #[test]
    fn int_strings_round_trip(n in any::<i64>()) {
        let coerced = coerce("x", json!(n.to_string()), FieldType::Int).unwrap();
        prop_assert_eq!(coerced, json!(n));
    }

    /// Trailing garbage after a digit run never changes the parsed value.
    #[test]
    fn int_ignores_trailing_garbage(n in any::<i32>(), tail in "[a-z]{1,8}") {
        let coerced = coerce("x", json!(format!("{n}{tail}")), FieldType::Int).unwrap();
        prop_assert_eq!(coerced, json!(i64::from(n)));
    }

    /// Numeric values pass through int coercion verbatim.
    #[test]
    fn int_numeric_passthrough(n in any::<i64>()) {
        let coerced = coerce("x", json!(n), FieldType::Int).unwrap();
        prop_assert_eq!(coerced, json!(n));
    }

    /// Strings with no leading digit fail int coercion instead of
    /// producing a sentinel.
    #[test]
    fn int_rejects_non_numeric(s in "[a-zA-Z!@#%&*]{1,12}") {
        prop_assert!(coerce("x", json!(s), FieldType::Int).is_err());
    }

    /// A finite float rendered as a string round-trips through float
    /// coercion.
    #[test]
    fn float_strings_round_trip(f in prop::num::f64::NORMAL) {
        let coerced = coerce("x", json!(f.to_string()), FieldType::Float).unwrap();
        let parsed = coerced.as_f64().unwrap();
        prop_assert_eq!(parsed, f);
    }

    /// String fields never alter their input.
    #[test]
    fn string_passthrough_is_verbatim(s in "\\PC*") {
        let coerced = coerce("x", json!(s.clone()), FieldType::String).unwrap();
        prop_assert_eq!(coerced, json!(s));
    }
}
