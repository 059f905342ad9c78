//! Field predicates and the product rule tables.
//!
//! Predicates judge a value by its string form: absent and `null` read as `""`, numbers
//! by their decimal rendering, booleans as `true`/`false`. A JSON number is numeric
//! whenever it is finite, whatever notation serde_json renders it in.

use super::{Rule, RuleSet};
use serde_json::Value;

pub const INVALID_ID: &str = "Invalid ID";
pub const NAME_REQUIRED: &str = "Product name is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_NUMERIC: &str = "Price require a valid number";
pub const INVALID_PRICE: &str = "Invalid price";
pub const AVAILABILITY_NOT_BOOLEAN: &str = "Availability must be true or false";

/// GET by id, PATCH and DELETE.
pub static PRODUCT_ID: RuleSet = RuleSet {
    rules: &[Rule::param("id", is_int, INVALID_ID)],
};

pub static CREATE_PRODUCT: RuleSet = RuleSet {
    rules: &[
        Rule::body("name", not_empty, NAME_REQUIRED),
        Rule::body("price", not_empty, PRICE_REQUIRED),
        Rule::body("price", is_numeric, PRICE_NOT_NUMERIC),
        Rule::body("price", is_positive, INVALID_PRICE),
        Rule::body("availability", is_boolean, AVAILABILITY_NOT_BOOLEAN).optional(),
    ],
};

pub static UPDATE_PRODUCT: RuleSet = RuleSet {
    rules: &[
        Rule::param("id", is_int, INVALID_ID),
        Rule::body("name", not_empty, NAME_REQUIRED),
        Rule::body("price", not_empty, PRICE_REQUIRED),
        Rule::body("price", is_numeric, PRICE_NOT_NUMERIC),
        Rule::body("price", is_positive, INVALID_PRICE),
        Rule::body("availability", is_boolean, AVAILABILITY_NOT_BOOLEAN),
    ],
};

pub fn string_form(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| string_form(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

pub fn is_int(value: Option<&Value>) -> bool {
    let s = string_form(value);
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s.as_str());
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn not_empty(value: Option<&Value>) -> bool {
    !string_form(value).is_empty()
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    if let Some(Value::Number(n)) = value {
        return n.as_f64().is_some_and(f64::is_finite);
    }
    let s = string_form(value);
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s.as_str());
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => ("", unsigned),
    };
    whole.bytes().all(|b| b.is_ascii_digit())
        && !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Strings that overflow `f64` coerce to infinity and fail.
pub fn is_positive(value: Option<&Value>) -> bool {
    let n = numeric_value(value);
    n.is_finite() && n > 0.0
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(string_form(value).as_str(), "true" | "false" | "1" | "0")
}

/// Numeric coercion of a raw value. Unparsable input is NaN, which compares false with
/// everything.
pub fn numeric_value(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// Boolean reading of a value that already passed [`is_boolean`].
pub fn as_bool(value: Option<&Value>) -> bool {
    matches!(string_form(value).as_str(), "true" | "1")
}
