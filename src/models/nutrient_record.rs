//! Nutrient record model
//!
//! The validated input to the scorer, built from an untyped JSON body.

use serde_json::{Map, Value};
use thiserror::Error;

/// Keys every request body must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 8] = [
    "food_name",
    "category",
    "calories",
    "protein",
    "carbs",
    "fat",
    "iron",
    "vitamin_c",
];

/// Input validation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{0}' diperlukan")]
    MissingField(&'static str),

    /// A string that does not parse as a real number. The message never
    /// names the field.
    #[error("Nilai numerik tidak valid")]
    InvalidNumeric { field: &'static str },

    /// A value of a JSON type that has no numeric reading at all
    #[error("Field '{field}' holds {kind}, which cannot be converted to a number")]
    UnsupportedValue {
        field: &'static str,
        kind: &'static str,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A food item's nutrient values, ready for scoring
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientRecord {
    pub food_name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,   // grams
    pub carbs: f64,     // grams
    pub fat: f64,       // grams
    pub iron: f64,      // milligrams
    pub vitamin_c: f64, // milligrams
}

impl NutrientRecord {
    /// Validate a decoded JSON body.
    ///
    /// Presence of all eight keys is checked first; numeric conversion only
    /// starts once every key is known to exist. Arrays and strings have no
    /// keys, so they fail on the first required field. `null`, numbers and
    /// booleans cannot be searched for keys at all and are unsupported.
    pub fn from_json(body: &Value) -> ValidationResult<Self> {
        let empty = Map::new();
        let fields = match body {
            Value::Object(map) => map,
            Value::Array(_) | Value::String(_) => &empty,
            other => {
                return Err(ValidationError::UnsupportedValue {
                    field: "body",
                    kind: json_kind(other),
                })
            }
        };

        for field in REQUIRED_FIELDS {
            if !fields.contains_key(field) {
                return Err(ValidationError::MissingField(field));
            }
        }

        let number = |field: &'static str| to_real(field, &fields[field]);

        Ok(Self {
            food_name: to_text(&fields["food_name"]),
            category: to_text(&fields["category"]),
            calories: number("calories")?,
            protein: number("protein")?,
            carbs: number("carbs")?,
            fat: number("fat")?,
            iron: number("iron")?,
            vitamin_c: number("vitamin_c")?,
        })
    }
}

/// Strings pass through untouched; anything else keeps its JSON text
fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Convert a JSON value to a real number.
///
/// Numbers are taken as-is, booleans read as 1 or 0, and strings go through
/// `parse_real`.
pub fn to_real(field: &'static str, value: &Value) -> ValidationResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or(ValidationError::InvalidNumeric { field }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_real(s).ok_or(ValidationError::InvalidNumeric { field }),
        other => Err(ValidationError::UnsupportedValue {
            field,
            kind: json_kind(other),
        }),
    }
}

/// Parse a numeric string.
///
/// Surrounding whitespace is ignored, `inf` and `nan` are accepted, and a
/// single underscore may group digits (`"1_000"`). An underscore anywhere
/// else (leading, trailing, doubled, next to `.` or `e`) is rejected.
pub fn parse_real(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !trimmed.contains('_') {
        return trimmed.parse().ok();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut digits = String::with_capacity(trimmed.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i > 0 && chars[i - 1].is_ascii_digit();
            let after = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if !(before && after) {
                return None;
            }
        } else {
            digits.push(c);
        }
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "food_name": "Nasi Goreng",
            "category": "Main Course",
            "calories": 250,
            "protein": 10,
            "carbs": 20,
            "fat": 5,
            "iron": 2,
            "vitamin_c": 10
        })
    }

    #[test]
    fn test_from_json_complete_body() {
        let record = NutrientRecord::from_json(&full_body()).unwrap();
        assert_eq!(record.food_name, "Nasi Goreng");
        assert_eq!(record.category, "Main Course");
        assert_eq!(record.calories, 250.0);
        assert_eq!(record.protein, 10.0);
        assert_eq!(record.vitamin_c, 10.0);
    }

    #[test]
    fn test_missing_field_is_reported_by_name() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("iron");

        let err = NutrientRecord::from_json(&body).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("iron"));
        assert_eq!(err.to_string(), "Field 'iron' diperlukan");
    }

    #[test]
    fn test_presence_checked_before_conversion() {
        // calories is unparseable, but the missing key wins
        let mut body = full_body();
        body["calories"] = json!("abc");
        body.as_object_mut().unwrap().remove("vitamin_c");

        let err = NutrientRecord::from_json(&body).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("vitamin_c"));
    }

    #[test]
    fn test_first_missing_field_in_declared_order() {
        let err = NutrientRecord::from_json(&json!({ "protein": 1 })).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("food_name"));
    }

    #[test]
    fn test_array_and_string_bodies_have_no_fields() {
        let err = NutrientRecord::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("food_name"));

        let err = NutrientRecord::from_json(&json!("x")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("food_name"));
    }

    #[test]
    fn test_scalar_bodies_are_unsupported() {
        let cases = [
            (json!(null), "null"),
            (json!(5), "a number"),
            (json!(true), "a boolean"),
        ];
        for (body, kind) in cases {
            let err = NutrientRecord::from_json(&body).unwrap_err();
            assert_eq!(err, ValidationError::UnsupportedValue { field: "body", kind });
        }
    }

    #[test]
    fn test_invalid_numeric_string() {
        let mut body = full_body();
        body["calories"] = json!("abc");

        let err = NutrientRecord::from_json(&body).unwrap_err();
        assert_eq!(err, ValidationError::InvalidNumeric { field: "calories" });
        assert_eq!(err.to_string(), "Nilai numerik tidak valid");
    }

    #[test]
    fn test_numeric_strings_are_converted() {
        let mut body = full_body();
        body["protein"] = json!(" 12.5 ");
        body["fat"] = json!("1e1");
        body["iron"] = json!("-3");

        let record = NutrientRecord::from_json(&body).unwrap();
        assert_eq!(record.protein, 12.5);
        assert_eq!(record.fat, 10.0);
        assert_eq!(record.iron, -3.0);
    }

    #[test]
    fn test_special_float_strings() {
        assert_eq!(to_real("fat", &json!("inf")).unwrap(), f64::INFINITY);
        assert!(to_real("fat", &json!("nan")).unwrap().is_nan());
        assert_eq!(
            to_real("fat", &json!("")),
            Err(ValidationError::InvalidNumeric { field: "fat" })
        );
    }

    #[test]
    fn test_underscore_digit_grouping() {
        assert_eq!(parse_real("1_000"), Some(1000.0));
        assert_eq!(parse_real(" 1_000.000_5 "), Some(1000.0005));
        assert_eq!(parse_real("1e1_0"), Some(1e10));
        assert_eq!(parse_real("_1"), None);
        assert_eq!(parse_real("1_"), None);
        assert_eq!(parse_real("1__0"), None);
        assert_eq!(parse_real("1_.5"), None);
        assert_eq!(
            to_real("calories", &json!("2_500")),
            Ok(2500.0)
        );
    }

    #[test]
    fn test_booleans_read_as_one_or_zero() {
        assert_eq!(to_real("iron", &json!(true)).unwrap(), 1.0);
        assert_eq!(to_real("iron", &json!(false)).unwrap(), 0.0);
    }

    #[test]
    fn test_null_is_unsupported() {
        let mut body = full_body();
        body["carbs"] = json!(null);

        let err = NutrientRecord::from_json(&body).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedValue {
                field: "carbs",
                kind: "null"
            }
        );
    }

    #[test]
    fn test_conversion_errors_follow_field_order() {
        let mut body = full_body();
        body["protein"] = json!(null);
        body["fat"] = json!("abc");

        let err = NutrientRecord::from_json(&body).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnsupportedValue { field: "protein", .. }
        ));
    }

    #[test]
    fn test_non_string_name_keeps_json_text() {
        let mut body = full_body();
        body["food_name"] = json!(42);
        body["category"] = json!(null);

        let record = NutrientRecord::from_json(&body).unwrap();
        assert_eq!(record.food_name, "42");
        assert_eq!(record.category, "null");
    }
}
