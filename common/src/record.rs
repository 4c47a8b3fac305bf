//! Job records as produced by the reader.
//!
//! Field values are dynamically typed at the boundary: a CSV cell is always
//! text, while a JSON source may carry integers, nulls or anything else.
//! [`FieldValue`] keeps that distinction so validation can reject the shapes
//! it does not accept before normalizing to a plain integer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single field value of a job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Text(String),
    /// Floats, booleans, arrays and objects.
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// True for the two accepted salary shapes: integer or string.
    pub fn is_int_or_text(&self) -> bool {
        matches!(self, FieldValue::Integer(_) | FieldValue::Text(_))
    }

    /// Value of a digit-only field, as used by the salary aggregates.
    ///
    /// Text must be non-empty ASCII digits that fit in an `i64`. Negative
    /// integers are not digit values.
    pub fn digit_value(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) if *n >= 0 => Some(*n),
            FieldValue::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse().ok()
            }
            _ => None,
        }
    }

    /// Lenient integer coercion: integers as-is, text trimmed and parsed
    /// with an optional sign.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short type description for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Integer(_) => "integer",
            FieldValue::Text(_) => "string",
            FieldValue::Other(value) => match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "boolean",
                serde_json::Value::Number(_) => "float",
                serde_json::Value::String(_) => "string",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
            },
        }
    }

    /// Description of the value itself, used when coercion fails.
    pub(crate) fn describe(&self) -> String {
        match self {
            FieldValue::Text(s) => format!("string {s:?}"),
            FieldValue::Integer(n) => format!("integer {n}"),
            FieldValue::Other(value) => format!("{} {value}", self.type_name()),
            FieldValue::Null => "null".to_string(),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// One job posting: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord {
    fields: BTreeMap<String, FieldValue>,
}

/// The ordered records of one data source.
pub type JobCollection = Vec<JobRecord>;

impl JobRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// The field's string value, if it is text.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for JobRecord
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JobRecord {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::digits(FieldValue::from("70000"), Some(70000))]
    #[case::integer(FieldValue::Integer(42), Some(42))]
    #[case::negative_integer(FieldValue::Integer(-1), None)]
    #[case::empty(FieldValue::from(""), None)]
    #[case::signed(FieldValue::from("+5"), None)]
    #[case::spaced(FieldValue::from(" 5"), None)]
    #[case::word(FieldValue::from("invalid"), None)]
    #[case::overflow(FieldValue::from("99999999999999999999"), None)]
    #[case::null(FieldValue::Null, None)]
    fn test_digit_value(#[case] value: FieldValue, #[case] expected: Option<i64>) {
        assert_eq!(value.digit_value(), expected);
    }

    #[rstest]
    #[case::padded(FieldValue::from(" 12 "), Some(12))]
    #[case::negative(FieldValue::from("-3"), Some(-3))]
    #[case::integer(FieldValue::Integer(9), Some(9))]
    #[case::empty(FieldValue::from(""), None)]
    #[case::float(FieldValue::Other(serde_json::json!(1.5)), None)]
    #[case::null(FieldValue::Null, None)]
    fn test_to_integer(#[case] value: FieldValue, #[case] expected: Option<i64>) {
        assert_eq!(value.to_integer(), expected);
    }

    #[test]
    fn test_deserialize_untagged_shapes() {
        let record: JobRecord = serde_json::from_str(
            r#"{"min_salary": 10, "max_salary": "20", "rating": 4.5, "date_posted": null}"#,
        )
        .unwrap();

        assert_eq!(record.get("min_salary"), Some(&FieldValue::Integer(10)));
        assert_eq!(record.text("max_salary"), Some("20"));
        assert_eq!(record.get("rating").map(FieldValue::type_name), Some("float"));
        assert_eq!(record.get("date_posted"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_serialize_is_a_plain_object() {
        let record: JobRecord = [("id", FieldValue::from("1")), ("max_salary", FieldValue::Null)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"1","max_salary":null}"#);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldValue::Other(serde_json::json!(true)).type_name(), "boolean");
        assert_eq!(FieldValue::Other(serde_json::json!({})).type_name(), "object");
        assert_eq!(FieldValue::Null.type_name(), "null");
    }
}
