//! Field readers shared by the JSON input contracts.
//!
//! Readers never stop at the first problem: every violated rule is recorded
//! against its field path and the caller decides what to do with the list.

use super::FieldIssue;
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

/// Largest integer magnitude exactly representable by a JSON float.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Presence state of a field in a JSON object.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Field<'a> {
    /// The key is not present.
    Absent,
    /// The key is present with a `null` value.
    Null,
    /// The key is present with a non-null value.
    Present(&'a Value),
}

/// Collects field issues while reading values from a JSON object.
#[derive(Debug)]
pub(crate) struct ObjectReader<'a> {
    object: Option<&'a Map<String, Value>>,
    issues: Vec<FieldIssue>,
}

impl<'a> ObjectReader<'a> {
    /// Starts reading `value`, recording a root issue when it is not an
    /// object.
    pub(crate) fn new(value: &'a Value) -> Self {
        let mut reader = Self {
            object: value.as_object(),
            issues: Vec::new(),
        };
        if reader.object.is_none() {
            reader.issue("", expected("object", value));
        }
        reader
    }

    /// Returns the presence state of `name`.
    pub(crate) fn field(&self, name: &str) -> Field<'a> {
        match self.object.and_then(|object| object.get(name)) {
            None => Field::Absent,
            Some(Value::Null) => Field::Null,
            Some(value) => Field::Present(value),
        }
    }

    /// Returns `true` when the document is an object.
    pub(crate) const fn is_object(&self) -> bool {
        self.object.is_some()
    }

    /// Records an issue against `field`.
    pub(crate) fn issue(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(field, message));
    }

    /// Reads a required string.
    pub(crate) fn required_str(&mut self, name: &str) -> Option<&'a str> {
        match self.field(name) {
            Field::Absent => {
                self.issue(name, "Required");
                None
            }
            Field::Null => {
                self.issue(name, "Expected string, received null");
                None
            }
            Field::Present(value) => self.as_str(name, value),
        }
    }

    /// Reads a string, rejecting every non-string value.
    pub(crate) fn as_str(&mut self, name: &str, value: &'a Value) -> Option<&'a str> {
        let text = value.as_str();
        if text.is_none() {
            self.issue(name, expected("string", value));
        }
        text
    }

    /// Reads a boolean, rejecting every non-boolean value.
    pub(crate) fn as_bool(&mut self, name: &str, value: &Value) -> Option<bool> {
        let flag = value.as_bool();
        if flag.is_none() {
            self.issue(name, expected("boolean", value));
        }
        flag
    }

    /// Reads a finite number.
    pub(crate) fn as_number(&mut self, name: &str, value: &Value) -> Option<f64> {
        let number = value.as_f64().filter(|number| number.is_finite());
        if number.is_none() {
            self.issue(name, expected("number", value));
        }
        number
    }

    /// Reads an integer, recording `not_integer` for fractional numbers.
    pub(crate) fn as_integer(
        &mut self,
        name: &str,
        value: &Value,
        not_integer: &str,
    ) -> Option<i64> {
        let Value::Number(number) = value else {
            self.issue(name, expected("number", value));
            return None;
        };
        let integer = integer_value(number);
        if integer.is_none() {
            self.issue(name, not_integer);
        }
        integer
    }

    /// Reads an RFC 3339 / ISO-8601 timestamp string.
    pub(crate) fn as_timestamp(&mut self, name: &str, value: &'a Value) -> Option<DateTime<Utc>> {
        let text = self.as_str(name, value)?;
        let parsed = DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc));
        if parsed.is_none() {
            self.issue(name, "Invalid date format, expected ISO 8601");
        }
        parsed
    }

    /// Reads a required array of strings, reporting each bad element by
    /// index.
    pub(crate) fn required_string_list(&mut self, name: &str) -> Option<Vec<String>> {
        let items = match self.field(name) {
            Field::Absent => {
                self.issue(name, "Required");
                return None;
            }
            Field::Null => {
                self.issue(name, "Expected array, received null");
                return None;
            }
            Field::Present(Value::Array(items)) => items,
            Field::Present(value) => {
                self.issue(name, expected("array", value));
                return None;
            }
        };

        let mut strings = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            if let Some(text) = item.as_str() {
                strings.push(text.to_owned());
            } else {
                self.issue(&format!("{name}.{index}"), expected("string", item));
                valid = false;
            }
        }
        valid.then_some(strings)
    }

    /// Reads a required finite number.
    pub(crate) fn required_number(&mut self, name: &str) -> Option<f64> {
        match self.field(name) {
            Field::Absent => {
                self.issue(name, "Required");
                None
            }
            Field::Null => {
                self.issue(name, "Expected number, received null");
                None
            }
            Field::Present(value) => self.as_number(name, value),
        }
    }

    /// Finishes reading and returns the collected issues.
    pub(crate) fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }
}

/// Builds the standard type-mismatch message.
pub(crate) fn expected(kind: &str, received: &Value) -> String {
    format!("Expected {kind}, received {}", json_type(received))
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the float is integral and bounded by MAX_SAFE_INTEGER"
)]
fn integer_value(number: &Number) -> Option<i64> {
    if let Some(integer) = number.as_i64() {
        return Some(integer);
    }
    if number.is_u64() {
        return Some(i64::MAX);
    }
    number
        .as_f64()
        .filter(|float| float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER)
        .map(|float| float as i64)
}
