//! Schema validation over `serde_json::Value` payloads.
//!
//! A [`Schema`] is an ordered set of [`Field`] descriptors. `load` validates
//! a JSON object against every field, drops unknown keys, and collects all
//! failures into a [`ValidationErrors`] map instead of stopping at the first.

pub mod fields;
pub mod shared;
pub mod strings;
pub mod validators;

pub use fields::{Field, FieldKind};
pub use validators::Validator;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::error::{Error, Result};

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.messages
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &BTreeMap<String, Vec<String>> {
        &self.messages
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.messages.get(name).map(Vec::as_slice)
    }

    /// Flattens to `"field: message"` lines, used when nesting schemas.
    pub(crate) fn flat_messages(&self) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |m| format!("{field}: {m}"))
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .messages
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate a JSON object and return the cleaned output map.
    ///
    /// Keys not declared on the schema are excluded from the output.
    pub fn load(&self, input: &Value) -> Result<Map<String, Value>> {
        self.check(input).map_err(Error::Validation)
    }

    pub(crate) fn check(
        &self,
        input: &Value,
    ) -> std::result::Result<Map<String, Value>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = input.as_object() else {
            errors.push("_schema", strings::INPUT_MUST_BE_OBJECT);
            return Err(errors);
        };

        let mut output = Map::new();
        for field in &self.fields {
            match object.get(field.name()) {
                None => {
                    if field.is_required() {
                        errors.push(field.name(), strings::missing_required_field(field.name()));
                    }
                }
                Some(value) => match field.validate(value) {
                    Ok(coerced) => {
                        output.insert(field.name().to_string(), coerced);
                    }
                    Err(messages) => {
                        for message in messages {
                            errors.push(field.name(), message);
                        }
                    }
                },
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device_schema() -> Schema {
        Schema::new()
            .field(Field::positive_integer("deviceId"))
            .field(Field::string("name"))
            .field(Field::boolean("active").required(false))
    }

    #[test]
    fn test_load_drops_unknown_keys() {
        let output = device_schema()
            .load(&json!({"deviceId": 7, "name": "sensor", "rogue": true}))
            .unwrap();
        assert_eq!(output.get("deviceId"), Some(&json!(7)));
        assert_eq!(output.get("name"), Some(&json!("sensor")));
        assert!(!output.contains_key("rogue"));
    }

    #[test]
    fn test_missing_required_field() {
        let err = device_schema()
            .load(&json!({"deviceId": 7}))
            .unwrap_err();
        let Error::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.field("name"),
            Some(&["Missing required field 'name'.".to_string()][..])
        );
        // Optional field absent is fine.
        assert!(errors.field("active").is_none());
    }

    #[test]
    fn test_all_errors_collected() {
        let err = device_schema()
            .load(&json!({"deviceId": 0, "name": 3, "active": "yes"}))
            .unwrap_err();
        let Error::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.messages().len(), 3);
        assert_eq!(
            errors.field("deviceId"),
            Some(&["'deviceId' must be a positive integer.".to_string()][..])
        );
    }

    #[test]
    fn test_non_object_input() {
        let err = device_schema().load(&json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("Input must be an object."));
    }

    #[test]
    fn test_nested_schema_errors_are_prefixed() {
        let schema = Schema::new().field(Field::nested(
            "workspace",
            Schema::new().field(Field::non_negative_integer("workspaceId")),
        ));
        let err = schema
            .load(&json!({"workspace": {"workspaceId": -2}}))
            .unwrap_err();
        let Error::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.field("workspace"),
            Some(
                &["workspaceId: 'workspaceId' must be a non-negative integer.".to_string()][..]
            )
        );
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.push("a", "first");
        errors.push("a", "second");
        errors.push("b", "third");
        assert_eq!(errors.to_string(), "a: first, second; b: third");
    }
}
