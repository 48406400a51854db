//! Declarative field factories for validating JSON payloads.
//!
//! Each factory returns a [`Field`] preconfigured with the message templates
//! from [`strings`]; builder methods adjust the `required` / `allow_none` /
//! `strict` / `allow_empty` knobs and attach extra validators.

use serde_json::Value;

use super::strings;
use super::validators::{self, Validator};
use super::Schema;

#[derive(Clone)]
pub enum FieldKind {
    Integer,
    String,
    Email,
    Boolean,
    Raw,
    List(Box<Field>),
    Nested(Schema),
}

#[derive(Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    required: bool,
    allow_none: bool,
    strict: bool,
    allow_empty: bool,
    invalid_message: String,
    validators: Vec<Validator>,
}

impl Field {
    fn new(name: &str, kind: FieldKind, invalid_message: String) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: true,
            allow_none: false,
            strict: true,
            allow_empty: false,
            invalid_message,
            validators: Vec::new(),
        }
    }

    pub fn integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer, strings::must_be_integer(name))
    }

    /// Integer restricted to values >= 1.
    pub fn positive_integer(name: &str) -> Self {
        let message = strings::must_be_positive_integer(name);
        Self::new(name, FieldKind::Integer, message.clone())
            .validator(validators::range_min(1, message))
    }

    /// Integer restricted to values >= 0.
    pub fn non_negative_integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer, strings::must_be_integer(name)).validator(
            validators::range_min(0, strings::must_be_non_negative_integer(name)),
        )
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, FieldKind::String, strings::must_be_string(name))
    }

    /// String field with email-format validation.
    pub fn email(name: &str) -> Self {
        Self::new(name, FieldKind::Email, strings::NOT_VALID_EMAIL.to_string())
    }

    pub fn boolean(name: &str) -> Self {
        Self::new(name, FieldKind::Boolean, strings::must_be_boolean(name))
    }

    /// Passes the input value through unmodified.
    pub fn raw(name: &str) -> Self {
        Self::new(name, FieldKind::Raw, strings::must_be_object(name))
    }

    pub fn list(name: &str, item: Field) -> Self {
        Self::new(
            name,
            FieldKind::List(Box::new(item)),
            strings::must_be_list(name),
        )
    }

    pub fn nested(name: &str, schema: Schema) -> Self {
        Self::new(
            name,
            FieldKind::Nested(schema),
            strings::must_be_object(name),
        )
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn allow_none(mut self, allow_none: bool) -> Self {
        self.allow_none = allow_none;
        self
    }

    /// Non-strict integers accept integral floats and numeric strings;
    /// non-strict strings coerce numbers and booleans.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate and coerce a single value, collecting every message.
    pub(crate) fn validate(&self, value: &Value) -> Result<Value, Vec<String>> {
        if value.is_null() {
            return if self.allow_none {
                Ok(Value::Null)
            } else {
                Err(vec![strings::field_may_not_be_null(&self.name)])
            };
        }

        let coerced = self.coerce(value)?;

        let mut errors: Vec<String> = self
            .validators
            .iter()
            .filter_map(|validator| validator(&coerced))
            .collect();

        if !self.allow_empty
            && matches!(self.kind, FieldKind::String)
            && coerced.as_str().is_some_and(|s| s.trim().is_empty())
        {
            errors.push(strings::string_must_be_non_empty(&self.name));
        }

        if errors.is_empty() {
            Ok(coerced)
        } else {
            Err(errors)
        }
    }

    fn coerce(&self, value: &Value) -> Result<Value, Vec<String>> {
        match &self.kind {
            FieldKind::Integer => {
                let parsed = if self.strict {
                    value.as_i64()
                } else {
                    value
                        .as_i64()
                        .or_else(|| {
                            value
                                .as_f64()
                                .filter(|f| f.fract() == 0.0)
                                .map(|f| f as i64)
                        })
                        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<i64>().ok()))
                };
                parsed
                    .map(Value::from)
                    .ok_or_else(|| vec![self.invalid_message.clone()])
            }
            FieldKind::String => match value {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Number(n) if !self.strict => Ok(Value::String(n.to_string())),
                Value::Bool(b) if !self.strict => Ok(Value::String(b.to_string())),
                _ => Err(vec![self.invalid_message.clone()]),
            },
            FieldKind::Email => {
                let Value::String(s) = value else {
                    return Err(vec![strings::must_be_string(&self.name)]);
                };
                if !validators::is_valid_email(s) {
                    return Err(vec![strings::NOT_VALID_EMAIL.to_string()]);
                }
                Ok(Value::String(s.clone()))
            }
            FieldKind::Boolean => match value {
                Value::Bool(b) => Ok(Value::Bool(*b)),
                Value::String(s) if !self.strict => match s.to_ascii_lowercase().as_str() {
                    "true" | "1" => Ok(Value::Bool(true)),
                    "false" | "0" => Ok(Value::Bool(false)),
                    _ => Err(vec![self.invalid_message.clone()]),
                },
                Value::Number(n) if !self.strict && matches!(n.as_i64(), Some(0) | Some(1)) => {
                    Ok(Value::Bool(n.as_i64() == Some(1)))
                }
                _ => Err(vec![self.invalid_message.clone()]),
            },
            FieldKind::Raw => Ok(value.clone()),
            FieldKind::List(item) => {
                let Some(items) = value.as_array() else {
                    return Err(vec![strings::must_be_list(&self.name)]);
                };
                let mut errors = Vec::new();
                if !self.allow_empty && items.is_empty() {
                    errors.push(strings::list_must_be_non_empty(&self.name));
                }
                let mut output = Vec::with_capacity(items.len());
                for (index, element) in items.iter().enumerate() {
                    match item.validate(element) {
                        Ok(coerced) => output.push(coerced),
                        Err(messages) => {
                            errors.extend(messages.into_iter().map(|m| format!("[{index}] {m}")))
                        }
                    }
                }
                if errors.is_empty() {
                    Ok(Value::Array(output))
                } else {
                    Err(errors)
                }
            }
            FieldKind::Nested(schema) => {
                if !value.is_object() {
                    return Err(vec![strings::must_be_object(&self.name)]);
                }
                match schema.check(value) {
                    Ok(map) => Ok(Value::Object(map)),
                    Err(nested) => Err(nested.flat_messages()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_integer_rejects_strings_and_floats() {
        let field = Field::integer("count");
        assert_eq!(field.validate(&json!(5)).unwrap(), json!(5));
        assert!(field.validate(&json!("5")).is_err());
        assert!(field.validate(&json!(5.5)).is_err());
        assert!(field.validate(&json!(true)).is_err());
    }

    #[test]
    fn test_non_strict_integer_coerces() {
        let field = Field::integer("count").strict(false);
        assert_eq!(field.validate(&json!("12")).unwrap(), json!(12));
        assert_eq!(field.validate(&json!(12.0)).unwrap(), json!(12));
        assert!(field.validate(&json!("twelve")).is_err());
        assert!(field.validate(&json!(12.5)).is_err());
    }

    #[test]
    fn test_positive_integer_bounds() {
        let field = Field::positive_integer("count");
        assert!(field.validate(&json!(1)).is_ok());
        let errors = field.validate(&json!(0)).unwrap_err();
        assert_eq!(errors, vec!["'count' must be a positive integer.".to_string()]);
    }

    #[test]
    fn test_non_negative_integer_bounds() {
        let field = Field::non_negative_integer("offset");
        assert!(field.validate(&json!(0)).is_ok());
        let errors = field.validate(&json!(-1)).unwrap_err();
        assert_eq!(
            errors,
            vec!["'offset' must be a non-negative integer.".to_string()]
        );
    }

    #[test]
    fn test_null_handling() {
        let field = Field::integer("count");
        let errors = field.validate(&Value::Null).unwrap_err();
        assert_eq!(errors, vec!["'count' may not be null.".to_string()]);

        let field = Field::integer("count").allow_none(true);
        assert_eq!(field.validate(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_string_coercion_and_emptiness() {
        let strict = Field::string("name");
        assert!(strict.validate(&json!(42)).is_err());
        assert!(strict.validate(&json!("")).is_err());
        assert!(strict
            .clone()
            .allow_empty(true)
            .validate(&json!(""))
            .is_ok());

        let lenient = Field::string("workspaceId").strict(false);
        assert_eq!(lenient.validate(&json!(42)).unwrap(), json!("42"));
        assert_eq!(lenient.validate(&json!(true)).unwrap(), json!("true"));
    }

    #[test]
    fn test_email_field() {
        let field = Field::email("contact");
        assert!(field.validate(&json!("ops@example.com")).is_ok());
        let errors = field.validate(&json!("not-an-email")).unwrap_err();
        assert_eq!(errors, vec!["Not a valid email address.".to_string()]);
        assert!(field.validate(&json!(10)).is_err());
    }

    #[test]
    fn test_boolean_field() {
        let field = Field::boolean("enabled");
        assert_eq!(field.validate(&json!(true)).unwrap(), json!(true));
        assert!(field.validate(&json!("true")).is_err());

        let lenient = Field::boolean("enabled").strict(false);
        assert_eq!(lenient.validate(&json!("TRUE")).unwrap(), json!(true));
        assert_eq!(lenient.validate(&json!(0)).unwrap(), json!(false));
        assert!(lenient.validate(&json!(2)).is_err());
    }

    #[test]
    fn test_raw_field_passthrough() {
        let field = Field::raw("propertyValue");
        let value = json!({"nested": [1, 2, 3]});
        assert_eq!(field.validate(&value).unwrap(), value);
    }

    #[test]
    fn test_list_field() {
        let field = Field::list("ids", Field::positive_integer("ids"));
        assert_eq!(field.validate(&json!([1, 2, 3])).unwrap(), json!([1, 2, 3]));
        assert!(field.validate(&json!("not-a-list")).is_err());

        let errors = field.validate(&json!([])).unwrap_err();
        assert_eq!(errors, vec!["'ids' may not be an empty list.".to_string()]);
        assert!(field.clone().allow_empty(true).validate(&json!([])).is_ok());

        let errors = field.validate(&json!([1, 0, "x"])).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("[1]"));
        assert!(errors[1].starts_with("[2]"));
    }

    #[test]
    fn test_extra_validators_run_after_coercion() {
        let field = Field::integer("count")
            .strict(false)
            .validator(super::validators::range_min(10, "too small".to_string()));
        assert!(field.validate(&json!("15")).is_ok());
        let errors = field.validate(&json!("5")).unwrap_err();
        assert_eq!(errors, vec!["too small".to_string()]);
    }
}
