//! Error-message templates shared by all field factories.

pub fn missing_required_field(name: &str) -> String {
    format!("Missing required field '{name}'.")
}

pub fn field_may_not_be_null(name: &str) -> String {
    format!("'{name}' may not be null.")
}

pub fn must_be_integer(name: &str) -> String {
    format!("'{name}' must be an integer.")
}

pub fn must_be_positive_integer(name: &str) -> String {
    format!("'{name}' must be a positive integer.")
}

pub fn must_be_non_negative_integer(name: &str) -> String {
    format!("'{name}' must be a non-negative integer.")
}

pub fn must_be_string(name: &str) -> String {
    format!("'{name}' must be a string.")
}

pub fn string_must_be_non_empty(name: &str) -> String {
    format!("'{name}' may not be an empty string.")
}

pub fn must_be_boolean(name: &str) -> String {
    format!("'{name}' must be a boolean.")
}

pub fn must_be_list(name: &str) -> String {
    format!("'{name}' must be a list.")
}

pub fn list_must_be_non_empty(name: &str) -> String {
    format!("'{name}' may not be an empty list.")
}

pub fn must_be_object(name: &str) -> String {
    format!("'{name}' must be an object.")
}

pub const NOT_VALID_EMAIL: &str = "Not a valid email address.";
pub const INPUT_MUST_BE_OBJECT: &str = "Input must be an object.";
