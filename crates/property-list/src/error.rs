use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyListError {
    #[error("property list json must be an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("property `{key}` must have a string value")]
    NonStringValue { key: String },
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
