use thiserror::Error;

/// Errors turning raw form values into typed calculator parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A field the calculator needs is absent or blank.
    #[error("missing value for field '{field}'")]
    Missing { field: String },

    /// A numeric field holds text that is not a finite number.
    #[error("field '{field}' expects a number, got '{value}'")]
    NotNumeric { field: String, value: String },

    /// A date field is not `YYYY-MM-DD` or RFC 3339.
    #[error("field '{field}' expects a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: String, value: String },

    /// A `key=value` argument without `=` or with an empty key.
    #[error("invalid assignment '{0}' (expected name=value)")]
    BadAssignment(String),

    /// An inputs document (JSON/YAML) that is not a flat object of values.
    #[error("invalid inputs document: {0}")]
    Document(String),
}
