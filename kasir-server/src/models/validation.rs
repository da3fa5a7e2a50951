//! Validation error types

use std::fmt;

/// Client input that could not be turned into a request
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required parameter missing or empty
    Empty { field: &'static str },

    /// String doesn't parse into the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");

        let err = ValidationError::Empty { field: "start_date" };
        assert_eq!(err.to_string(), "start_date is required");
    }
}
