use serde::{Deserialize, Serialize};

/// Error envelope produced by the AccessShare backend.
///
/// Failed requests carry a single `detail` string describing what went
/// wrong.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The error message.
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new error response with the provided detail message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Authentication required");
        assert_eq!(error.detail, "Authentication required");
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"detail":"User not found"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.detail, "User not found");
    }

    #[test]
    fn test_error_response_display() {
        let error = ErrorResponse::new("Invalid credentials");
        assert_eq!(format!("{error}"), "Invalid credentials");
    }

    #[test]
    fn test_error_response_as_error() {
        let error = ErrorResponse::new("Server error");
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.to_string().contains("Server error"));
    }

    #[test]
    fn test_error_response_equality() {
        let error1 = ErrorResponse::new("Same message");
        let error2 = ErrorResponse::new("Same message");
        let error3 = ErrorResponse::new("Different message");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
