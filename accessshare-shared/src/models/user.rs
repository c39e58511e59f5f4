use serde::{Deserialize, Serialize};

/// Represents a user account as returned by the AccessShare backend.
///
/// The frontend treats this as an immutable snapshot: it is replaced
/// wholesale whenever the backend confirms a session and cleared on
/// logout or account deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's email address.
    pub email: String,

    /// The user's username.
    pub username: String,

    /// The user's full name, when provided during registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// The user's phone number, when provided during registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request to authenticate a user with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to create a new user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's email address.
    pub email: String,

    /// The user's username.
    pub username: String,

    /// The user's password.
    pub password: String,

    /// Optional full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "a@x.com".to_string(),
            username: "a".to_string(),
            full_name: None,
            phone_number: None,
        }
    }

    #[test]
    fn test_user_creation() {
        let user = sample_user();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.username, "a");
        assert!(user.full_name.is_none());
        assert!(user.phone_number.is_none());
    }

    #[test]
    fn test_user_equality() {
        let user1 = sample_user();
        let user2 = sample_user();
        let user3 = User {
            id: 2,
            email: "b@x.com".to_string(),
            username: "b".to_string(),
            full_name: None,
            phone_number: None,
        };

        assert_eq!(user1, user2, "Users with the same data should be equal");
        assert_ne!(
            user1, user3,
            "Users with different data should not be equal"
        );
    }

    #[test]
    fn test_user_serialization() {
        let user = User {
            id: 42,
            email: "test@example.com".to_string(),
            username: "testuser".to_string(),
            full_name: Some("Test User".to_string()),
            phone_number: Some("+15550100".to_string()),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
        assert_eq!(deserialized.id, 42);
        assert_eq!(deserialized.username, "testuser");
        assert_eq!(deserialized.full_name.as_deref(), Some("Test User"));
    }

    #[test]
    fn test_user_optional_fields_absent() {
        // The backend omits full_name/phone_number for accounts that never
        // provided them.
        let json = r#"{"id":1,"email":"a@x.com","username":"a"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user, sample_user());
    }

    #[test]
    fn test_user_optional_fields_not_serialized_when_none() {
        let json = serde_json::to_string(&sample_user()).unwrap();

        assert!(!json.contains("full_name"));
        assert!(!json.contains("phone_number"));
    }

    #[test]
    fn test_login_request() {
        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
    }

    #[test]
    fn test_register_request() {
        let request = RegisterRequest {
            email: "test@example.com".to_string(),
            username: "testuser".to_string(),
            password: "password123".to_string(),
            full_name: None,
            phone_number: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("testuser"));
        assert!(
            !json.contains("full_name"),
            "absent optional fields should be omitted from the payload"
        );
    }
}
