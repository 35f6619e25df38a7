//! User domain model

use serde::{Deserialize, Serialize};

/// Minimum age at which a user counts as an adult
pub const ADULT_AGE: u32 = 18;

/// Represents a user in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl User {
    /// Create a user without an age
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
        }
    }

    /// Set the user's age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Greeting message for the user
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// True when the age is known and at least [`ADULT_AGE`].
    /// An unknown age never counts as adult.
    pub fn is_adult(&self) -> bool {
        matches!(self.age, Some(age) if age >= ADULT_AGE)
    }

    /// True when the email field contains an `@`
    pub fn has_email(&self) -> bool {
        self.email.contains('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        let user = User::new("Alice", "alice@example.com");
        assert_eq!(user.greet(), "Hello, Alice!");
    }

    #[test]
    fn test_is_adult_with_age() {
        let adult = User::new("Bob", "bob@example.com").with_age(25);
        let minor = User::new("Charlie", "charlie@example.com").with_age(15);

        assert!(adult.is_adult());
        assert!(!minor.is_adult());
    }

    #[test]
    fn test_is_adult_without_age() {
        let user = User::new("Dana", "dana@example.com");
        assert!(!user.is_adult());
    }

    #[test]
    fn test_is_adult_boundary() {
        assert!(User::new("Eve", "eve@example.com").with_age(18).is_adult());
        assert!(!User::new("Finn", "finn@example.com").with_age(17).is_adult());
        assert!(!User::new("Gus", "gus@example.com").with_age(0).is_adult());
    }

    #[test]
    fn test_has_email() {
        assert!(User::new("Hal", "hal@example.com").has_email());
        assert!(User::new("Ida", "@").has_email());
        assert!(!User::new("Jon", "jon.example.com").has_email());
        assert!(!User::new("Kim", "").has_email());
    }

    #[test]
    fn test_serde_age_optional() {
        let user: User = serde_json::from_str(r#"{"name":"Lee","email":"lee@example.com"}"#).unwrap();
        assert_eq!(user.age, None);

        let user: User =
            serde_json::from_str(r#"{"name":"Lee","email":"lee@example.com","age":null}"#).unwrap();
        assert_eq!(user.age, None);

        let json = serde_json::to_string(&User::new("Lee", "lee@example.com")).unwrap();
        assert!(!json.contains("age"));
    }
}
