//! Core data types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primary key of a user row (`SERIAL`)
pub type UserId = i32;

/// A user record as stored and as exchanged over HTTP.
///
/// Every field defaults, so a request body that omits `id` (or any other
/// field) still decodes. The `id` of an incoming body is never trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Decode a request body, matching object keys case-insensitively.
    ///
    /// `{"Name": "A"}` fills `name`. When a key appears both exactly and in
    /// another case, the exact spelling wins.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let value = match serde_json::from_slice(body)? {
            Value::Object(object) => Value::Object(fold_keys(object)),
            other => other,
        };
        serde_json::from_value(value)
    }

    /// Fields a caller is allowed to write
    pub fn fields(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

fn fold_keys(object: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(object.len());
    for (key, value) in object {
        let lower = key.to_lowercase();
        if key == lower || !folded.contains_key(&lower) {
            folded.insert(lower, value);
        }
    }
    folded
}

/// Caller-controlled part of a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let user: User = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(user, User::new(0, "Alice", ""));
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"id":"one"}"#).is_err());
        assert!(User::from_json(br#"{"Name":42}"#).is_err());
    }

    #[test]
    fn test_keys_match_any_case() {
        let user = User::from_json(br#"{"Name":"Cap","EMAIL":"c@x"}"#).unwrap();
        assert_eq!(user, User::new(0, "Cap", "c@x"));
    }

    #[test]
    fn test_exact_key_wins() {
        let user = User::from_json(br#"{"name":"exact","Name":"folded"}"#).unwrap();
        assert_eq!(user.name, "exact");

        let user = User::from_json(br#"{"Name":"folded","name":"exact"}"#).unwrap();
        assert_eq!(user.name, "exact");
    }

    #[test]
    fn test_syntax_errors_report_eof() {
        let err = User::from_json(b"{\"name\": ").unwrap_err();
        assert!(err.to_string().contains("EOF"));
    }
}
