//! User model and related payloads

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Role label that places a user in the administrators table
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Opaque user identifier
///
/// The backend emits numeric ids; the panel only ever echoes them back in
/// URLs, so they are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => UserId(text),
            Raw::Number(number) => UserId(number.to_string()),
        })
    }
}

// A record with a null or missing name/email still renders.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Whether the roles include [`ADMIN_ROLE`]; missing roles mean a regular user
    pub fn is_admin(&self) -> bool {
        self.roles
            .as_deref()
            .is_some_and(|roles| roles.iter().any(|role| role == ADMIN_ROLE))
    }

    /// Identifier text as shown in the table, empty when unsaved
    pub fn id_text(&self) -> String {
        self.id.as_ref().map(UserId::to_string).unwrap_or_default()
    }
}

/// Create/update request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

// Password is write-only, keep it out of logs.
impl fmt::Display for UserPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Error body sent by the API on failed writes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_deserializes_numeric_and_text_ids() {
        let numeric: User = serde_json::from_value(json!({
            "id": 42,
            "name": "Ada",
            "email": "ada@example.com",
            "password": "$2a$10$hash",
            "roles": ["ROLE_USER"],
            "createdAt": "2024-01-02T03:04:05.678"
        }))
        .unwrap();
        assert_eq!(numeric.id, Some(UserId::new("42")));
        assert_eq!(numeric.created_at.as_deref(), Some("2024-01-02T03:04:05.678"));
        assert_eq!(numeric.updated_at, None);

        let text: User = serde_json::from_value(json!({
            "id": "a1b2",
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(text.id_text(), "a1b2");
        assert_eq!(text.roles, None);
    }

    #[test]
    fn user_tolerates_null_or_missing_name_and_email() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"id": 1, "name": "Ada", "email": "a@x"},
            {"id": 2, "name": null, "email": "b@x"},
            {"id": 3, "name": "Cy"}
        ]))
        .unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[1].name, "");
        assert_eq!(users[1].email, "b@x");
        assert_eq!(users[2].email, "");
    }

    #[test]
    fn admin_membership_is_exact() {
        let mut user = User {
            id: None,
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            roles: None,
            created_at: None,
            updated_at: None,
        };
        assert!(!user.is_admin());

        user.roles = Some(vec![]);
        assert!(!user.is_admin());

        user.roles = Some(vec!["ROLE_ADMINISTRATOR".to_string(), "role_admin".to_string()]);
        assert!(!user.is_admin());

        user.roles = Some(vec!["ROLE_USER".to_string(), ADMIN_ROLE.to_string()]);
        assert!(user.is_admin());
    }

    #[test]
    fn payload_omits_absent_optional_fields() {
        let payload = UserPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: None,
            roles: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "Ada", "email": "ada@example.com"})
        );
        assert_eq!(payload.to_string(), "Ada <ada@example.com>");
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Email taken"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Email taken"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Bad Request"}"#).unwrap();
        assert_eq!(body.message, None);
    }
}
