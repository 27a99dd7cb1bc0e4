use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
///
/// Missing fields deserialize to empty strings so that the server can report
/// them through the validation error list instead of a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
    pub token: String,
}

/// Authenticated user merged with its council profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: Option<String>,
    pub nome: Option<String>,
    pub role: Option<String>,
    /// Passed through as stored by the profile service (uuid or numeric key).
    pub camara_id: Option<serde_json::Value>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Error body used by every non-validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error body of a `400 Bad Request` produced by request validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
    pub path: String,
    pub location: String,
}

impl FieldError {
    pub fn body(path: &str, msg: &str) -> Self {
        Self {
            kind: "field".to_string(),
            msg: msg.to_string(),
            path: path.to_string(),
            location: "body".to_string(),
        }
    }
}
