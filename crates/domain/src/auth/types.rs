use serde::{Deserialize, Serialize};

/// Token type the backend issues.
pub const BEARER: &str = "Bearer";

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Plain-text password; hashing happens server-side.
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    /// Usually `"Bearer"`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of the token in seconds; a missing value yields an
    /// already-expired session.
    #[serde(default)]
    pub expires_in: i64,
}

fn default_token_type() -> String {
    BEARER.to_string()
}
