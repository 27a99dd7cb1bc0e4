//! Identity provider seam.
//!
//! The login handler only sees [`IdentityProvider`]; [`SupabaseClient`] talks
//! to a Supabase-compatible REST API (GoTrue token endpoint plus PostgREST).

use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: String,
}

/// Row of the `profiles` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub role: Option<String>,
    pub nome: Option<String>,
    pub camara_id: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected identity provider response ({status}): {body}")]
    Unexpected { status: u16, body: String },
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError>;

    /// `Ok(None)` when the user has no profile row.
    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, IdentityError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    id: String,
    email: Option<String>,
}

/// Error body of the token endpoint. Older servers send
/// `error_description`, newer ones `msg`.
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

impl AuthErrorBody {
    fn message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.error)
    }
}

pub struct SupabaseClient {
    http: reqwest::Client,
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.url)
    }

    fn profile_url(&self, user_id: &str) -> String {
        format!(
            "{}/rest/v1/profiles?id=eq.{}&select=role,nome,camara_id",
            self.url,
            urlencoding::encode(user_id)
        )
    }
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError> {
        let response = self
            .http
            .post(self.token_url())
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AuthErrorBody>(&body)
                .ok()
                .and_then(AuthErrorBody::message)
                .unwrap_or_else(|| format!("status {}", status.as_u16()));
            return Err(IdentityError::InvalidCredentials(message));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Unexpected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(Session {
            user_id: token.user.id,
            email: token.user.email,
            access_token: token.access_token,
        })
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, IdentityError> {
        let response = self
            .http
            .get(self.profile_url(&session.user_id))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Unexpected {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<Profile> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}
