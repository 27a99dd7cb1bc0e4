use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contracts::system::auth::{
    ErrorResponse, FieldError, LoginResponse, UserInfo, ValidationErrors,
};
use serde_json::Value;

use crate::routes::AppState;
use crate::system::auth::identity::IdentityError;
use crate::system::auth::validation::parse_login;

pub const LOGIN_SUCCESS: &str = "Login bem-sucedido!";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Dados de login inválidos.")]
    Validation(Vec<FieldError>),
    #[error("Credenciais inválidas.")]
    InvalidCredentials,
    #[error("Perfil de usuário não encontrado.")]
    ProfileNotFound,
    #[error("Ocorreu um erro interno no servidor.")]
    Internal,
}

impl LoginError {
    pub fn status(&self) -> StatusCode {
        match self {
            LoginError::Validation(_) => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::ProfileNotFound => StatusCode::NOT_FOUND,
            LoginError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            LoginError::Validation(errors) => {
                (status, Json(ValidationErrors { errors })).into_response()
            }
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Login handler
///
/// The body is taken as loose JSON so that a missing content type, malformed
/// JSON or mistyped fields all end up in the validation error list.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LoginResponse>, LoginError> {
    tracing::info!("Login started");

    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!("Unreadable login body: {}", rejection.body_text());
            Value::Null
        }
    };

    let request = match parse_login(&body) {
        Ok(request) => request,
        Err(errors) => {
            tracing::warn!("Login validation failed: {} field(s)", errors.len());
            return Err(LoginError::Validation(errors));
        }
    };

    let email = request.email.trim();
    tracing::info!("Login email received: {}", email);

    let session = match state
        .identity
        .sign_in_with_password(email, &request.password)
        .await
    {
        Ok(session) => session,
        Err(IdentityError::InvalidCredentials(reason)) => {
            tracing::warn!("Identity provider rejected credentials: {}", reason);
            return Err(LoginError::InvalidCredentials);
        }
        Err(e) => {
            tracing::error!("Sign-in failed unexpectedly: {}", e);
            return Err(LoginError::Internal);
        }
    };
    tracing::info!("User authenticated: {}", session.user_id);

    let profile = match state.identity.fetch_profile(&session).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!("No profile for user {}", session.user_id);
            return Err(LoginError::ProfileNotFound);
        }
        Err(e) => {
            tracing::error!("Profile lookup failed for {}: {}", session.user_id, e);
            return Err(LoginError::Internal);
        }
    };

    tracing::info!(
        "Login completed for {} (role: {})",
        session.user_id,
        profile.role.as_deref().unwrap_or("-")
    );

    Ok(Json(LoginResponse {
        message: LOGIN_SUCCESS.to_string(),
        user: UserInfo {
            id: session.user_id,
            email: session.email,
            nome: profile.nome,
            role: profile.role,
            camara_id: profile.camara_id,
        },
        token: session.access_token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::identity::{IdentityProvider, Profile, Session};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    enum SignIn {
        Accept,
        Reject,
        Fail,
    }

    struct FakeIdentity {
        sign_in: SignIn,
        profile: Result<Option<Profile>, ()>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeIdentity {
        fn new(sign_in: SignIn, profile: Result<Option<Profile>, ()>) -> Self {
            Self {
                sign_in,
                profile,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for FakeIdentity {
        async fn sign_in_with_password(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<Session, IdentityError> {
            self.calls.lock().unwrap().push(format!("sign_in {}", email));
            match self.sign_in {
                SignIn::Accept => Ok(Session {
                    user_id: "u-1".to_string(),
                    email: Some(email.to_string()),
                    access_token: "jwt-token".to_string(),
                }),
                SignIn::Reject => Err(IdentityError::InvalidCredentials(
                    "Invalid login credentials".to_string(),
                )),
                SignIn::Fail => Err(IdentityError::Unexpected {
                    status: 503,
                    body: String::new(),
                }),
            }
        }

        async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, IdentityError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("profile {}", session.user_id));
            self.profile.clone().map_err(|_| IdentityError::Unexpected {
                status: 500,
                body: String::new(),
            })
        }
    }

    fn admin_profile() -> Profile {
        Profile {
            role: Some("admin".to_string()),
            nome: Some("Ana".to_string()),
            camara_id: Some(serde_json::json!(7)),
        }
    }

    fn state(identity: Arc<FakeIdentity>) -> AppState {
        AppState { identity }
    }

    fn body(email: &str, password: &str) -> Result<Json<Value>, JsonRejection> {
        Ok(Json(serde_json::json!({ "email": email, "password": password })))
    }

    async fn json_body(error: LoginError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_successful_login() {
        let identity = Arc::new(FakeIdentity::new(SignIn::Accept, Ok(Some(admin_profile()))));

        let Json(response) = login(State(state(identity.clone())), body("ana@camara.gov.br", "x"))
            .await
            .unwrap();

        assert_eq!(response.message, LOGIN_SUCCESS);
        assert_eq!(response.token, "jwt-token");
        assert_eq!(response.user.id, "u-1");
        assert_eq!(response.user.email.as_deref(), Some("ana@camara.gov.br"));
        assert_eq!(response.user.nome.as_deref(), Some("Ana"));
        assert!(response.user.is_admin());
        assert_eq!(response.user.camara_id, Some(serde_json::json!(7)));
        assert_eq!(
            *identity.calls.lock().unwrap(),
            vec!["sign_in ana@camara.gov.br".to_string(), "profile u-1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_body_never_reaches_provider() {
        let identity = Arc::new(FakeIdentity::new(SignIn::Accept, Ok(None)));

        let error = login(State(state(identity.clone())), body("ana", ""))
            .await
            .unwrap_err();

        assert!(identity.calls.lock().unwrap().is_empty());
        let (status, json) = json_body(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
        assert_eq!(json["errors"][0]["type"], "field");
        assert_eq!(json["errors"][0]["path"], "email");
        assert_eq!(json["errors"][1]["path"], "password");
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let identity = Arc::new(FakeIdentity::new(SignIn::Reject, Ok(None)));

        let error = login(State(state(identity)), body("ana@camara.gov.br", "errada"))
            .await
            .unwrap_err();

        let (status, json) = json_body(error).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Credenciais inválidas.");
    }

    #[tokio::test]
    async fn test_missing_profile() {
        let identity = Arc::new(FakeIdentity::new(SignIn::Accept, Ok(None)));

        let error = login(State(state(identity)), body("ana@camara.gov.br", "x"))
            .await
            .unwrap_err();

        let (status, json) = json_body(error).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Perfil de usuário não encontrado.");
    }

    #[tokio::test]
    async fn test_provider_failures_are_internal_errors() {
        for identity in [
            FakeIdentity::new(SignIn::Fail, Ok(None)),
            FakeIdentity::new(SignIn::Accept, Err(())),
        ] {
            let error = login(State(state(Arc::new(identity))), body("ana@camara.gov.br", "x"))
                .await
                .unwrap_err();

            let (status, json) = json_body(error).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json["error"], "Ocorreu um erro interno no servidor.");
        }
    }
}
