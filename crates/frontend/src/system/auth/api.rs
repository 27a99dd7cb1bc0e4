use contracts::system::auth::{ErrorResponse, LoginRequest, LoginResponse, ValidationErrors};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Turns a failed login response body into a message for the user.
pub fn login_error_message(status: u16, body: &str) -> String {
    if status == 400 {
        if let Ok(validation) = serde_json::from_str::<ValidationErrors>(body) {
            let messages: Vec<String> = validation.errors.into_iter().map(|e| e.msg).collect();
            if !messages.is_empty() {
                return messages.join(" ");
            }
        }
    }

    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => response.error,
        Err(_) => format!("Login failed: {}", status),
    }
}

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(login_error_message(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
