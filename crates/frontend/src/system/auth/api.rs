use contracts::system::auth::{SignInRequest, SignInResponse, SignUpRequest};
use gloo_net::http::Request;

use crate::shared::api::server_error_message;
use crate::shared::api_utils::api_url;

/// Sign in with email and password
pub async fn sign_in(request: &SignInRequest) -> Result<SignInResponse, String> {
    let response = Request::post(&api_url("/api/v1/user/signin"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(server_error_message(status, &body));
    }

    response
        .json::<SignInResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create an account
pub async fn sign_up(request: &SignUpRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/v1/user/signup"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(server_error_message(status, &body));
    }

    Ok(())
}
