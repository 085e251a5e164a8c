//! Authenticated REST calls
//!
//! Every request carries `Authorization: Bearer <token>` when a session
//! cookie is present. Errors are plain strings for display.

use contracts::domain::common::ListResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

fn request(method: Method, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };
    authorized(builder)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turn a non-2xx response into an error, preferring the server's `error` field
async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(server_error_message(status, &body))
}

pub fn server_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Request failed: {}", status))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a collection that may come back bare or wrapped in `{ data }`
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    get_json::<ListResponse<T>>(path).await.map(ListResponse::into_vec)
}

pub async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<(), String> {
    let response = request(method, path)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response).await.map(|_| ())
}

/// Multipart upload; the browser sets the boundary header
pub async fn send_form(method: Method, path: &str, form: web_sys::FormData) -> Result<(), String> {
    let response = request(method, path)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        assert_eq!(
            server_error_message(409, r#"{"error":"Vehicle already registered"}"#),
            "Vehicle already registered"
        );
        assert_eq!(server_error_message(500, "<html>"), "Request failed: 500");
        assert_eq!(server_error_message(401, r#"{"message":"Unauthorized"}"#), "Unauthorized");
    }
}
