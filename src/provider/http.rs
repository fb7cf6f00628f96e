//! Shared HTTP client and header helpers.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::Error;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Bearer headers plus the opt-in the assistants endpoints require.
pub fn assistants_headers(api_key: &str) -> HeaderMap {
    let mut headers = bearer_headers(api_key);
    headers.insert("OpenAI-Beta", HeaderValue::from_static("assistants=v2"));
    headers
}

/// Map a non-success response to an error, preferring the provider's own
/// error message when the body carries one.
pub fn status_to_error(status: u16, body: &str) -> Error {
    let message = api_error_message(body).unwrap_or_else(|| body.trim().to_string());
    Error::api(status, message)
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_to_error_extracts_provider_message() {
        let err = status_to_error(500, r#"{"error":{"message":"model melted"}}"#);
        assert!(err.to_string().contains("model melted"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn status_to_error_falls_back_to_raw_body() {
        let err = status_to_error(503, "upstream gone\n");
        assert!(err.to_string().contains("upstream gone"));
    }
}
