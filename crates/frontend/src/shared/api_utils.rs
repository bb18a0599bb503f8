//! API utilities for talking to the back-office REST service.
//!
//! All endpoints share the `{code, msg, data}` envelope; the helpers
//! here unwrap it and turn failures into user-facing messages.

use contracts::shared::envelope::{server_error_text, ApiResponse};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL for API requests. The back-office API is served from the
/// same origin as the dashboard.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}

/// Build a full API URL from a path (should start with "/admin/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Encode a query object and append it to an API path.
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("构造查询参数失败: {}", e))?;
    Ok(format!("{}{}?{}", api_base(), path, qs))
}

/// Unwrap a payload-carrying envelope response.
pub async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(server_error_text(None, Some(response.status())));
    }
    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("解析响应失败: {}", e))?;
    envelope.into_result()
}

/// Unwrap an acknowledge-only envelope response.
pub async fn read_ack(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(server_error_text(None, Some(response.status())));
    }
    let envelope: ApiResponse<serde_json::Value> = response
        .json()
        .await
        .map_err(|e| format!("解析响应失败: {}", e))?;
    envelope.into_ok()
}

pub fn send_error(e: gloo_net::Error) -> String {
    format!("网络请求失败: {}", e)
}
