use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_ack, read_envelope, send_error};

/// Fetch the current shop open/closed status.
pub async fn get_status() -> Result<i32, String> {
    let response = Request::get(&api_url("/admin/shop/status"))
        .send()
        .await
        .map_err(send_error)?;
    read_envelope::<i32>(response).await
}

/// Set the shop open/closed status.
pub async fn set_status(status: i32) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/admin/shop/{}", status)))
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}
