use contracts::system::auth::PasswordPayload;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_ack, send_error};

/// Log the current employee out.
pub async fn logout() -> Result<(), String> {
    let response = Request::post(&api_url("/admin/employee/logout"))
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}

/// Change the current employee's password.
pub async fn update_password(payload: &PasswordPayload) -> Result<(), String> {
    let response = Request::put(&api_url("/admin/employee/editPassword"))
        .json(payload)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}
