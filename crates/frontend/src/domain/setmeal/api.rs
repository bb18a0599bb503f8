use contracts::domain::setmeal::{Setmeal, SetmealPageQuery, SetmealPayload};
use contracts::shared::list::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query, read_ack, read_envelope, send_error};

/// Fetch one page of combos.
pub async fn page(query: SetmealPageQuery) -> Result<Paged<Setmeal>, String> {
    let url = api_url_with_query("/admin/setmeal/page", &query)?;
    let response = Request::get(&url).send().await.map_err(send_error)?;
    read_envelope::<Paged<Setmeal>>(response).await
}

/// Full combo detail, including the nested dish list.
pub async fn get_by_id(id: i64) -> Result<Setmeal, String> {
    let url = api_url(&format!("/admin/setmeal/{}", id));
    let response = Request::get(&url).send().await.map_err(send_error)?;
    read_envelope::<Setmeal>(response).await
}

/// Create a new combo.
pub async fn create(payload: &SetmealPayload) -> Result<(), String> {
    let response = Request::post(&api_url("/admin/setmeal"))
        .json(payload)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}

/// Update an existing combo.
pub async fn update(payload: &SetmealPayload) -> Result<(), String> {
    let response = Request::put(&api_url("/admin/setmeal"))
        .json(payload)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}

/// Delete one or more combos. Single delete and batch delete share
/// this comma-joined ids path.
pub async fn delete_ids(ids: &[i64]) -> Result<(), String> {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let url = api_url(&format!("/admin/setmeal?ids={}", joined));
    let response = Request::delete(&url).send().await.map_err(send_error)?;
    read_ack(response).await
}

/// Put a combo on or off sale.
pub async fn toggle_status(status: i32, id: i64) -> Result<(), String> {
    let url = api_url(&format!("/admin/setmeal/status/{}?id={}", status, id));
    let response = Request::post(&url).send().await.map_err(send_error)?;
    read_ack(response).await
}

/// Upload an image through the shared media endpoint; the stored URL
/// comes back in the envelope payload.
pub async fn upload_image(file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|_| "构造上传表单失败".to_string())?;
    form.append_with_blob("file", &file)
        .map_err(|_| "构造上传表单失败".to_string())?;

    let response = Request::post(&api_url("/admin/common/upload"))
        .body(form)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    read_envelope::<String>(response).await
}
