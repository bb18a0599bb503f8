use contracts::domain::category::{Category, CategoryPageQuery, CategoryPayload};
use contracts::shared::list::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query, read_ack, read_envelope, send_error};

/// Fetch one page of categories.
pub async fn page(query: CategoryPageQuery) -> Result<Paged<Category>, String> {
    let url = api_url_with_query("/admin/category/page", &query)?;
    let response = Request::get(&url).send().await.map_err(send_error)?;
    read_envelope::<Paged<Category>>(response).await
}

/// Enable or disable a category.
pub async fn toggle_status(status: i32, id: i64) -> Result<(), String> {
    let url = api_url(&format!("/admin/category/status/{}?id={}", status, id));
    let response = Request::post(&url).send().await.map_err(send_error)?;
    read_ack(response).await
}

/// Create a new category.
pub async fn create(payload: &CategoryPayload) -> Result<(), String> {
    let response = Request::post(&api_url("/admin/category"))
        .json(payload)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}

/// Update an existing category.
pub async fn update(payload: &CategoryPayload) -> Result<(), String> {
    let response = Request::put(&api_url("/admin/category"))
        .json(payload)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    read_ack(response).await
}

/// Delete a category.
pub async fn delete(id: i64) -> Result<(), String> {
    let url = api_url(&format!("/admin/category?id={}", id));
    let response = Request::delete(&url).send().await.map_err(send_error)?;
    read_ack(response).await
}

/// All categories of one type, for dropdowns.
pub async fn list_by_type(category_type: i32) -> Result<Vec<Category>, String> {
    let url = api_url(&format!("/admin/category/list?type={}", category_type));
    let response = Request::get(&url).send().await.map_err(send_error)?;
    read_envelope::<Vec<Category>>(response).await
}
