use contracts::domain::category::{Category, TYPE_COMBO};
use contracts::domain::setmeal::{
    validate_category_id, validate_name, validate_price, SetmealForm, SetmealFormErrors,
};
use contracts::shared::upload::validate_image_file;
use leptos::prelude::*;

use crate::domain::category;
use crate::domain::setmeal::api;
use crate::shared::toast::ToastService;

/// Create/edit dialog for a combo.
///
/// Edit mode opens in a loading state and fetches the full detail; a
/// failed fetch closes the dialog again. The image goes through an
/// upload side-channel: the buffer only ever holds a URL a completed
/// upload produced, and submit stays blocked while one is in flight.
#[component]
#[allow(non_snake_case)]
pub fn SetmealDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let is_edit = id.is_some();
    let form = RwSignal::new(SetmealForm::blank());
    let errors = RwSignal::new(SetmealFormErrors::default());
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let detail_loading = RwSignal::new(is_edit);

    if let Some(id) = id {
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_by_id(id).await {
                Ok(detail) => {
                    form.set(SetmealForm::from_setmeal(&detail));
                    detail_loading.set(false);
                }
                Err(e) => {
                    log::error!("获取套餐详情失败: {}", e);
                    toast.error("获取套餐详情失败", Some(e));
                    on_close.run(());
                }
            }
        });
    }

    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    wasm_bindgen_futures::spawn_local(async move {
        match category::api::list_by_type(TYPE_COMBO).await {
            Ok(found) => categories.set(found),
            Err(e) => {
                log::error!("获取套餐分类失败: {}", e);
                toast.error("获取套餐分类失败", Some(e));
            }
        }
    });

    // Preconditions are checked before any network call; on upload
    // failure the previous preview stays in place.
    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // allow re-picking the same file after a failure
        input.set_value("");

        if let Err(msg) = validate_image_file(&file.type_(), file.size() as u64) {
            toast.error("图片上传失败", Some(msg));
            return;
        }

        uploading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::upload_image(file).await;
            uploading.set(false);
            match result {
                Ok(url) => {
                    form.update(|f| f.image = url);
                    errors.update(|e| e.image = None);
                }
                Err(e) => {
                    log::error!("图片上传失败: {}", e);
                    toast.error("图片上传失败", Some(e));
                }
            }
        });
    };

    let busy = move || saving.get() || uploading.get() || detail_loading.get();

    let submit = move |_| {
        if uploading.get_untracked() || saving.get_untracked() {
            return;
        }
        let current = form.get();
        let found = current.validate();
        if !found.is_clean() {
            errors.set(found);
            toast.error(
                "表单校验失败",
                Some("请检查表单信息，确保所有字段填写正确".to_string()),
            );
            return;
        }
        let payload = match current.payload() {
            Some(p) => p,
            None => return,
        };

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let verb = if is_edit { "修改" } else { "新增" };
            let result = if is_edit {
                api::update(&payload).await
            } else {
                api::create(&payload).await
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(format!("{}套餐成功", verb));
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("{}套餐失败: {}", verb, e);
                    toast.error(format!("{}套餐失败", verb), Some(e));
                }
            }
        });
    };

    let title = if is_edit { "修改套餐" } else { "新增套餐" };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content modal-content--wide" on:click=|e| e.stop_propagation()>
                <div class="modal__title">{title}</div>

                <Show
                    when=move || !detail_loading.get()
                    fallback=|| view! { <div class="modal__loading">"加载中..."</div> }
                >
                    <div class="form">
                        <div class="form__field">
                            <label class="form__label">
                                <span class="form__required">"*"</span>
                                " 套餐名称："
                            </label>
                            <input
                                class="input"
                                class:input--error=move || errors.with(|e| e.name.is_some())
                                placeholder="请输入套餐名称"
                                prop:value=move || form.with(|f| f.name.clone())
                                disabled=move || saving.get()
                                on:input=move |ev| {
                                    form.update(|f| f.name = event_target_value(&ev));
                                    errors.update(|e| e.name = None);
                                }
                                on:blur=move |ev| {
                                    let value = event_target_value(&ev);
                                    errors.update(|e| e.name = validate_name(&value));
                                }
                            />
                            {move || {
                                errors
                                    .with(|e| e.name.clone())
                                    .map(|msg| view! { <p class="form__error">{msg}</p> })
                            }}
                        </div>

                        <div class="form__field">
                            <label class="form__label">
                                <span class="form__required">"*"</span>
                                " 套餐分类："
                            </label>
                            <select
                                class="select"
                                class:select--error=move || {
                                    errors.with(|e| e.category_id.is_some())
                                }
                                prop:value=move || form.with(|f| f.category_id.to_string())
                                disabled=move || saving.get()
                                on:change=move |ev| {
                                    let chosen =
                                        event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                    form.update(|f| f.category_id = chosen);
                                    errors.update(|e| e.category_id = validate_category_id(chosen));
                                }
                            >
                                <option value="0">"请选择套餐分类"</option>
                                {move || {
                                    categories
                                        .get()
                                        .into_iter()
                                        .map(|c| {
                                            view! {
                                                <option value=c.id.to_string()>{c.name.clone()}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                            {move || {
                                errors
                                    .with(|e| e.category_id.clone())
                                    .map(|msg| view! { <p class="form__error">{msg}</p> })
                            }}
                        </div>

                        <div class="form__field">
                            <label class="form__label">
                                <span class="form__required">"*"</span>
                                " 套餐价格："
                            </label>
                            <input
                                class="input"
                                class:input--error=move || errors.with(|e| e.price.is_some())
                                type="number"
                                placeholder="请输入套餐价格"
                                prop:value=move || form.with(|f| f.price.clone())
                                disabled=move || saving.get()
                                on:input=move |ev| {
                                    form.update(|f| f.price = event_target_value(&ev));
                                    errors.update(|e| e.price = None);
                                }
                                on:blur=move |ev| {
                                    let value = event_target_value(&ev);
                                    errors.update(|e| e.price = validate_price(&value));
                                }
                            />
                            {move || {
                                errors
                                    .with(|e| e.price.clone())
                                    .map(|msg| view! { <p class="form__error">{msg}</p> })
                            }}
                        </div>

                        <div class="form__field">
                            <label class="form__label">
                                <span class="form__required">"*"</span>
                                " 套餐图片："
                            </label>
                            <div class="upload">
                                {move || {
                                    let image = form.with(|f| f.image.clone());
                                    if image.is_empty() {
                                        view! { <div class="upload__placeholder">"+"</div> }
                                            .into_any()
                                    } else {
                                        view! { <img class="upload__preview" src=image /> }
                                            .into_any()
                                    }
                                }}
                                <label class="upload__trigger">
                                    {move || if uploading.get() { "上传中..." } else { "选择图片" }}
                                    <input
                                        type="file"
                                        class="upload__input"
                                        accept="image/png,image/jpeg,image/jpg"
                                        disabled=move || uploading.get() || saving.get()
                                        on:change=on_file_change
                                    />
                                </label>
                                <p class="upload__hint">
                                    "仅支持PNG、JPEG、JPG格式，大小不超过10M"
                                </p>
                            </div>
                            {move || {
                                errors
                                    .with(|e| e.image.clone())
                                    .map(|msg| view! { <p class="form__error">{msg}</p> })
                            }}
                        </div>

                        <div class="form__field">
                            <label class="form__label">"套餐描述："</label>
                            <textarea
                                class="textarea"
                                placeholder="套餐描述，最长200字"
                                prop:value=move || form.with(|f| f.description.clone())
                                disabled=move || saving.get()
                                on:input=move |ev| {
                                    form.update(|f| f.description = event_target_value(&ev));
                                }
                            ></textarea>
                        </div>

                        <Show when=move || form.with(|f| !f.dishes.is_empty())>
                            <div class="form__field">
                                <label class="form__label">"包含菜品："</label>
                                <ul class="dish-list">
                                    {move || {
                                        form.with(|f| {
                                            f.dishes
                                                .iter()
                                                .map(|d| {
                                                    view! {
                                                        <li class="dish-list__item">
                                                            {format!(
                                                                "{} x{} ¥{:.2}",
                                                                d.name,
                                                                d.copies,
                                                                d.price,
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                    }}
                                </ul>
                            </div>
                        </Show>
                    </div>
                </Show>

                <div class="modal__footer">
                    <button
                        class="button button--secondary"
                        disabled=move || saving.get()
                        on:click=move |_| on_close.run(())
                    >
                        "取消"
                    </button>
                    <button class="button button--primary" disabled=busy on:click=submit>
                        {move || if saving.get() { "提交中..." } else { "确定" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
