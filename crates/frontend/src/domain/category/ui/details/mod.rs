use contracts::domain::category::{
    validate_name, validate_sort, CategoryForm, CategoryFormErrors, TYPE_DISH,
};
use leptos::prelude::*;

use crate::domain::category::api;
use crate::shared::toast::ToastService;

/// Create/edit dialog for a category.
///
/// Edit mode receives the buffer copied from the already-loaded row;
/// there is no detail fetch. The create variant offers "save and
/// continue adding", which resets the buffer but keeps the dialog
/// open and the category type.
#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails(
    initial: CategoryForm,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let is_edit = initial.id.is_some();
    let category_type = initial.category_type;
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(CategoryFormErrors::default());
    let saving = RwSignal::new(false);

    let title = if is_edit {
        "修改分类"
    } else if category_type == TYPE_DISH {
        "新增菜品分类"
    } else {
        "新增套餐分类"
    };

    // Submit re-validates every field; on failure all errors become
    // visible and nothing is sent.
    let submit = move |continue_adding: bool| {
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
                    toast.success(format!("{}分类成功", verb));
                    on_saved.run(());
                    if continue_adding {
                        form.set(CategoryForm::blank(category_type));
                        errors.set(CategoryFormErrors::default());
                    } else {
                        on_close.run(());
                    }
                }
                Err(e) => {
                    log::error!("{}分类失败: {}", verb, e);
                    toast.error(format!("{}分类失败", verb), Some(e));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <div class="modal__title">{title}</div>

                <div class="form">
                    <div class="form__field">
                        <label class="form__label">
                            <span class="form__required">"*"</span>
                            " 分类名称："
                        </label>
                        <input
                            class="input"
                            class:input--error=move || errors.with(|e| e.name.is_some())
                            placeholder="请输入分类名称"
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
                            " 排序："
                        </label>
                        <input
                            class="input"
                            class:input--error=move || errors.with(|e| e.sort.is_some())
                            type="number"
                            placeholder="请输入排序"
                            prop:value=move || form.with(|f| f.sort.clone())
                            disabled=move || saving.get()
                            on:input=move |ev| {
                                form.update(|f| f.sort = event_target_value(&ev));
                                errors.update(|e| e.sort = None);
                            }
                            on:blur=move |ev| {
                                let value = event_target_value(&ev);
                                errors.update(|e| e.sort = validate_sort(&value));
                            }
                        />
                        {move || {
                            errors
                                .with(|e| e.sort.clone())
                                .map(|msg| view! { <p class="form__error">{msg}</p> })
                        }}
                    </div>
                </div>

                <div class="modal__footer">
                    <button
                        class="button button--secondary"
                        disabled=move || saving.get()
                        on:click=move |_| on_close.run(())
                    >
                        "取消"
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit(false)
                    >
                        {move || if saving.get() { "提交中..." } else { "确定" }}
                    </button>
                    <Show when=move || !is_edit>
                        <button
                            class="button button--accent"
                            disabled=move || saving.get()
                            on:click=move |_| submit(true)
                        >
                            {move || if saving.get() { "提交中..." } else { "保存并继续添加" }}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
