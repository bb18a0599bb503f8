use contracts::system::auth::{PasswordField, PasswordForm};
use leptos::prelude::*;

use crate::shared::toast::ToastService;
use crate::system::auth;

/// Change-password dialog. Errors surface per field once it has been
/// blurred; submit re-validates everything and reveals whatever is
/// still wrong.
#[component]
#[allow(non_snake_case)]
pub fn PasswordDialog(emp_id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let form = RwSignal::new(PasswordForm::default());
    let saving = RwSignal::new(false);

    let field_error = move |field: PasswordField| {
        form.with(|f| f.visible_error(field).map(|s| s.to_string()))
    };

    let submit = move |_| {
        let mut ok = false;
        form.update(|f| ok = f.submit_check());
        if !ok {
            return;
        }
        let payload = form.with_untracked(|f| f.payload(emp_id.unwrap_or_default()));

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = auth::api::update_password(&payload).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("修改密码成功");
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("修改密码失败: {}", e);
                    toast.error("修改密码失败", Some(e));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <div class="modal__title">"修改密码"</div>

                <div class="form">
                    <div class="form__field">
                        <label class="form__label">
                            <span class="form__required">"*"</span>
                            " 原始密码："
                        </label>
                        <input
                            class="input"
                            class:input--error=move || {
                                field_error(PasswordField::Old).is_some()
                            }
                            type="password"
                            placeholder="请输入原始密码"
                            prop:value=move || form.with(|f| f.old_password.clone())
                            disabled=move || saving.get()
                            on:input=move |ev| {
                                form.update(|f| f.set_old_password(event_target_value(&ev)))
                            }
                            on:blur=move |_| form.update(|f| f.blur(PasswordField::Old))
                        />
                        {move || {
                            field_error(PasswordField::Old)
                                .map(|msg| view! { <p class="form__error">{msg}</p> })
                        }}
                    </div>

                    <div class="form__field">
                        <label class="form__label">
                            <span class="form__required">"*"</span>
                            " 新密码："
                        </label>
                        <input
                            class="input"
                            class:input--error=move || {
                                field_error(PasswordField::New).is_some()
                            }
                            type="password"
                            placeholder="6-20位，仅限数字或字母"
                            prop:value=move || form.with(|f| f.new_password.clone())
                            disabled=move || saving.get()
                            on:input=move |ev| {
                                form.update(|f| f.set_new_password(event_target_value(&ev)))
                            }
                            on:blur=move |_| form.update(|f| f.blur(PasswordField::New))
                        />
                        {move || {
                            field_error(PasswordField::New)
                                .map(|msg| view! { <p class="form__error">{msg}</p> })
                        }}
                    </div>

                    <div class="form__field">
                        <label class="form__label">
                            <span class="form__required">"*"</span>
                            " 确认密码："
                        </label>
                        <input
                            class="input"
                            class:input--error=move || {
                                field_error(PasswordField::Confirm).is_some()
                            }
                            type="password"
                            placeholder="请再次输入新密码"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            disabled=move || saving.get()
                            on:input=move |ev| {
                                form.update(|f| f.set_confirm_password(event_target_value(&ev)))
                            }
                            on:blur=move |_| form.update(|f| f.blur(PasswordField::Confirm))
                        />
                        {move || {
                            field_error(PasswordField::Confirm)
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
                    <button class="button button--primary" disabled=move || saving.get() on:click=submit>
                        {move || if saving.get() { "提交中..." } else { "确定" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
