use contracts::system::shop::{status_text, STATUS_CLOSED, STATUS_OPEN};
use leptos::prelude::*;

use crate::shared::toast::ToastService;
use crate::system::shop;

/// Dialog switching the shop between open and closed. The button for
/// the state the shop is already in stays disabled, as do both while
/// a change is saving.
#[component]
#[allow(non_snake_case)]
pub fn ShopStatusDialog(
    #[prop(into)] open: RwSignal<bool>,
    /// Shared with the header badge; updated in place on success.
    status: RwSignal<Option<i32>>,
) -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");
    let saving = RwSignal::new(false);

    let apply = move |new_status: i32| {
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = shop::api::set_status(new_status).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    status.set(Some(new_status));
                    toast.success(format!("已设置为{}", status_text(new_status)));
                    open.set(false);
                }
                Err(e) => {
                    log::error!("设置营业状态失败: {}", e);
                    toast.error("设置营业状态失败", Some(e));
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal-content modal-content--confirm" on:click=|e| e.stop_propagation()>
                    <div class="modal__title">"营业状态设置"</div>
                    <div class="modal__body modal__body--choices">
                        <button
                            class="choice"
                            class:choice--active=move || status.get() == Some(STATUS_OPEN)
                            disabled=move || saving.get() || status.get() == Some(STATUS_OPEN)
                            on:click=move |_| apply(STATUS_OPEN)
                        >
                            <div class="choice__title">"营业中"</div>
                            <div class="choice__hint">
                                "当前餐厅处于营业状态，自动接收任何订单"
                            </div>
                        </button>
                        <button
                            class="choice"
                            class:choice--active=move || status.get() == Some(STATUS_CLOSED)
                            disabled=move || saving.get() || status.get() == Some(STATUS_CLOSED)
                            on:click=move |_| apply(STATUS_CLOSED)
                        >
                            <div class="choice__title">"打烊中"</div>
                            <div class="choice__hint">
                                "当前餐厅处于打烊状态，仅接受营业时间内的预定订单"
                            </div>
                        </button>
                    </div>
                    <div class="modal__footer">
                        <button
                            class="button button--secondary"
                            disabled=move || saving.get()
                            on:click=move |_| open.set(false)
                        >
                            "取消"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
