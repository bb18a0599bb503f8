use leptos::prelude::*;

/// Modal confirmation used by the toggle/delete/batch-delete flows.
///
/// Cancel (or a click on the overlay) just closes; confirm is left to
/// the caller, which also decides when to close the dialog.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: RwSignal<bool>,

    #[prop(into)] title: Signal<String>,

    #[prop(into)] message: Signal<String>,

    /// Render the confirm button in the destructive style
    #[prop(optional)]
    danger: bool,

    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_class = if danger {
        "button button--danger"
    } else {
        "button button--primary"
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal-content modal-content--confirm" on:click=|e| e.stop_propagation()>
                    <div class="modal__title">{move || title.get()}</div>
                    <div class="modal__body">{move || message.get()}</div>
                    <div class="modal__footer">
                        <button class="button button--secondary" on:click=move |_| open.set(false)>
                            "取消"
                        </button>
                        <button class=confirm_class on:click=move |_| on_confirm.run(())>
                            "确认"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
