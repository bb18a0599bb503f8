use contracts::system::shop::{status_text, STATUS_OPEN};
use leptos::prelude::*;

use crate::layout::header::password_dialog::PasswordDialog;
use crate::layout::header::shop_status_dialog::ShopStatusDialog;
use crate::shared::toast::ToastService;
use crate::system::auth;
use crate::system::shop;

/// Top bar: logo, shop open/closed badge with its setting dialog, and
/// the user menu (change password, logout).
#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");
    let session = auth::context::use_session();

    let display_name = session.user_name.clone().unwrap_or_else(|| "管理员".to_string());
    let emp_id = session.user_id;

    // None while the initial status fetch is in flight
    let shop_status: RwSignal<Option<i32>> = RwSignal::new(None);
    wasm_bindgen_futures::spawn_local(async move {
        match shop::api::get_status().await {
            Ok(status) => shop_status.set(Some(status)),
            Err(e) => {
                // treat the shop as open rather than blocking the header
                log::error!("获取营业状态失败: {}", e);
                shop_status.set(Some(STATUS_OPEN));
            }
        }
    });

    let status_dialog_open = RwSignal::new(false);
    let password_dialog_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let logout = move |_| {
        menu_open.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            match auth::api::logout().await {
                Ok(()) => {
                    toast.success("已退出登录");
                    if let Some(window) = web_sys::window() {
                        _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    log::error!("退出登录失败: {}", e);
                    toast.error("退出登录失败", Some(e));
                }
            }
        });
    };

    view! {
        <header class="header">
            <div class="header__logo">"苍穹外卖"</div>

            <div class="header__shop">
                {move || match shop_status.get() {
                    None => view! { <span class="skeleton skeleton--badge"></span> }.into_any(),
                    Some(status) => {
                        view! {
                            <span
                                class="header__badge"
                                class:header__badge--open=status == STATUS_OPEN
                            >
                                {status_text(status)}
                            </span>
                        }
                            .into_any()
                    }
                }}
                <button
                    class="button button--ghost"
                    on:click=move |_| status_dialog_open.set(true)
                >
                    "营业状态设置"
                </button>
            </div>

            <div class="header__user">
                <button
                    class="header__user-name"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {display_name}
                    <span class="header__caret">"▾"</span>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="header__menu">
                        <button
                            class="header__menu-item"
                            on:click=move |_| {
                                menu_open.set(false);
                                password_dialog_open.set(true);
                            }
                        >
                            "修改密码"
                        </button>
                        <button class="header__menu-item" on:click=logout>
                            "退出登录"
                        </button>
                    </div>
                </Show>
            </div>

            <ShopStatusDialog open=status_dialog_open status=shop_status />

            // fresh dialog state on every open
            {move || {
                password_dialog_open
                    .get()
                    .then(|| {
                        view! {
                            <PasswordDialog
                                emp_id=emp_id
                                on_close=Callback::new(move |_| password_dialog_open.set(false))
                            />
                        }
                    })
            }}
        </header>
    }
}
