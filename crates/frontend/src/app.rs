use leptos::prelude::*;

use crate::domain::category::ui::list::CategoryList;
use crate::domain::setmeal::ui::list::SetmealList;
use crate::layout::header::Header;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePage {
    Category,
    Setmeal,
}

/// Application root: provides the toast service and the read-only
/// session, then renders the header, the page switcher and the active
/// management screen.
#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    provide_context(ToastService::new());
    auth::context::provide_session();

    let active = RwSignal::new(ActivePage::Category);

    view! {
        <div class="app">
            <Header />

            <nav class="nav">
                <button
                    class="nav__item"
                    class:nav__item--active=move || active.get() == ActivePage::Category
                    on:click=move |_| active.set(ActivePage::Category)
                >
                    "分类管理"
                </button>
                <button
                    class="nav__item"
                    class:nav__item--active=move || active.get() == ActivePage::Setmeal
                    on:click=move |_| active.set(ActivePage::Setmeal)
                >
                    "套餐管理"
                </button>
            </nav>

            <main class="main">
                {move || match active.get() {
                    ActivePage::Category => view! { <CategoryList /> }.into_any(),
                    ActivePage::Setmeal => view! { <SetmealList /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
