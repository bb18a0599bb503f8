use contracts::shared::list::{page_window, PageItem, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// PaginationBar - record count, page-size select and windowed page
/// numbers (first, last, current±1 with ellipsis gaps).
///
/// Hidden entirely while the list is empty.
#[component]
pub fn PaginationBar(
    /// Current page (1-indexed)
    #[prop(into)]
    page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of records
    #[prop(into)]
    total: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when={move || total.get() > 0}>
            <div class="pagination">
                <div class="pagination__summary">
                    <span class="pagination__info">
                        {move || {
                            format!(
                                "共 {} 条记录，第 {} / {} 页",
                                total.get(),
                                page.get(),
                                total_pages.get(),
                            )
                        }}
                    </span>
                    <label class="pagination__page-size">
                        "每页显示："
                        <select
                            class="page-size-select"
                            on:change=move |ev| {
                                if let Ok(size) = event_target_value(&ev).parse() {
                                    on_page_size_change.run(size);
                                }
                            }
                            prop:value=move || page_size.get().to_string()
                        >
                            {PAGE_SIZE_OPTIONS
                                .iter()
                                .map(|&size| {
                                    view! {
                                        <option
                                            value=size.to_string()
                                            selected=move || page_size.get() == size
                                        >
                                            {size.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <div class="pagination__pages">
                    <button
                        class="pagination__btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| {
                            let p = page.get();
                            if p > 1 {
                                on_page_change.run(p - 1);
                            }
                        }
                    >
                        "上一页"
                    </button>
                    {move || {
                        let current = page.get();
                        page_window(current, total_pages.get())
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(p) => {
                                    view! {
                                        <button
                                            class="pagination__btn"
                                            class:pagination__btn--active=p == current
                                            on:click=move |_| on_page_change.run(p)
                                        >
                                            {p.to_string()}
                                        </button>
                                    }
                                        .into_any()
                                }
                                PageItem::Ellipsis => {
                                    view! { <span class="pagination__ellipsis">"…"</span> }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="pagination__btn"
                        disabled=move || page.get() >= total_pages.get()
                        on:click=move |_| {
                            let p = page.get();
                            if p < total_pages.get() {
                                on_page_change.run(p + 1);
                            }
                        }
                    >
                        "下一页"
                    </button>
                </div>
            </div>
        </Show>
    }
}
