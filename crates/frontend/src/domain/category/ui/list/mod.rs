use contracts::domain::category::{
    status_text, toggle_action_text, toggled_status, type_text, Category, CategoryForm,
    CategoryPageQuery, STATUS_ENABLED, TYPE_COMBO, TYPE_DISH,
};
use leptos::prelude::*;

use crate::domain::category::api;
use crate::domain::category::ui::details::CategoryDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationBar;
use crate::shared::state::list_manager::ListManager;
use crate::shared::toast::ToastService;

const SKELETON_ROWS: usize = 5;

/// Category management screen: name/type search, paged table and the
/// create/edit dialog. Status toggle and delete both go through a
/// confirmation dialog and refresh the list on success.
#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let list = StoredValue::new(ListManager::new(
        CategoryPageQuery::default(),
        api::page,
        move |e| toast.error("获取分类列表失败", Some(e)),
        || {},
    ));
    list.with_value(|l| l.fetch());

    let items = list.with_value(|l| l.items);
    let total = list.with_value(|l| l.total);
    let loading = list.with_value(|l| l.loading);
    let page = list.with_value(|l| l.page());
    let page_size = list.with_value(|l| l.page_size());
    let total_pages = list.with_value(|l| l.total_pages());

    // Filter inputs are buffered locally; they reach the query only
    // when the search runs.
    let name_input = RwSignal::new(String::new());
    let type_input = RwSignal::new(String::new());

    let run_search = move || {
        let name = name_input.get_untracked();
        let type_value = type_input.get_untracked();
        list.with_value(|l| {
            l.search(|q| {
                let trimmed = name.trim();
                q.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
                q.category_type = type_value.parse::<i32>().ok();
            })
        });
    };

    let editor: RwSignal<Option<CategoryForm>> = RwSignal::new(None);

    let toggle_target: RwSignal<Option<Category>> = RwSignal::new(None);
    let toggle_open = RwSignal::new(false);
    let toggle_message = Signal::derive(move || {
        toggle_target.with(|t| {
            t.as_ref()
                .map(|c| {
                    format!(
                        "确认要{}当前分类吗？",
                        toggle_action_text(toggled_status(c.status)),
                    )
                })
                .unwrap_or_default()
        })
    });
    let confirm_toggle = Callback::new(move |_| {
        let Some(category) = toggle_target.get_untracked() else {
            return;
        };
        toggle_open.set(false);
        let new_status = toggled_status(category.status);
        let action = toggle_action_text(new_status);
        wasm_bindgen_futures::spawn_local(async move {
            match api::toggle_status(new_status, category.id).await {
                Ok(()) => {
                    toast.success(format!("{}分类成功", action));
                    list.with_value(|l| l.refresh());
                }
                Err(e) => {
                    log::error!("{}分类失败: {}", action, e);
                    toast.error(format!("{}分类失败", action), Some(e));
                }
            }
        });
    });

    let delete_target: RwSignal<Option<Category>> = RwSignal::new(None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = Callback::new(move |_| {
        let Some(category) = delete_target.get_untracked() else {
            return;
        };
        delete_open.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(category.id).await {
                Ok(()) => {
                    toast.success("删除分类成功");
                    list.with_value(|l| l.refresh());
                }
                Err(e) => {
                    log::error!("删除分类失败: {}", e);
                    toast.error("删除分类失败", Some(e));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__toolbar">
                <div class="page__filters">
                    <label class="filter">
                        "分类名称："
                        <input
                            class="input"
                            placeholder="请输入分类名称"
                            prop:value=move || name_input.get()
                            on:input=move |ev| name_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    run_search();
                                }
                            }
                        />
                    </label>
                    <label class="filter">
                        "分类类型："
                        <select
                            class="select"
                            prop:value=move || type_input.get()
                            on:change=move |ev| type_input.set(event_target_value(&ev))
                        >
                            <option value="">"全部"</option>
                            <option value="1">"菜品分类"</option>
                            <option value="2">"套餐分类"</option>
                        </select>
                    </label>
                    <button class="button button--primary" on:click=move |_| run_search()>
                        "查询"
                    </button>
                </div>
                <div class="page__actions">
                    <button
                        class="button button--accent"
                        on:click=move |_| editor.set(Some(CategoryForm::blank(TYPE_DISH)))
                    >
                        "+ 新增菜品分类"
                    </button>
                    <button
                        class="button button--accent"
                        on:click=move |_| editor.set(Some(CategoryForm::blank(TYPE_COMBO)))
                    >
                        "+ 新增套餐分类"
                    </button>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"分类名称"</th>
                        <th>"分类类型"</th>
                        <th>"排序"</th>
                        <th>"售卖状态"</th>
                        <th>"操作时间"</th>
                        <th>"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            (0..SKELETON_ROWS)
                                .map(|_| {
                                    view! {
                                        <tr class="table__row--skeleton">
                                            <td colspan="6">
                                                <div class="skeleton"></div>
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                })
                                .collect_view()
                                .into_any()
                        } else if items.with(|rows| rows.is_empty()) {
                            view! {
                                <tr>
                                    <td class="table__empty" colspan="6">"暂无数据"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            items
                                .get()
                                .into_iter()
                                .map(|category| {
                                    let edit_row = category.clone();
                                    let toggle_row = category.clone();
                                    let delete_row = category.clone();
                                    let toggle_label =
                                        toggle_action_text(toggled_status(category.status));
                                    let enabled = category.status == STATUS_ENABLED;
                                    view! {
                                        <tr>
                                            <td>{category.name.clone()}</td>
                                            <td>{type_text(category.category_type)}</td>
                                            <td>{category.sort}</td>
                                            <td>
                                                <span class="tag" class:tag--success=enabled>
                                                    {status_text(category.status)}
                                                </span>
                                            </td>
                                            <td>
                                                {category.update_time.clone().unwrap_or_default()}
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="link-button"
                                                    on:click=move |_| {
                                                        editor
                                                            .set(
                                                                Some(CategoryForm::from_category(&edit_row)),
                                                            )
                                                    }
                                                >
                                                    "修改"
                                                </button>
                                                <button
                                                    class="link-button link-button--danger"
                                                    on:click=move |_| {
                                                        delete_target.set(Some(delete_row.clone()));
                                                        delete_open.set(true);
                                                    }
                                                >
                                                    "删除"
                                                </button>
                                                <button
                                                    class="link-button"
                                                    on:click=move |_| {
                                                        toggle_target.set(Some(toggle_row.clone()));
                                                        toggle_open.set(true);
                                                    }
                                                >
                                                    {toggle_label}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>

            <PaginationBar
                page=page
                total_pages=total_pages
                total=total
                page_size=page_size
                on_page_change=Callback::new(move |p| list.with_value(|l| l.go_to_page(p)))
                on_page_size_change=Callback::new(move |s| {
                    list.with_value(|l| l.set_page_size(s))
                })
            />

            {move || {
                editor
                    .get()
                    .map(|initial| {
                        view! {
                            <CategoryDetails
                                initial=initial
                                on_saved=Callback::new(move |_| list.with_value(|l| l.refresh()))
                                on_close=Callback::new(move |_| editor.set(None))
                            />
                        }
                    })
            }}

            <ConfirmDialog
                open=toggle_open
                title=Signal::derive(|| "提示".to_string())
                message=toggle_message
                on_confirm=confirm_toggle
            />

            <ConfirmDialog
                open=delete_open
                title=Signal::derive(|| "确认删除".to_string())
                message=Signal::derive(|| {
                    "此操作将永久删除该分类，是否继续？".to_string()
                })
                danger=true
                on_confirm=confirm_delete
            />
        </div>
    }
}
