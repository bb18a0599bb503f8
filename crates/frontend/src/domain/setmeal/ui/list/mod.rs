use contracts::domain::category::{Category, TYPE_COMBO};
use contracts::domain::setmeal::{
    status_text, toggle_action_text, toggled_status, Setmeal, SetmealPageQuery, STATUS_ON_SALE,
};
use contracts::shared::selection::Selection;
use leptos::prelude::*;

use crate::domain::category;
use crate::domain::setmeal::api;
use crate::domain::setmeal::ui::details::SetmealDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationBar;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::state::list_manager::ListManager;
use crate::shared::toast::ToastService;

const SKELETON_ROWS: usize = 5;

/// Combo management screen: name/category/status search, selectable
/// rows with batch delete, on/off-sale toggle and the create/edit
/// dialog. The category filter is fed by the combo-type category list.
#[component]
#[allow(non_snake_case)]
pub fn SetmealList() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let selection = RwSignal::new(Selection::default());

    let list = StoredValue::new(ListManager::new(
        SetmealPageQuery::default(),
        api::page,
        move |e| toast.error("获取套餐列表失败", Some(e)),
        // a fresh page invalidates row selection
        move || selection.update(|s| s.clear()),
    ));
    list.with_value(|l| l.fetch());

    let items = list.with_value(|l| l.items);
    let total = list.with_value(|l| l.total);
    let loading = list.with_value(|l| l.loading);
    let page = list.with_value(|l| l.page());
    let page_size = list.with_value(|l| l.page_size());
    let total_pages = list.with_value(|l| l.total_pages());

    let name_input = RwSignal::new(String::new());
    let category_input = RwSignal::new(String::new());
    let status_input = RwSignal::new(String::new());

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

    let run_search = move || {
        let name = name_input.get_untracked();
        let category_value = category_input.get_untracked();
        let status_value = status_input.get_untracked();
        list.with_value(|l| {
            l.search(|q| {
                let trimmed = name.trim();
                q.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
                q.category_id = category_value.parse::<i64>().ok();
                q.status = status_value.parse::<i32>().ok();
            })
        });
    };

    let all_selected = Signal::derive(move || {
        items.with(|rows| {
            !rows.is_empty()
                && selection.with(|s| rows.iter().all(|row| s.contains(row.id)))
        })
    });
    let some_selected = Signal::derive(move || {
        selection.with(|s| !s.is_empty()) && !all_selected.get()
    });

    // edit target; None while closed, Some(None) for create
    let editor: RwSignal<Option<Option<i64>>> = RwSignal::new(None);

    let toggle_target: RwSignal<Option<Setmeal>> = RwSignal::new(None);
    let toggle_open = RwSignal::new(false);
    let toggle_message = Signal::derive(move || {
        toggle_target.with(|t| {
            t.as_ref()
                .map(|s| {
                    format!(
                        "确认要{}当前套餐吗？",
                        toggle_action_text(toggled_status(s.status)),
                    )
                })
                .unwrap_or_default()
        })
    });
    let confirm_toggle = Callback::new(move |_| {
        let Some(setmeal) = toggle_target.get_untracked() else {
            return;
        };
        toggle_open.set(false);
        let new_status = toggled_status(setmeal.status);
        let action = toggle_action_text(new_status);
        wasm_bindgen_futures::spawn_local(async move {
            match api::toggle_status(new_status, setmeal.id).await {
                Ok(()) => {
                    toast.success(format!("{}套餐成功", action));
                    list.with_value(|l| l.refresh());
                }
                Err(e) => {
                    log::error!("{}套餐失败: {}", action, e);
                    toast.error(format!("{}套餐失败", action), Some(e));
                }
            }
        });
    });

    let delete_target: RwSignal<Option<i64>> = RwSignal::new(None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = Callback::new(move |_| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        delete_open.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_ids(&[id]).await {
                Ok(()) => {
                    toast.success("删除套餐成功");
                    list.with_value(|l| l.refresh());
                }
                Err(e) => {
                    log::error!("删除套餐失败: {}", e);
                    toast.error("删除套餐失败", Some(e));
                }
            }
        });
    });

    let batch_open = RwSignal::new(false);
    let request_batch_delete = move |_| {
        if selection.with_untracked(|s| s.is_empty()) {
            toast.error("批量删除失败", Some("请至少选择一个套餐".to_string()));
            return;
        }
        batch_open.set(true);
    };
    let confirm_batch_delete = Callback::new(move |_| {
        let ids = selection.with_untracked(|s| s.ids());
        if ids.is_empty() {
            batch_open.set(false);
            return;
        }
        batch_open.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_ids(&ids).await {
                Ok(()) => {
                    toast.success(format!("批量删除{}个套餐成功", ids.len()));
                    list.with_value(|l| l.refresh());
                }
                Err(e) => {
                    log::error!("批量删除套餐失败: {}", e);
                    toast.error("批量删除套餐失败", Some(e));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__toolbar">
                <div class="page__filters">
                    <label class="filter">
                        "套餐名称："
                        <input
                            class="input"
                            placeholder="请输入套餐名称"
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
                        "套餐分类："
                        <select
                            class="select"
                            prop:value=move || category_input.get()
                            on:change=move |ev| category_input.set(event_target_value(&ev))
                        >
                            <option value="">"全部"</option>
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
                    </label>
                    <label class="filter">
                        "售卖状态："
                        <select
                            class="select"
                            prop:value=move || status_input.get()
                            on:change=move |ev| status_input.set(event_target_value(&ev))
                        >
                            <option value="">"全部"</option>
                            <option value="1">"起售"</option>
                            <option value="0">"停售"</option>
                        </select>
                    </label>
                    <button class="button button--primary" on:click=move |_| run_search()>
                        "查询"
                    </button>
                </div>
                <div class="page__actions">
                    <button class="button button--danger" on:click=request_batch_delete>
                        "批量删除"
                    </button>
                    <button
                        class="button button--accent"
                        on:click=move |_| editor.set(Some(None))
                    >
                        "+ 新增套餐"
                    </button>
                </div>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__cell--checkbox">
                            <input
                                type="checkbox"
                                class="table__checkbox"
                                prop:checked=move || all_selected.get()
                                prop:indeterminate=move || some_selected.get()
                                on:change=move |ev| {
                                    if event_target_checked(&ev) {
                                        let ids = items
                                            .with_untracked(|rows| {
                                                rows.iter().map(|r| r.id).collect::<Vec<_>>()
                                            });
                                        selection.update(|s| s.select_all(ids));
                                    } else {
                                        selection.update(|s| s.clear());
                                    }
                                }
                            />
                        </th>
                        <th>"套餐名称"</th>
                        <th>"图片"</th>
                        <th>"套餐分类"</th>
                        <th>"套餐价"</th>
                        <th>"售卖状态"</th>
                        <th>"最后操作时间"</th>
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
                                            <td colspan="8">
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
                                    <td class="table__empty" colspan="8">"暂无数据"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            items
                                .get()
                                .into_iter()
                                .map(|setmeal| {
                                    let id = setmeal.id;
                                    let toggle_row = setmeal.clone();
                                    let toggle_label =
                                        toggle_action_text(toggled_status(setmeal.status));
                                    let on_sale = setmeal.status == STATUS_ON_SALE;
                                    view! {
                                        <tr>
                                            <TableCheckbox
                                                checked=Signal::derive(move || {
                                                    selection.with(|s| s.contains(id))
                                                })
                                                on_change=Callback::new(move |checked| {
                                                    selection.update(|s| s.toggle(id, checked))
                                                })
                                            />
                                            <td>{setmeal.name.clone()}</td>
                                            <td>
                                                {match setmeal.image.clone() {
                                                    Some(src) if !src.is_empty() => {
                                                        view! {
                                                            <img
                                                                class="table__thumbnail"
                                                                src=src
                                                                alt=setmeal.name.clone()
                                                            />
                                                        }
                                                            .into_any()
                                                    }
                                                    _ => view! { <span>"无图片"</span> }.into_any(),
                                                }}
                                            </td>
                                            <td>
                                                {setmeal.category_name.clone().unwrap_or_default()}
                                            </td>
                                            <td>{format!("¥{:.2}", setmeal.price)}</td>
                                            <td>
                                                <span class="tag" class:tag--success=on_sale>
                                                    {status_text(setmeal.status)}
                                                </span>
                                            </td>
                                            <td>
                                                {setmeal.update_time.clone().unwrap_or_default()}
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="link-button"
                                                    on:click=move |_| editor.set(Some(Some(id)))
                                                >
                                                    "修改"
                                                </button>
                                                <button
                                                    class="link-button link-button--danger"
                                                    on:click=move |_| {
                                                        delete_target.set(Some(id));
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
                    .map(|id| {
                        view! {
                            <SetmealDetails
                                id=id
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
                    "此操作将永久删除该套餐，是否继续？".to_string()
                })
                danger=true
                on_confirm=confirm_delete
            />

            <ConfirmDialog
                open=batch_open
                title=Signal::derive(|| "确认删除".to_string())
                message=Signal::derive(move || {
                    format!(
                        "此操作将永久删除选中的{}个套餐，是否继续？",
                        selection.with(|s| s.len()),
                    )
                })
                danger=true
                on_confirm=confirm_batch_delete
            />
        </div>
    }
}
