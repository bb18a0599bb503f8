use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Non-blocking notification service, provided app-wide via context.
///
/// Every server failure ends up here; nothing is re-thrown past the
/// UI boundary and no operation is retried.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) {
        self.push(ToastKind::Error, title.into(), description);
    }

    fn push(&self, kind: ToastKind, title: String, description: Option<String>) {
        let id = self.next_id.with_value(|n| *n) + 1;
        self.next_id.set_value(id);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                title,
                description,
            })
        });

        let toasts = self.toasts;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <div class="toast__title">{toast.title}</div>
                                {toast
                                    .description
                                    .map(|d| view! { <div class="toast__description">{d}</div> })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
