//! Transient toast notifications for request outcomes. Toasts auto-dismiss
//! after a few seconds and can be dismissed by hand; messages must be safe to
//! render and never include credentials or token material.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen before dismissing itself.
const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy)]
/// Toast queue shared through Leptos context.
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Shows an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.update_value(|value| *value += 1);

        let items = self.items;
        items.update(|list| list.push(Toast { id, kind, message }));

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            items.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    fn dismiss(&self, id: u64) {
        self.items.update(|list| list.retain(|toast| toast.id != id));
    }
}

/// Registers the toast queue for the component tree.
pub fn provide_toasts() {
    provide_context(Toasts::new());
}

/// Returns the shared toast queue or a detached fallback queue.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

/// Fixed-position stack rendering the queued toasts. Mount once, near the
/// application root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-[70] flex w-full max-w-sm flex-col gap-2">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let Toast { id, kind, message } = toast;
                    let class = match kind {
                        ToastKind::Success => {
                            "flex items-start rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-lg dark:border-emerald-400 dark:bg-emerald-900/80 dark:text-emerald-200"
                        }
                        ToastKind::Error => {
                            "flex items-start rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-lg dark:border-red-400 dark:bg-red-900/80 dark:text-red-200"
                        }
                    };

                    view! {
                        <div class=class role="status">
                            <span class="flex-1">{message}</span>
                            <button
                                type="button"
                                class="ml-3 font-semibold opacity-60 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
