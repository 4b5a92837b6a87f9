//! Centered modal overlay with a backdrop and an explicit close control.
//! The parent owns the open/closed state; mounting the modal fresh on every
//! open is what resets any form it hosts.

use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title shown in the modal header.
    title: &'static str,
    /// Invoked on backdrop click or the close button.
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div class="relative w-full max-w-md overflow-hidden rounded-xl border border-slate-200 bg-white shadow-xl dark:border-gray-700 dark:bg-gray-800">
                <div class="flex items-center justify-between border-b border-slate-100 px-6 py-4 dark:border-gray-700">
                    <h2 class="text-lg font-semibold text-slate-900 dark:text-white">{title}</h2>
                    <button
                        type="button"
                        class="text-slate-400 hover:text-slate-600 dark:hover:text-gray-200"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6">{children()}</div>
            </div>
        </div>
    }
}
