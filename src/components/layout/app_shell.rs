//! Shared layout wrapper with the header navigation and build footer. It
//! centralizes the auth-aware header control so routes can focus on content.
//! Navigation remains client-side; the API enforces real access control.

use crate::app_lib::build_info;
use crate::features::auth::session::SessionStore;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;
    let location = use_location();
    let on_sign_in = move || location.pathname.get() == paths::SIGN_IN;

    let navigate = use_navigate();
    let sign_out = move |_| {
        session.clear();
        navigate(paths::SIGN_IN, Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50 dark:bg-gray-900">
            <header class="border-b border-slate-200 bg-white dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl mx-auto flex items-center justify-between p-4">
                    <A href="/" {..} class="flex items-center gap-2">
                        <span class="text-lg font-semibold text-slate-900 dark:text-white">
                            "Eniro"
                        </span>
                    </A>
                    {move || {
                        if is_authenticated.get() {
                            Some(
                                view! {
                                    <button
                                        type="button"
                                        class="py-2 px-3 text-sm font-medium text-slate-700 rounded hover:bg-slate-100 dark:text-gray-300 dark:hover:bg-gray-700"
                                        on:click=sign_out.clone()
                                    >
                                        "Sign out"
                                    </button>
                                }
                                    .into_any(),
                            )
                        } else if on_sign_in() {
                            None
                        } else {
                            Some(
                                view! {
                                    <A
                                        href=paths::SIGN_IN
                                        {..}
                                        class="py-2 px-3 text-sm font-medium text-slate-700 rounded hover:bg-slate-100 dark:text-gray-300 dark:hover:bg-gray-700"
                                    >
                                        "Sign in"
                                    </A>
                                }
                                    .into_any(),
                            )
                        }
                    }}
                </div>
            </header>

            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>

            <footer class="border-t border-slate-200 py-4 text-center text-xs text-slate-400 dark:border-gray-700 dark:text-gray-500">
                {format!(
                    "eniro-web {} · {}",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash(),
                )}
            </footer>
        </div>
    }
}
