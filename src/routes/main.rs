//! Landing route shown after a successful sign-in.

use crate::components::AppShell;
use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MainPage() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto text-center">
                <Show
                    when=move || is_authenticated.get()
                    fallback=|| {
                        view! {
                            <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">
                                "You are signed out"
                            </h1>
                            <p class="mt-2 text-sm text-slate-500 dark:text-gray-400">
                                "Sign in to continue to your workspace."
                            </p>
                            <div class="mt-6">
                                <A
                                    href=paths::SIGN_IN
                                    {..}
                                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700"
                                >
                                    "Go to sign-in"
                                </A>
                            </div>
                        }
                    }
                >
                    <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">
                        "Welcome back"
                    </h1>
                    <p class="mt-2 text-sm text-slate-500 dark:text-gray-400">
                        "Your session is active on this browser."
                    </p>
                </Show>
            </div>
        </AppShell>
    }
}
