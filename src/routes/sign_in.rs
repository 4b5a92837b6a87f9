//! Sign-in route with the forgot-password action and the reset-code modal.
//! Credentials are validated locally before any request is dispatched. The
//! forgot-password link fires with whatever email was last typed into the
//! form and reveals the reset modal immediately, without waiting on the
//! round-trip.

use crate::app_lib::theme::Theme;
use crate::components::{use_toasts, AppShell, Button, Modal, Spinner};
use crate::features::auth::client;
use crate::features::auth::flow::{self, ModalDisposition};
use crate::features::auth::state::use_session;
use crate::features::auth::types::{Credentials, ForgotPasswordRequest, ResetPasswordRequest};
use crate::features::auth::validate::{validate_email, validate_password, validate_reset_code};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(None::<String>);
    let (password_error, set_password_error) = signal(None::<String>);
    let (reset_open, set_reset_open) = signal(false);

    let sign_in_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move { client::sign_in(&credentials).await }
    });

    let forgot_action = Action::new_local(move |email: &String| {
        let request = ForgotPasswordRequest {
            email: email.clone(),
        };
        async move { client::forgot_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match flow::complete_sign_in(result, &session) {
                Ok(()) => {
                    toasts.success("Signed in. Welcome back.");
                    navigate(paths::MAIN, Default::default());
                }
                // Sign-in failures surface to the user only; nothing goes to
                // the console.
                Err(_) => {
                    toasts.error("Sign-in failed. Check your credentials and try again.");
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = forgot_action.value().get() {
            match result {
                Ok(()) => toasts.success("Reset code sent to email"),
                Err(err) => {
                    leptos::logging::error!("forgot-password request failed: {err}");
                    toasts.error("Failed to send password reset code");
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let email_check = validate_email(&email_value);
        let password_check = validate_password(&password_value);
        let blocked = email_check.is_err() || password_check.is_err();
        set_email_error.set(email_check.err());
        set_password_error.set(password_check.err());
        if blocked {
            return;
        }

        sign_in_action.dispatch(Credentials {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    };

    let on_forgot = move |_| {
        forgot_action.dispatch(email.get_untracked());
        // The modal opens regardless of how the request ends; code entry must
        // not wait on the email round-trip.
        set_reset_open.set(true);
    };

    view! {
        <AppShell>
            <div class="min-h-[60vh] flex items-center justify-center px-6 py-10">
                <form
                    class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8 dark:border-gray-700 dark:bg-gray-800"
                    on:submit=on_submit
                >
                    <div class="space-y-2">
                        <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">
                            "Sign in"
                        </h1>
                        <p class="text-sm text-slate-500 dark:text-gray-400">
                            "Use the email and password you registered with."
                        </p>
                    </div>

                    <div class="mt-6 space-y-4">
                        <div>
                            <label class=Theme::LABEL for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                class=Theme::INPUT
                                class:border-red-500=move || email_error.get().is_some()
                                autocomplete="email"
                                inputmode="email"
                                placeholder="name@inbox.im"
                                prop:value=move || email.get()
                                on:input=move |event| {
                                    set_email.set(event_target_value(&event));
                                    set_email_error.set(None);
                                }
                            />
                            {move || {
                                email_error
                                    .get()
                                    .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                            }}
                        </div>
                        <div>
                            <label class=Theme::LABEL for="password">
                                "Password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                class=Theme::INPUT
                                class:border-red-500=move || password_error.get().is_some()
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |event| {
                                    set_password.set(event_target_value(&event));
                                    set_password_error.set(None);
                                }
                            />
                            {move || {
                                password_error
                                    .get()
                                    .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                            }}
                        </div>

                        <Button button_type="submit" disabled=sign_in_action.pending()>
                            {move || {
                                if sign_in_action.pending().get() { "Signing in..." } else { "Sign in" }
                            }}
                        </Button>
                    </div>

                    {move || {
                        sign_in_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4 flex justify-center"><Spinner /></div> })
                    }}

                    <div class="mt-6 flex items-center justify-between">
                        <A href=paths::SIGN_UP {..} class=Theme::LINK>
                            "Register"
                        </A>
                        <button type="button" class=Theme::LINK on:click=on_forgot>
                            "Forgot password?"
                        </button>
                    </div>
                </form>
            </div>

            <Show when=move || reset_open.get()>
                <ResetCodeModal on_close=Callback::new(move |()| set_reset_open.set(false)) />
            </Show>
        </AppShell>
    }
}

/// Modal-hosted form collecting the emailed reset code and the replacement
/// password. Mounted fresh on every open, so both fields start empty.
#[component]
fn ResetCodeModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();

    let (code, set_code) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (code_error, set_code_error) = signal(None::<String>);
    let (password_error, set_password_error) = signal(None::<String>);

    let reset_action = Action::new_local(move |request: &ResetPasswordRequest| {
        let request = request.clone();
        async move { client::reset_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match flow::reset_disposition(&result) {
                ModalDisposition::Close => {
                    toasts.success("Password updated. Sign in with your new password.");
                    on_close.run(());
                }
                ModalDisposition::StayOpen => {
                    if let Err(err) = &result {
                        leptos::logging::error!("reset-password request failed: {err}");
                    }
                    toasts.error("Failed to reset password");
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let code_value = code.get_untracked();
        let password_value = new_password.get_untracked();
        let code_check = validate_reset_code(&code_value);
        let password_check = validate_password(&password_value);
        let blocked = code_check.is_err() || password_check.is_err();
        set_code_error.set(code_check.err());
        set_password_error.set(password_check.err());
        if blocked {
            return;
        }

        reset_action.dispatch(ResetPasswordRequest {
            code: code_value.trim().to_string(),
            new_password: password_value,
        });
    };

    view! {
        <Modal title="Reset password" on_close=on_close>
            <form class="space-y-4" on:submit=on_submit>
                <p class="text-sm text-slate-500 dark:text-gray-400">
                    "Enter the code we emailed you and choose a new password."
                </p>
                <div>
                    <label class=Theme::LABEL for="reset_code">
                        "Reset code"
                    </label>
                    <input
                        id="reset_code"
                        type="text"
                        class=Theme::INPUT
                        class:border-red-500=move || code_error.get().is_some()
                        autocomplete="one-time-code"
                        prop:value=move || code.get()
                        on:input=move |event| {
                            set_code.set(event_target_value(&event));
                            set_code_error.set(None);
                        }
                    />
                    {move || {
                        code_error
                            .get()
                            .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                    }}
                </div>
                <div>
                    <label class=Theme::LABEL for="new_password">
                        "New password"
                    </label>
                    <input
                        id="new_password"
                        type="password"
                        class=Theme::INPUT
                        class:border-red-500=move || password_error.get().is_some()
                        autocomplete="new-password"
                        prop:value=move || new_password.get()
                        on:input=move |event| {
                            set_new_password.set(event_target_value(&event));
                            set_password_error.set(None);
                        }
                    />
                    {move || {
                        password_error
                            .get()
                            .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                    }}
                </div>

                <Button button_type="submit" disabled=reset_action.pending()>
                    {move || {
                        if reset_action.pending().get() { "Resetting..." } else { "Reset password" }
                    }}
                </Button>
            </form>
        </Modal>
    }
}
