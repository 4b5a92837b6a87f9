mod main;
mod not_found;
mod sign_in;

pub use main::MainPage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route path constants shared by pages and navigation effects.
pub mod paths {
    pub const SIGN_IN: &str = "/";
    pub const MAIN: &str = "/main";
    pub const SIGN_UP: &str = "/sign-up";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=SignInPage />
            <Route path=path!("/main") view=MainPage />
            // TODO: route /sign-up once the registration page lands.
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
