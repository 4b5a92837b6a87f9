use crate::components::{provide_toasts, ToastContainer};
use crate::features::auth::state::provide_session;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_session();
    provide_toasts();

    view! {
        <Router>
            <ToastContainer />
            <AppRoutes />
        </Router>
    }
}
