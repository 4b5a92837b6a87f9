#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::prelude::mount_to_body(eniro_web::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
