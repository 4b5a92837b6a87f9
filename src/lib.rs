//! Client-side sign-in frontend for the Eniro platform.
//!
//! The crate compiles to WebAssembly for the browser. Modules that touch the
//! DOM or the network are gated to `wasm32`; the flow logic, validation,
//! configuration, and session-store abstractions compile on native targets so
//! their unit tests run under a plain `cargo test`.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod routes;
