//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! 1. **Sign-in:** The client validates email/password locally, POSTs to
//!    `/v1/auth/sign-in`, and persists the issued access token through the
//!    injected session store before navigating to the main route.
//! 2. **Forgot password:** A link click POSTs the last-typed email to
//!    `/v1/auth/forgot-password` and reveals the reset-code modal without
//!    waiting on the round-trip.
//! 3. **Reset password:** The modal POSTs the emailed code plus the
//!    replacement password to `/v1/auth/reset-password` and closes on success.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging
//! credentials or token material.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub use api::{post_json, post_json_response};
pub use errors::AppError;
