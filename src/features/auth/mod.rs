//! Auth feature covering the sign-in, forgot-password, and reset-code flows.
//! It keeps authentication logic out of the UI: pages validate input through
//! [`validate`], call the collaborator through [`client`], and apply results
//! through [`flow`] against the injected [`session`] store. This module
//! touches security boundaries and must avoid logging credentials or token
//! material.
//!
//! Flow Overview: Sign-in posts credentials and persists the issued access
//! token before navigating to the main route. Forgot-password emails a reset
//! code to the last-typed address and reveals the reset modal without waiting
//! on the round-trip. Reset-password submits the code with the replacement
//! password and closes the modal on success.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod flow;
pub mod session;
pub mod state;
pub mod types;
pub mod validate;
