//! Client wrappers for the auth collaborator endpoints. These helpers
//! centralize paths and keep the flows consistent; responses are parsed into
//! typed results at this boundary so route code never probes optional fields.

use crate::app_lib::{post_json, post_json_response, AppError};
use crate::features::auth::types::{
    Credentials, ForgotPasswordRequest, ResetPasswordRequest, SignInResponse,
};

/// Signs in with email and password, returning the issued access token.
/// Must never log the credentials.
pub async fn sign_in(credentials: &Credentials) -> Result<SignInResponse, AppError> {
    post_json_response("/v1/auth/sign-in", credentials).await
}

/// Asks the collaborator to email a reset code to the given address.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    post_json("/v1/auth/forgot-password", request).await
}

/// Submits a reset code plus the replacement password.
/// Must never log the code or the password.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_json("/v1/auth/reset-password", request).await
}
