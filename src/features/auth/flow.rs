//! Pure decision logic for the auth flows. Pages hand completed request
//! results to these functions and translate the answers into navigation,
//! toasts, and modal state. Keeping the decisions here keeps them testable
//! against the in-memory session store.

use crate::app_lib::AppError;
use crate::features::auth::session::SessionStore;
use crate::features::auth::types::SignInResponse;

/// What the reset-code modal does with a finished request.
///
/// The modal state machine is Closed → Open (forgot-password click) and
/// Open → Closed (successful reset or explicit dismissal). A failed reset
/// keeps the modal open so the user can retry with the same code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalDisposition {
    Close,
    StayOpen,
}

/// Applies a finished sign-in call to the session store. The token is
/// persisted only on success; any failure leaves the store untouched so a
/// stale token from an earlier session is never clobbered by a rejection.
pub fn complete_sign_in(
    result: Result<SignInResponse, AppError>,
    session: &impl SessionStore,
) -> Result<(), AppError> {
    let response = result?;
    session.set(&response.access_token);
    Ok(())
}

/// Decides whether the reset modal closes after a reset-password call.
pub fn reset_disposition(result: &Result<(), AppError>) -> ModalDisposition {
    match result {
        Ok(()) => ModalDisposition::Close,
        Err(_) => ModalDisposition::StayOpen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::MemorySession;

    fn token_response(token: &str) -> Result<SignInResponse, AppError> {
        Ok(SignInResponse {
            access_token: token.to_string(),
        })
    }

    #[test]
    fn successful_sign_in_persists_the_token() {
        let session = MemorySession::default();

        let outcome = complete_sign_in(token_response("T"), &session);

        assert_eq!(outcome, Ok(()));
        assert_eq!(session.get(), Some("T".to_string()));
    }

    #[test]
    fn a_second_sign_in_overwrites_the_first_token() {
        let session = MemorySession::default();

        complete_sign_in(token_response("first"), &session).expect("first sign-in");
        complete_sign_in(token_response("second"), &session).expect("second sign-in");

        assert_eq!(session.get(), Some("second".to_string()));
    }

    #[test]
    fn rejected_sign_in_writes_nothing() {
        let session = MemorySession::default();
        let rejection = Err(AppError::Http {
            status: 401,
            message: "invalid credentials".to_string(),
        });

        let outcome = complete_sign_in(rejection.clone(), &session);

        assert_eq!(outcome, rejection.map(|_: SignInResponse| ()));
        assert_eq!(session.get(), None);
    }

    #[test]
    fn network_failure_keeps_an_existing_token() {
        let session = MemorySession::default();
        session.set("previous");

        let outcome = complete_sign_in(Err(AppError::Timeout), &session);

        assert!(outcome.is_err());
        assert_eq!(session.get(), Some("previous".to_string()));
    }

    #[test]
    fn reset_modal_closes_only_on_success() {
        assert_eq!(reset_disposition(&Ok(())), ModalDisposition::Close);
        assert_eq!(
            reset_disposition(&Err(AppError::Http {
                status: 400,
                message: "bad code".to_string(),
            })),
            ModalDisposition::StayOpen
        );
        assert_eq!(
            reset_disposition(&Err(AppError::Network("offline".to_string()))),
            ModalDisposition::StayOpen
        );
    }
}
