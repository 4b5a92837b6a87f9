use std::fmt;

/// Errors surfaced by the HTTP layer and the auth flows. Every variant maps to
/// a user-presentable message; none carry credentials or token material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The request body could not be encoded or the request not constructed.
    Encode(String),
    /// The collaborator could not be reached.
    Network(String),
    /// The client-side abort timer fired before a response arrived.
    Timeout,
    /// The collaborator answered with a non-success status.
    Http { status: u16, message: String },
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Encode(message) => write!(formatter, "Request error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout => write!(formatter, "Request timed out. Please try again."),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Decode(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_surface_status_and_message() {
        let error = AppError::Http {
            status: 401,
            message: "invalid credentials".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Request failed (401): invalid credentials"
        );
    }

    #[test]
    fn timeout_renders_a_fixed_user_message() {
        assert_eq!(
            AppError::Timeout.to_string(),
            "Request timed out. Please try again."
        );
    }
}
