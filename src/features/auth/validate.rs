//! Client-side field validation for the sign-in and reset forms. These rules
//! exist for early UX feedback only; the API remains the authority. A request
//! is never dispatched while any of them fail.

/// Minimum length accepted for the password and the replacement password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Rejects empty and structurally invalid email addresses.
pub fn validate_email(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Email is required".to_string());
    }
    if !email_shaped(trimmed) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Rejects empty and too-short passwords.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    Ok(())
}

/// The reset code only has to be present; its correctness is the
/// collaborator's call.
pub fn validate_reset_code(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Reset code is required".to_string());
    }
    Ok(())
}

/// One local part, one `@`, and a dotted domain. Intentionally loose; the
/// collaborator rejects anything it cannot deliver to.
fn email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_be_present() {
        assert_eq!(validate_email(""), Err("Email is required".to_string()));
        assert_eq!(validate_email("   "), Err("Email is required".to_string()));
    }

    #[test]
    fn email_must_be_at_shaped() {
        for invalid in ["plainaddress", "missing-domain@", "@missing-local.im",
            "two@@signs.im", "user@domain", "user@.im", "user@domain."]
        {
            assert!(validate_email(invalid).is_err(), "accepted {invalid:?}");
        }
    }

    #[test]
    fn reasonable_emails_pass() {
        assert_eq!(validate_email("user@inbox.im"), Ok(()));
        assert_eq!(validate_email("  first.last@sub.domain.dev  "), Ok(()));
    }

    #[test]
    fn password_must_be_present_and_long_enough() {
        assert_eq!(
            validate_password(""),
            Err("Password is required".to_string())
        );
        assert_eq!(
            validate_password("12345"),
            Err("Password must be at least 6 characters".to_string())
        );
        assert_eq!(validate_password("123456"), Ok(()));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Six multibyte characters are enough even though they exceed six bytes.
        assert_eq!(validate_password("ααββγγ"), Ok(()));
    }

    #[test]
    fn reset_code_only_needs_to_be_non_empty() {
        assert_eq!(
            validate_reset_code("  "),
            Err("Reset code is required".to_string())
        );
        assert_eq!(validate_reset_code("483921"), Ok(()));
        assert_eq!(validate_reset_code("anything"), Ok(()));
    }
}
