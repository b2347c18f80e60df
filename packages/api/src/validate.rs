//! Form checks run before anything is sent to the identity provider.

use crate::error::ApiError;

/// Minimum password length accepted by the provider.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn login(email: &str, password: &str) -> Result<(), ApiError> {
    check_email(email)?;
    if password.is_empty() {
        return Err(ApiError::Invalid("Password is required".to_string()));
    }
    Ok(())
}

pub fn registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Invalid("Name is required".to_string()));
    }
    check_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password != confirm_password {
        return Err(ApiError::Invalid("Passwords do not match".to_string()));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Invalid("Please enter a valid email".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), ApiError>) -> String {
        result.unwrap_err().user_message()
    }

    #[test]
    fn test_login_checks() {
        assert!(login("ana@example.com", "x").is_ok());
        assert_eq!(message(login("ana", "secret")), "Please enter a valid email");
        assert_eq!(message(login("ana@example.com", "")), "Password is required");
    }

    #[test]
    fn test_registration_checks() {
        assert!(registration("Ana", "ana@example.com", "secret1", "secret1").is_ok());
        assert_eq!(
            message(registration(" ", "ana@example.com", "secret1", "secret1")),
            "Name is required"
        );
        assert_eq!(
            message(registration("Ana", "ana@example.com", "short", "short")),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            message(registration("Ana", "ana@example.com", "secret1", "secret2")),
            "Passwords do not match"
        );
    }
}
