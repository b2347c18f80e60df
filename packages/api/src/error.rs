//! Errors returned by the identity and profile clients.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with an error status.
    #[error("{message} ({status})")]
    Rejected { status: u16, message: String },
    #[error("Firebase is not configured")]
    NotConfigured,
    /// Input refused before anything was sent.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Text suitable for showing next to a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(_) => "Could not reach the server. Check your connection.".to_string(),
            ApiError::NotConfigured => "Sign-in is not available right now.".to_string(),
            ApiError::Invalid(message) => message.clone(),
            ApiError::Rejected { message, .. } => {
                // "WEAK_PASSWORD : Password should be at least 6 characters"
                let code = message.split(" : ").next().unwrap_or(message).trim();
                match code {
                    "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                        "Incorrect email or password".to_string()
                    }
                    "USER_DISABLED" => "This account has been disabled".to_string(),
                    "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
                    "INVALID_EMAIL" => "Please enter a valid email".to_string(),
                    "WEAK_PASSWORD" => "Password must be at least 6 characters".to_string(),
                    "TOO_MANY_ATTEMPTS_TRY_LATER" => {
                        "Too many attempts. Try again later.".to_string()
                    }
                    "Permission denied" => "You do not have access to this profile".to_string(),
                    _ => message.clone(),
                }
            }
        }
    }
}

/// Build an [`ApiError::Rejected`] from an error response body.
///
/// Identity Toolkit answers `{"error": {"code": 400, "message": "..."}}`, the
/// Realtime Database answers `{"error": "..."}`. Anything else keeps the raw
/// body.
pub(crate) fn rejection(status: u16, body: &str) -> ApiError {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Detail {
        Structured { message: String },
        Plain(String),
    }

    #[derive(Deserialize)]
    struct Envelope {
        error: Detail,
    }

    let message = match serde_json::from_str::<Envelope>(body) {
        Ok(Envelope {
            error: Detail::Structured { message } | Detail::Plain(message),
        }) => message,
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => body.trim().to_string(),
    };
    ApiError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_toolkit_error_body() {
        let err = rejection(
            400,
            r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND","errors":[]}}"#,
        );
        match &err {
            ApiError::Rejected { status, message } => {
                assert_eq!(*status, 400);
                assert_eq!(message, "EMAIL_NOT_FOUND");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn test_database_error_body() {
        let err = rejection(401, r#"{"error" : "Permission denied"}"#);
        assert_eq!(err.to_string(), "Permission denied (401)");
        assert_eq!(err.user_message(), "You do not have access to this profile");
    }

    #[test]
    fn test_unstructured_body() {
        assert_eq!(rejection(502, "Bad gateway").to_string(), "Bad gateway (502)");
        assert_eq!(rejection(500, "").to_string(), "HTTP 500 (500)");
    }

    #[test]
    fn test_weak_password_message_has_suffix() {
        let err = rejection(
            400,
            r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#,
        );
        assert_eq!(err.user_message(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let err = rejection(400, r#"{"error":{"code":400,"message":"SOMETHING_NEW"}}"#);
        assert_eq!(err.user_message(), "SOMETHING_NEW");
    }
}
