//! Email/password sign-in against the Firebase Identity Toolkit REST API.

use serde::{Deserialize, Serialize};
use store::FirebaseConfig;

use crate::error::{rejection, ApiError};

const IDENTITY_TOOLKIT: &str = "https://identitytoolkit.googleapis.com/v1";

/// A verified identity returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "localId")]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Identity Toolkit client.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    api_key: String,
}

impl AuthClient {
    pub fn new(config: &FirebaseConfig) -> Result<Self, ApiError> {
        if config.api_key.is_empty() {
            return Err(ApiError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
        })
    }

    /// Sign in an existing account.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        self.password_call("accounts:signInWithPassword", email, password)
            .await
    }

    /// Create a new account and sign it in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        self.password_call("accounts:signUp", email, password).await
    }

    async fn password_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, ApiError> {
        let response = self
            .http
            .post(endpoint_url(endpoint))
            .query(&[("key", self.api_key.as_str())])
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = rejection(status.as_u16(), &body);
            tracing::warn!(endpoint, "identity provider rejected request: {}", err);
            return Err(err);
        }

        let identity: Identity = response.json().await?;
        tracing::info!(uid = %identity.uid, endpoint, "identity verified");
        Ok(identity)
    }
}

fn endpoint_url(endpoint: &str) -> String {
    format!("{IDENTITY_TOOLKIT}/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_api_key() {
        let config = FirebaseConfig::default();
        assert!(matches!(AuthClient::new(&config), Err(ApiError::NotConfigured)));
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("accounts:signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp"
        );
    }

    #[test]
    fn test_sign_in_response_parses() {
        let body = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "ZY1rJK0eYLg",
            "email": "ana@example.com",
            "displayName": "",
            "idToken": "eyJhbGciOi",
            "registered": true,
            "refreshToken": "AEu4IL",
            "expiresIn": "3600"
        }"#;
        let identity: Identity = serde_json::from_str(body).unwrap();
        assert_eq!(identity.uid, "ZY1rJK0eYLg");
        assert_eq!(identity.email, "ana@example.com");
        assert_eq!(identity.id_token, "eyJhbGciOi");
        assert_eq!(identity.refresh_token, "AEu4IL");
    }

    #[test]
    fn test_password_request_shape() {
        let body = serde_json::to_value(PasswordRequest {
            email: "a@b.c",
            password: "secret1",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "a@b.c", "password": "secret1", "returnSecureToken": true})
        );
    }
}
