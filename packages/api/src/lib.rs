//! # API crate — external collaborators of the dashboard
//!
//! The dashboard keeps no server of its own. Identity and profile data come
//! from Firebase, reached over its REST endpoints so the same code runs in the
//! browser (WASM) and on desktop.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Identity Toolkit email/password sign-in and sign-up, yielding an [`Identity`] |
//! | [`profile`] | Realtime Database reads and writes of a user's profile document |
//! | [`config`] | Platform-aware loading of [`store::DashboardConfig`] |
//! | [`validate`] | Form checks run before contacting the provider |
//! | [`error`] | [`ApiError`] and its user-facing messages |
//!
//! ## Flows
//!
//! - [`login`]: sign in, load the profile, stamp the identity into it. The
//!   returned record is what `SessionStore::hydrate` expects.
//! - [`register`]: create the account and write its first profile document.

use serde_json::json;
use store::{DashboardConfig, ProfileRecord};

pub mod auth;
pub mod config;
pub mod error;
pub mod profile;
pub mod validate;

pub use auth::{AuthClient, Identity};
pub use error::ApiError;
pub use profile::ProfileClient;

/// Sign in and load the user's profile.
pub async fn login(
    config: &DashboardConfig,
    email: &str,
    password: &str,
) -> Result<(Identity, ProfileRecord), ApiError> {
    validate::login(email, password)?;

    let identity = AuthClient::new(&config.firebase)?
        .sign_in(email.trim(), password)
        .await?;
    let record = ProfileClient::new(config)?.fetch_profile(&identity).await?;

    let record = stamp_identity(record, &identity);
    tracing::info!(uid = %identity.uid, "signed in");
    Ok((identity, record))
}

/// Create an account and its initial profile document.
pub async fn register(
    config: &DashboardConfig,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(Identity, ProfileRecord), ApiError> {
    validate::registration(name, email, password, confirm_password)?;

    let identity = AuthClient::new(&config.firebase)?
        .sign_up(email.trim(), password)
        .await?;
    let record = initial_profile(&identity, name.trim());
    let saved = match ProfileClient::new(config) {
        Ok(client) => client.save_profile(&identity, &record).await,
        Err(e) => Err(e),
    };

    tracing::info!(uid = %identity.uid, "account registered");
    Ok(settle_registration(identity, record, saved))
}

/// Outcome of a registration whose sign-up went through. A failed first
/// profile write is only logged: the account already exists, and the session
/// starts from the local record.
fn settle_registration(
    identity: Identity,
    record: ProfileRecord,
    saved: Result<(), ApiError>,
) -> (Identity, ProfileRecord) {
    if let Err(e) = saved {
        tracing::warn!(uid = %identity.uid, "initial profile not saved: {}", e);
    }
    (identity, record)
}

/// Make sure the record carries the verified `uid` and `email`, whatever the
/// stored document says.
fn stamp_identity(record: ProfileRecord, identity: &Identity) -> ProfileRecord {
    let record = record.with("uid", json!(identity.uid));
    if identity.email.is_empty() {
        record
    } else {
        record.with("email", json!(identity.email))
    }
}

fn initial_profile(identity: &Identity, name: &str) -> ProfileRecord {
    ProfileRecord::new()
        .with("uid", json!(identity.uid))
        .with("email", json!(identity.email))
        .with("name", json!(name))
        .with("favorites", json!([]))
        .with("dias", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            uid: "u1".into(),
            email: "ana@example.com".into(),
            id_token: "token".into(),
            refresh_token: "refresh".into(),
        }
    }

    #[test]
    fn test_stamp_identity_overrides_stored_uid() {
        let stored = ProfileRecord::new()
            .with("uid", json!("stale"))
            .with("dias", json!({"lunes": 1}));

        let record = stamp_identity(stored, &identity());

        assert_eq!(record.uid(), Some("u1"));
        assert_eq!(record.get("email"), Some(&json!("ana@example.com")));
        assert_eq!(record.get("dias"), Some(&json!({"lunes": 1})));
    }

    #[test]
    fn test_stamp_identity_on_empty_document() {
        let record = stamp_identity(ProfileRecord::new(), &identity());
        assert!(store::is_authenticated(Some(&record)));
    }

    #[test]
    fn test_registration_keeps_account_when_profile_save_fails() {
        let record = initial_profile(&identity(), "Ana");
        let failed = Err(ApiError::Rejected {
            status: 401,
            message: "Permission denied".into(),
        });

        let (identity, settled) = settle_registration(identity(), record.clone(), failed);

        assert_eq!(identity.uid, "u1");
        assert_eq!(settled, record);
        assert!(store::is_authenticated(Some(&settled)));
    }

    #[test]
    fn test_registration_after_saved_profile() {
        let record = initial_profile(&identity(), "Ana");
        let (_, settled) = settle_registration(identity(), record.clone(), Ok(()));
        assert_eq!(settled, record);
    }

    #[test]
    fn test_initial_profile_hydrates_cleanly() {
        let mut session = store::SessionStore::new();
        session.hydrate(initial_profile(&identity(), "Ana"));

        assert!(session.is_authenticated());
        assert!(session.favorite_cards().is_empty());
        assert!(session.dias.is_empty());
        assert_eq!(
            session.full_user_data.unwrap().get("name"),
            Some(&json!("Ana"))
        );
    }
}
