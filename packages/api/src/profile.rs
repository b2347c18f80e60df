//! Profile documents in the Firebase Realtime Database REST API.
//!
//! Profiles live at `{database_url}/{collection}/{uid}.json`; the sub-fields the
//! dashboard edits (`dias`, `favorites`) are written in place so concurrent
//! edits to other fields are not clobbered.

use serde::Serialize;
use serde_json::Value;
use store::{DashboardConfig, Dias, ProfileRecord};

use crate::auth::Identity;
use crate::error::{rejection, ApiError};

/// Realtime Database client scoped to the profile collection.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    database_url: String,
    collection: String,
}

impl ProfileClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        if config.firebase.database_url.is_empty() {
            return Err(ApiError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            database_url: config.firebase.database_url.clone(),
            collection: config.profile.collection.clone(),
        })
    }

    /// URL of a user's profile, or of one of its fields.
    pub fn url(&self, uid: &str, field: Option<&str>) -> String {
        let base = self.database_url.trim_end_matches('/');
        let collection = self.collection.trim_matches('/');
        match field {
            Some(field) => format!("{base}/{collection}/{uid}/{field}.json"),
            None => format!("{base}/{collection}/{uid}.json"),
        }
    }

    /// Load the profile of `identity`. A missing document is an empty record.
    pub async fn fetch_profile(&self, identity: &Identity) -> Result<ProfileRecord, ApiError> {
        let response = self
            .http
            .get(self.url(&identity.uid, None))
            .query(&[("auth", identity.id_token.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }

        let value: Value = response.json().await?;
        Ok(profile_from_value(value))
    }

    /// Write the whole profile document.
    pub async fn save_profile(
        &self,
        identity: &Identity,
        record: &ProfileRecord,
    ) -> Result<(), ApiError> {
        self.put(identity, None, record).await
    }

    pub async fn save_dias(&self, identity: &Identity, dias: &Dias) -> Result<(), ApiError> {
        self.put(identity, Some("dias"), dias).await
    }

    pub async fn save_favorites(
        &self,
        identity: &Identity,
        favorites: &[String],
    ) -> Result<(), ApiError> {
        self.put(identity, Some("favorites"), favorites).await
    }

    async fn put<T: Serialize + ?Sized>(
        &self,
        identity: &Identity,
        field: Option<&str>,
        body: &T,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.url(&identity.uid, field))
            .query(&[("auth", identity.id_token.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = rejection(status.as_u16(), &body);
            tracing::error!(uid = %identity.uid, ?field, "failed to save profile: {}", err);
            return Err(err);
        }
        tracing::debug!(uid = %identity.uid, ?field, "profile saved");
        Ok(())
    }
}

/// Documents that are not objects (`null` for a fresh account) become an
/// empty record.
fn profile_from_value(value: Value) -> ProfileRecord {
    match value {
        Value::Object(map) => ProfileRecord::from(map),
        _ => ProfileRecord::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(database_url: &str, collection: &str) -> ProfileClient {
        let mut config = DashboardConfig::default();
        config.firebase.database_url = database_url.to_string();
        config.profile.collection = collection.to_string();
        ProfileClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_requires_database_url() {
        assert!(matches!(
            ProfileClient::new(&DashboardConfig::default()),
            Err(ApiError::NotConfigured)
        ));
    }

    #[test]
    fn test_profile_urls() {
        let c = client("https://db.example/", "/users/");
        assert_eq!(c.url("u1", None), "https://db.example/users/u1.json");
        assert_eq!(c.url("u1", Some("dias")), "https://db.example/users/u1/dias.json");
    }

    #[test]
    fn test_null_document_is_empty_profile() {
        assert_eq!(profile_from_value(Value::Null), ProfileRecord::new());
        assert_eq!(profile_from_value(json!([1, 2])), ProfileRecord::new());

        let record = profile_from_value(json!({"uid": "u1", "dias": {}}));
        assert_eq!(record.uid(), Some("u1"));
    }
}
