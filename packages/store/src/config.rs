//! # Dashboard configuration — `dashboard.toml`
//!
//! Connection settings for the identity provider and the profile database.
//! The file is optional; any missing section falls back to its default, and
//! the loader in the `api` crate lets environment variables override each
//! value.
//!
//! ## Structure
//!
//! ```toml
//! [firebase]
//! api_key = "..."
//! auth_domain = "my-project.firebaseapp.com"
//! database_url = "https://my-project-default-rtdb.europe-west1.firebasedatabase.app"
//! project_id = "my-project"
//!
//! [profile]
//! collection = "users"   # database path holding one document per uid
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Firebase project settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    /// Realtime Database root URL.
    #[serde(default)]
    pub database_url: String,
    #[serde(default)]
    pub project_id: String,
}

impl FirebaseConfig {
    /// Both the API key and database URL are required to sign in and load
    /// a profile.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.database_url.is_empty()
    }
}

/// Where profiles live in the database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    "users".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.profile.collection, "users");
        assert!(!config.firebase.is_configured());
    }

    #[test]
    fn test_partial_sections() {
        let config = DashboardConfig::from_toml(
            r#"
            [firebase]
            api_key = "key"
            database_url = "https://db.example"
            "#,
        )
        .unwrap();
        assert!(config.firebase.is_configured());
        assert_eq!(config.firebase.project_id, "");
        assert_eq!(config.profile.collection, "users");
    }

    #[test]
    fn test_written_config_reads_back() {
        let mut config = DashboardConfig::default();
        config.firebase.api_key = "key".into();
        config.profile.collection = "perfiles".into();

        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }
}
