//! Loading [`DashboardConfig`] for the running platform.
//!
//! Native builds read `.env` (via `dotenvy`), then the TOML file named by
//! `DASHBOARD_CONFIG` (default `dashboard.toml`) when it exists. WASM builds
//! have no filesystem or process environment, so the same variables are
//! captured at compile time. In both cases the `FIREBASE_*` variables win over
//! file values, and the result must name an API key and a database URL.

use store::DashboardConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_VAR: &str = "DASHBOARD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("missing config value: {0}")]
    Missing(&'static str),
}

/// Load the configuration for this process.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<DashboardConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let path = std::env::var(CONFIG_PATH_VAR)
        .unwrap_or_else(|_| DashboardConfig::filename().to_string());

    let mut config = match std::fs::read_to_string(&path) {
        Ok(text) => DashboardConfig::from_toml(&text)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file, using defaults");
            DashboardConfig::default()
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    require(&config)?;
    Ok(config)
}

/// Load the configuration for this process.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<DashboardConfig, ConfigError> {
    let mut config = DashboardConfig::default();
    apply_overrides(&mut config, |key| {
        let value = match key {
            "FIREBASE_API_KEY" => option_env!("FIREBASE_API_KEY"),
            "FIREBASE_AUTH_DOMAIN" => option_env!("FIREBASE_AUTH_DOMAIN"),
            "FIREBASE_DATABASE_URL" => option_env!("FIREBASE_DATABASE_URL"),
            "FIREBASE_PROJECT_ID" => option_env!("FIREBASE_PROJECT_ID"),
            "DASHBOARD_PROFILE_COLLECTION" => option_env!("DASHBOARD_PROFILE_COLLECTION"),
            _ => None,
        };
        value.map(str::to_string)
    });
    require(&config)?;
    Ok(config)
}

/// Fail on the first value sign-in cannot do without.
pub fn require(config: &DashboardConfig) -> Result<(), ConfigError> {
    let required = [
        ("firebase.api_key", &config.firebase.api_key),
        ("firebase.database_url", &config.firebase.database_url),
    ];
    match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ConfigError::Missing(field)),
        None => Ok(()),
    }
}

/// Overwrite config values with non-empty variables from `lookup`.
fn apply_overrides(config: &mut DashboardConfig, lookup: impl Fn(&str) -> Option<String>) {
    let firebase = &mut config.firebase;
    let targets: [(&str, &mut String); 5] = [
        ("FIREBASE_API_KEY", &mut firebase.api_key),
        ("FIREBASE_AUTH_DOMAIN", &mut firebase.auth_domain),
        ("FIREBASE_DATABASE_URL", &mut firebase.database_url),
        ("FIREBASE_PROJECT_ID", &mut firebase.project_id),
        ("DASHBOARD_PROFILE_COLLECTION", &mut config.profile.collection),
    ];
    for (key, slot) in targets {
        if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = DashboardConfig::from_toml(
            r#"
            [firebase]
            api_key = "from-file"
            project_id = "file-project"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = HashMap::from([
            ("FIREBASE_API_KEY", "from-env"),
            ("FIREBASE_DATABASE_URL", "https://db.example"),
            ("FIREBASE_PROJECT_ID", ""),
        ]);
        apply_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.firebase.api_key, "from-env");
        assert_eq!(config.firebase.database_url, "https://db.example");
        // empty variables do not erase file values
        assert_eq!(config.firebase.project_id, "file-project");
        assert_eq!(config.profile.collection, "users");
    }

    #[test]
    fn test_require_names_first_missing_value() {
        let mut config = DashboardConfig::default();
        assert!(matches!(
            require(&config),
            Err(ConfigError::Missing("firebase.api_key"))
        ));

        config.firebase.api_key = "key".into();
        config.firebase.database_url = "  ".into();
        let err = require(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("firebase.database_url")));
        assert_eq!(err.to_string(), "missing config value: firebase.database_url");

        config.firebase.database_url = "https://db.example".into();
        assert!(require(&config).is_ok());
        assert!(config.firebase.is_configured());
    }
}
