//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Keys present (and non-empty) in the host provider block win
//! 2. Missing credential keys and `data_center` fall back to environment variables
//! 3. The merged tree is deserialized into [`ProviderConfig`] and validated
//!
//! ## Environment Variables
//! - `SITE24X7_OAUTH2_CLIENT_ID`: OAuth2 client id
//! - `SITE24X7_OAUTH2_CLIENT_SECRET`: OAuth2 client secret
//! - `SITE24X7_OAUTH2_REFRESH_TOKEN`: long-lived refresh token
//! - `SITE24X7_DATA_CENTER`: one of `US`, `EU`, `IN`, `AU`, `CN`

use std::path::Path;

use serde_json::{Map, Value};
use site24x7_domain::{ConfigError, DataCenter, ProviderConfig};

pub const ENV_CLIENT_ID: &str = "SITE24X7_OAUTH2_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SITE24X7_OAUTH2_CLIENT_SECRET";
pub const ENV_REFRESH_TOKEN: &str = "SITE24X7_OAUTH2_REFRESH_TOKEN";
pub const ENV_DATA_CENTER: &str = "SITE24X7_DATA_CENTER";

const CREDENTIAL_KEYS: [(&str, &str); 3] = [
    ("oauth2_client_id", ENV_CLIENT_ID),
    ("oauth2_client_secret", ENV_CLIENT_SECRET),
    ("oauth2_refresh_token", ENV_REFRESH_TOKEN),
];

/// Build a configuration from the host's provider block.
///
/// # Errors
/// - `MissingCredential` when a credential is neither in the block nor in the environment
/// - `InvalidDataCenter` for an unknown data center name
/// - `Parse` / `InvalidValue` for malformed or out-of-range settings
pub fn load_from_tree(tree: &Map<String, Value>) -> Result<ProviderConfig, ConfigError> {
    let mut merged = tree.clone();

    for (key, env_key) in CREDENTIAL_KEYS {
        if !has_text(&merged, key) {
            let value = env_var(env_key).ok_or(ConfigError::MissingCredential(key))?;
            merged.insert(key.to_string(), Value::String(value));
        }
    }

    if !has_text(&merged, "data_center") {
        if let Some(value) = env_var(ENV_DATA_CENTER) {
            merged.insert("data_center".to_string(), Value::String(value));
        }
    }
    if let Some(raw) = merged.get("data_center").and_then(Value::as_str) {
        let data_center: DataCenter =
            raw.parse().map_err(|_| ConfigError::InvalidDataCenter(raw.to_string()))?;
        merged.insert("data_center".to_string(), Value::String(data_center.to_string()));
    }

    // Optional keys the host left null behave as unset.
    merged.retain(|_, value| !value.is_null());

    let config: ProviderConfig =
        serde_json::from_value(Value::Object(merged)).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;

    tracing::debug!(data_center = %config.data_center, "provider configuration resolved");
    Ok(config)
}

/// Build a configuration from environment variables only.
pub fn load_from_env() -> Result<ProviderConfig, ConfigError> {
    load_from_tree(&Map::new())
}

/// Load a configuration file and resolve it like a host provider block.
///
/// Format is detected by extension (`.toml` or `.json`).
pub fn load_from_file(path: &Path) -> Result<ProviderConfig, ConfigError> {
    tracing::info!(path = %path.display(), "Loading provider configuration from file");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let tree = parse_tree(&contents, path)?;
    load_from_tree(&tree)
}

fn parse_tree(contents: &str, path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let value: Value = match extension {
        "toml" => {
            let parsed: toml::Table =
                toml::from_str(contents).map_err(|e| ConfigError::Parse(format!("Invalid TOML format: {e}")))?;
            serde_json::to_value(parsed).map_err(|e| ConfigError::Parse(e.to_string()))?
        }
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Parse(format!("Invalid JSON format: {e}")))?,
        other => return Err(ConfigError::Parse(format!("Unsupported config format: {other}"))),
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::Parse("configuration root must be a table".to_string())),
    }
}

fn has_text(tree: &Map<String, Value>, key: &str) -> bool {
    tree.get(key).and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty())
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use serde_json::json;
    use tempfile::Builder;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_ENV: [&str; 4] = [ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_REFRESH_TOKEN, ENV_DATA_CENTER];

    fn clear_env() {
        for key in ALL_ENV {
            std::env::remove_var(key);
        }
    }

    fn tree(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn host_block_is_used_as_is() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_tree(&tree(json!({
            "oauth2_client_id": "1000.ID",
            "oauth2_client_secret": "secret",
            "oauth2_refresh_token": "1000.refresh",
            "data_center": "eu",
            "retry_max_attempts": 5,
            "request_timeout_secs": 30
        })))
        .unwrap();

        assert_eq!(config.data_center, DataCenter::EU);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.base_ms, 500);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.api_base_url(), "https://www.site24x7.eu/api");
    }

    #[test]
    fn missing_credentials_fall_back_to_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(ENV_CLIENT_SECRET, "env-secret");
        std::env::set_var(ENV_REFRESH_TOKEN, "env-refresh");
        std::env::set_var(ENV_DATA_CENTER, "AU");

        let config = load_from_tree(&tree(json!({
            "oauth2_client_id": "1000.ID",
            "oauth2_client_secret": "",
            "data_center": null
        })))
        .unwrap();

        assert_eq!(config.credentials.client_id, "1000.ID");
        assert_eq!(config.credentials.client_secret, "env-secret");
        assert_eq!(config.credentials.refresh_token, "env-refresh");
        assert_eq!(config.data_center, DataCenter::AU);

        clear_env();
    }

    #[test]
    fn missing_credential_is_reported_by_key() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(ENV_CLIENT_ID, "1000.ID");
        std::env::set_var(ENV_CLIENT_SECRET, "secret");

        let err = load_from_env().unwrap_err();
        assert_eq!(err, ConfigError::MissingCredential("oauth2_refresh_token"));

        clear_env();
    }

    #[test]
    fn unknown_data_center_is_rejected() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_tree(&tree(json!({
            "oauth2_client_id": "a",
            "oauth2_client_secret": "b",
            "oauth2_refresh_token": "c",
            "data_center": "MARS"
        })))
        .unwrap_err();

        assert_eq!(err, ConfigError::InvalidDataCenter("MARS".to_string()));
    }

    #[test]
    fn out_of_range_retry_settings_are_rejected() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_tree(&tree(json!({
            "oauth2_client_id": "a",
            "oauth2_client_secret": "b",
            "oauth2_refresh_token": "c",
            "retry_max_attempts": 0
        })))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { key: "retry_max_attempts", .. }));
    }

    #[test]
    fn loads_toml_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
oauth2_client_id = "1000.ID"
oauth2_client_secret = "secret"
oauth2_refresh_token = "refresh"
data_center = "IN"
api_base_url = "http://localhost:8080/api"
retry_max_ms = 2000
"#
        )
        .unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.data_center, DataCenter::IN);
        assert_eq!(config.api_base_url(), "http://localhost:8080/api");
        assert_eq!(config.accounts_base_url(), "https://accounts.zoho.in");
        assert_eq!(config.retry.max_ms, 2000);
    }

    #[test]
    fn loads_json_file_with_env_fallback() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var(ENV_REFRESH_TOKEN, "from-env");

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"oauth2_client_id": "id", "oauth2_client_secret": "secret"}}"#).unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.credentials.refresh_token, "from-env");
        assert_eq!(config.data_center, DataCenter::US);

        clear_env();
    }

    #[test]
    fn unsupported_extension_and_missing_file_fail() {
        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(load_from_file(file.path()), Err(ConfigError::Parse(_))));

        let missing = Path::new("/nonexistent/site24x7.toml");
        assert!(matches!(load_from_file(missing), Err(ConfigError::Io { .. })));
    }
}
