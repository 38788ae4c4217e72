use deepseek_errors::AppError;
use std::fmt;
use std::time::Duration;

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const API_URL_VAR: &str = "OPENROUTER_API_URL";
pub const MODEL_VAR: &str = "OPENROUTER_MODEL";
pub const TIMEOUT_VAR: &str = "OPENROUTER_TIMEOUT_SECS";

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Bearer token for the API. Formatting never reveals the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, AppError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(AppError::Config(format!("{} must not be empty", API_KEY_VAR)));
        }
        Ok(Self(key))
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: ApiKey,
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_url: OPENROUTER_API_URL.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, AppError> {
        self.api_url = validate_api_url(api_url)?;
        Ok(self)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Result<Self, AppError> {
        let model = model.into().trim().to_string();
        if model.is_empty() {
            return Err(AppError::Config("model must not be empty".to_string()));
        }
        self.model = model;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, AppError> {
        if timeout.is_zero() {
            return Err(AppError::Config("timeout must be greater than zero".to_string()));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Builds the config from `OPENROUTER_*` variables resolved through `lookup`.
    /// Only the API key is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| AppError::Config(format!("{} must be set", API_KEY_VAR)))?;
        let mut config = Self::new(ApiKey::new(api_key)?);

        if let Some(api_url) = lookup(API_URL_VAR) {
            config = config.with_api_url(&api_url)?;
        }

        if let Some(model) = lookup(MODEL_VAR) {
            config = config.with_model(model)?;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a whole number of seconds", TIMEOUT_VAR))
            })?;
            config = config.with_timeout(Duration::from_secs(secs))?;
        }

        Ok(config)
    }
}

fn validate_api_url(api_url: &str) -> Result<String, AppError> {
    let parsed = url::Url::parse(api_url.trim())
        .map_err(|e| AppError::Config(format!("invalid API URL: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(AppError::Config(
            "API URL must use http or https".to_string(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::Config("API URL must have a host".to_string()));
    }

    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_url, OPENROUTER_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.api_key.bearer(), "Bearer sk-test");
    }

    #[test]
    fn test_missing_api_key() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = ClientConfig::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("OPENROUTER_API_URL", "http://127.0.0.1:8080/v1/chat/completions"),
            ("OPENROUTER_MODEL", "deepseek/deepseek-r1"),
            ("OPENROUTER_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080/v1/chat/completions");
        assert_eq!(config.model, "deepseek/deepseek-r1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_overrides() {
        for (name, value) in [
            ("OPENROUTER_API_URL", "not-a-url"),
            ("OPENROUTER_API_URL", "ftp://example.com/chat"),
            ("OPENROUTER_MODEL", ""),
            ("OPENROUTER_TIMEOUT_SECS", "0"),
            ("OPENROUTER_TIMEOUT_SECS", "soon"),
        ] {
            let result = ClientConfig::from_lookup(lookup_from(&[
                ("OPENROUTER_API_KEY", "sk-test"),
                (name, value),
            ]));
            assert!(matches!(result, Err(AppError::Config(_))), "{}={}", name, value);
        }
    }

    #[test]
    fn test_api_key_is_redacted() {
        let config = ClientConfig::new(ApiKey::new("sk-or-secret").unwrap());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-or-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(config.api_key.to_string(), "[REDACTED]");
    }
}
