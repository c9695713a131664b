//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// HTTP port
    pub http_port: u16,
    /// Supabase project URL (REST API lives under `/rest/v1`)
    pub supabase_url: String,
    /// Supabase API key, sent as `apikey` and as bearer token
    pub supabase_api_key: String,
    /// Retraining trigger URL; retraining is unavailable when unset
    pub retrain_url: Option<String>,
    /// Timeout for outbound requests, in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(
        lookup: &impl Fn(&str) -> Option<String>,
        name: &str,
        environment: &str,
    ) -> Result<String, BoxError> {
        let val = match lookup(name) {
            Some(v) => v,
            None => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());

        let supabase_url = lookup("SUPABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or("SUPABASE_URL must be set")?;

        Ok(Self {
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_api_key: Self::require_secret(&lookup, "SUPABASE_API_KEY", &environment)?,
            retrain_url: lookup("RETRAIN_URL").filter(|s| !s.is_empty()),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("SUPABASE_URL", "https://abc.supabase.co/")]))
            .unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.supabase_url, "https://abc.supabase.co");
        assert_eq!(config.supabase_api_key, "dev-SUPABASE_API_KEY-not-for-production");
        assert_eq!(config.retrain_url, None);
        assert_eq!(config.upstream_timeout_secs, 30);
    }

    #[test]
    fn test_supabase_url_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "SUPABASE_URL must be set");
    }

    #[test]
    fn test_api_key_required_outside_development() {
        let err = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("SUPABASE_URL", "https://abc.supabase.co"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "SUPABASE_API_KEY must be set in production environment"
        );

        let err = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_API_KEY", ""),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "SUPABASE_API_KEY must not be empty in production environment"
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "staging"),
            ("HTTP_PORT", "9090"),
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_API_KEY", "service-key"),
            ("RETRAIN_URL", "https://lambda.example/retrain"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.environment, "staging");
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.supabase_api_key, "service-key");
        assert_eq!(
            config.retrain_url.as_deref(),
            Some("https://lambda.example/retrain")
        );
        assert_eq!(config.upstream_timeout_secs, 5);
    }
}
