// ⚙️ Configuration
// Defaults → environment → command-line flags (applied by the binaries).

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

pub const ENV_API_URL: &str = "SHOWCASE_API_URL";
pub const ENV_LOCALE: &str = "SHOWCASE_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin of the content API (`/api/services` etc. are appended)
    pub api_base_url: String,

    /// Locale used when the caller does not pick one
    pub default_locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_locale: Locale::En,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by `SHOWCASE_API_URL` / `SHOWCASE_LOCALE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = SiteConfig::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(code) = lookup(ENV_LOCALE) {
            match Locale::parse(&code) {
                Some(locale) => config.default_locale = locale,
                None => tracing::warn!(
                    variable = ENV_LOCALE,
                    value = %code,
                    "unsupported locale, keeping {}",
                    config.default_locale
                ),
            }
        }

        config
    }

    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }

    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.default_locale = locale;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_env_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://example.com "),
            (ENV_LOCALE, "ro-RO"),
        ]));
        assert_eq!(config.api_base_url, "https://example.com");
        assert_eq!(config.default_locale, Locale::Ro);
    }

    #[test]
    fn test_invalid_env_values_keep_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[(ENV_API_URL, "  "), (ENV_LOCALE, "klingon")]));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_flag_overrides() {
        let config = SiteConfig::default()
            .with_api_base_url(Some("http://api.test".to_string()))
            .with_locale(Some(Locale::Ar))
            .with_locale(None);
        assert_eq!(config.api_base_url, "http://api.test");
        assert_eq!(config.default_locale, Locale::Ar);
    }
}
