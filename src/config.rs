use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_BACKEND_URL, DEFAULT_PRODUCTION_URL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub default_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL.to_string(),
            backend_url_production: DEFAULT_PRODUCTION_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            default_language: "ES".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL_DEVELOPMENT").or(option_env!("BACKEND_URL")),
            option_env!("BACKEND_URL_PRODUCTION"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("DEFAULT_LANGUAGE"),
        )
    }

    fn from_values(
        development: Option<&str>,
        production: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        default_language: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: development
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: production
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url_production),
            environment: environment
                .map(str::to_lowercase)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            default_language: default_language
                .map(str::to_uppercase)
                .unwrap_or(defaults.default_language),
        }
    }

    /// URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_local_flask() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config.backend_url(), "http://localhost:5000");
        assert!(config.is_logging_enabled());
        assert_eq!(config.default_language, "ES");
    }

    #[test]
    fn production_environment_selects_production_url() {
        let config = AppConfig::from_values(
            Some("http://127.0.0.1:5000/"),
            Some("https://api.example.org/"),
            Some("PRODUCTION"),
            Some("false"),
            Some("en"),
        );
        assert_eq!(config.backend_url(), "https://api.example.org");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.default_language, "EN");
    }

    #[test]
    fn unparsable_logging_flag_keeps_default() {
        let config = AppConfig::from_values(Some("http://10.0.0.2:5000"), None, None, Some("quizás"), None);
        assert_eq!(config.backend_url(), "http://10.0.0.2:5000");
        assert!(config.enable_logging);
    }
}
