//! Application configuration.
//!
//! Defaults are embedded as TOML; a few values can be overridden from the
//! page URL (`?role=user&log_level=info`) for demos.

use contracts::system::users::UserRole;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub logging: LoggingConfig,
    pub notifications: NotificationsConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub brand_name: String,
    pub hero_image: String,
    pub placeholder_image: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub toast_duration_ms: u32,
    pub max_visible: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// Role of the mock signed-in user
    pub demo_role: UserRole,
}

/// URL query parameters that may override the embedded defaults
#[derive(Debug, Deserialize, Default)]
struct QueryOverrides {
    role: Option<String>,
    log_level: Option<String>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
brand_name = "DecorDream"
hero_image = "/assets/hero-decoration.jpg"
placeholder_image = "/placeholder.svg"

[logging]
level = "debug"

[notifications]
toast_duration_ms = 5000
max_visible = 3

[session]
demo_role = "admin"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                brand_name: "DecorDream".to_string(),
                hero_image: "/assets/hero-decoration.jpg".to_string(),
                placeholder_image: "/placeholder.svg".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            notifications: NotificationsConfig {
                toast_duration_ms: 5000,
                max_visible: 3,
            },
            session: SessionConfig {
                demo_role: UserRole::Admin,
            },
        }
    }
}

impl AppConfig {
    /// Parses the embedded defaults and applies `query` overrides
    pub fn from_query(query: &str) -> Result<Self, String> {
        let mut config: AppConfig =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| format!("Invalid default config: {e}"))?;
        config.apply_query(query)?;
        Ok(config)
    }

    pub fn apply_query(&mut self, query: &str) -> Result<(), String> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Ok(());
        }
        let overrides: QueryOverrides =
            serde_qs::from_str(query).map_err(|e| format!("Invalid query overrides: {e}"))?;

        if let Some(role) = overrides.role {
            self.session.demo_role =
                UserRole::from_code(&role).ok_or_else(|| format!("Unknown role: {role}"))?;
        }
        if let Some(level) = overrides.log_level {
            level
                .parse::<log::Level>()
                .map_err(|_| format!("Unknown log level: {level}"))?;
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Loads configuration for the current page, falling back to defaults
pub fn load_config() -> AppConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match AppConfig::from_query(&search) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using default configuration");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_query("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app.brand_name, "DecorDream");
        assert_eq!(config.session.demo_role, UserRole::Admin);
    }

    #[test]
    fn test_query_overrides_role_and_level() {
        let config = AppConfig::from_query("?role=user&log_level=info").unwrap();
        assert_eq!(config.session.demo_role, UserRole::User);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!(AppConfig::from_query("role=root").is_err());
        assert!(AppConfig::from_query("log_level=loud").is_err());
    }

    #[test]
    fn test_unrelated_params_are_ignored() {
        let config = AppConfig::from_query("utm_source=mail").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
