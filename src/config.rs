use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Informational timezone the dashboard reports; the scanner and this
    /// application are expected to share the host clock.
    pub timezone: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/lbcwatch.db".to_string(),
            log_level: "info".to_string(),
            timezone: "Europe/Paris".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,

    /// Session cookie inactivity expiry, in minutes.
    pub session_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8620,
            cors_allowed_origins: vec![
                "http://localhost:8620".to_string(),
                "http://127.0.0.1:8620".to_string(),
            ],
            session_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared access code for the single dashboard user.
    /// Override with the APP_PASSWORD environment variable.
    pub password: String,

    /// Failed login attempts tolerated before the session is blocked.
    pub max_attempts: u32,

    /// How long a blocked session stays blocked, in seconds.
    pub lockout_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password: "1234".to_string(),
            max_attempts: 5,
            lockout_seconds: 300,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                let mut config = Self::load_from_path(path)?;
                config.apply_env_overrides();
                return Ok(config);
            }
        }

        info!("No config file found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Externally supplied inputs win over the config file, so the container
    /// environment can carry the store location and the shared secret.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.general.database_path = url;
        }
        if let Ok(password) = std::env::var("APP_PASSWORD") {
            self.auth.password = password;
        }
        if let Ok(timezone) = std::env::var("APP_TIMEZONE") {
            self.general.timezone = timezone;
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("lbcwatch").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".lbcwatch").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.auth.password.is_empty() {
            anyhow::bail!("Auth password cannot be empty");
        }

        if self.auth.max_attempts == 0 {
            anyhow::bail!("auth.max_attempts must be > 0");
        }

        if self.server.session_minutes <= 0 {
            anyhow::bail!("server.session_minutes must be > 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.auth.max_attempts, 5);
        assert_eq!(config.auth.lockout_seconds, 300);
        assert_eq!(config.server.port, 8620);
        assert_eq!(config.general.database_path, "sqlite:data/lbcwatch.db");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[auth]"));
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [auth]
            max_attempts = 3
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.auth.max_attempts, 3);

        assert_eq!(config.auth.lockout_seconds, 300);
        assert_eq!(config.server.port, 8620);
    }

    #[test]
    fn test_empty_password_rejected() {
        let mut config = Config::default();
        config.auth.password = String::new();
        assert!(config.validate().is_err());
    }
}
