use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Which store backs the dog and user collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

impl DatabaseSettings {
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(10)
    }

    pub fn min_connections(&self) -> u32 {
        self.min_connections.unwrap_or(1)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,
    pub password_salt: String,
}

fn default_token_ttl() -> i64 { 86_400 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn environment() -> Environment {
    // e.g., DOGMATCH__SERVER__PORT -> server.port
    Environment::with_prefix("DOGMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with DOGMATCH__)
    /// 4. DATABASE_URL, JWT_TOKEN_SECRET and USER_PASSWORD_SALT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path, with the same environment layers
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }
}

/// Apply the well-known deployment variables on top of the layered config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("DATABASE_URL", "database.url"),
        ("JWT_TOKEN_SECRET", "auth.jwt_secret"),
        ("USER_PASSWORD_SALT", "auth.password_salt"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const MINIMAL: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 9000

        [database]
        url = "postgres://localhost/dogmatch"

        [auth]
        jwt_secret = "secret"
        password_salt = "salt"
    "#;

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let settings = parse(MINIMAL);

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.storage.backend, StorageBackend::Postgres);
        assert_eq!(settings.auth.token_ttl_secs, 86_400);
        assert_eq!(settings.database.max_connections(), 10);
        assert_eq!(settings.database.min_connections(), 1);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_memory_backend() {
        let toml = format!("{}\n[storage]\nbackend = \"memory\"\n", MINIMAL);
        assert_eq!(parse(&toml).storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_load_from_path_applies_env_overrides() {
        let path = std::env::temp_dir().join(format!("dogmatch-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, MINIMAL).unwrap();

        std::env::set_var("USER_PASSWORD_SALT", "salt-from-env");
        let settings = Settings::load_from(&path);
        std::env::remove_var("USER_PASSWORD_SALT");
        std::fs::remove_file(&path).unwrap();

        let settings = settings.unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.auth.password_salt, "salt-from-env");
    }

    #[test]
    fn test_missing_auth_section_fails() {
        let result: Result<Settings, _> = Config::builder()
            .add_source(File::from_str(
                "[server]\nhost = \"h\"\nport = 1\n[database]\nurl = \"u\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize();

        assert!(result.is_err());
    }
}
