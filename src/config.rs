//! Database connection settings from the process environment.

use std::env;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

/// Connection parameters resolved once at startup and shared read-only.
///
/// `DATABASE_URL` wins when set. Otherwise the discrete `DB_*` variables are
/// layered onto the driver defaults, so an unset variable falls through the
/// same way an absent parameter does in libpq.
#[derive(Debug, Clone)]
pub struct DbConfig {
    options: PgConnectOptions,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Self::from_url(&url);
        }

        let mut options = PgConnectOptions::new();
        if let Ok(host) = env::var("DB_HOST") {
            options = options.host(&host);
        }
        if let Ok(raw) = env::var("DB_PORT") {
            let port: u16 = raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "DB_PORT",
                value: raw.clone(),
            })?;
            options = options.port(port);
        }
        if let Ok(user) = env::var("DB_USER") {
            options = options.username(&user);
        }
        if let Ok(password) = env::var("DB_PASSWORD") {
            options = options.password(&password);
        }
        if let Ok(name) = env::var("DB_NAME") {
            options = options.database(&name);
        }
        Ok(DbConfig { options })
    }

    /// Build from a full PostgreSQL connection string.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let options =
            PgConnectOptions::from_str(url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        Ok(DbConfig { options })
    }

    pub fn connect_options(&self) -> &PgConnectOptions {
        &self.options
    }

    /// Target host, for log context.
    pub fn host(&self) -> &str {
        self.options.get_host()
    }

    pub fn port(&self) -> u16 {
        self.options.get_port()
    }

    pub fn database(&self) -> Option<&str> {
        self.options.get_database()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutation is process-global, so every permutation runs in one test.
    #[test]
    fn from_env_permutations() {
        let clear = || {
            for var in [
                "DATABASE_URL",
                "DB_HOST",
                "DB_PORT",
                "DB_USER",
                "DB_PASSWORD",
                "DB_NAME",
            ] {
                env::remove_var(var);
            }
        };

        clear();
        env::set_var("DB_HOST", "db.internal");
        env::set_var("DB_PORT", "6432");
        env::set_var("DB_USER", "svc");
        env::set_var("DB_NAME", "items");
        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.host(), "db.internal");
        assert_eq!(config.port(), 6432);
        assert_eq!(config.database(), Some("items"));

        env::set_var("DB_PORT", "not-a-port");
        let err = DbConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));

        // A full URL overrides the discrete variables entirely.
        env::set_var("DATABASE_URL", "postgres://svc@db.internal:7777/items2");
        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.port(), 7777);
        assert_eq!(config.database(), Some("items2"));

        env::set_var("DATABASE_URL", "definitely not a url");
        assert!(DbConfig::from_env().is_err());

        clear();
    }

    #[test]
    fn from_url_rejects_garbage() {
        assert!(DbConfig::from_url("postgres://user@localhost/items").is_ok());
        assert!(DbConfig::from_url(":///").is_err());
    }
}
