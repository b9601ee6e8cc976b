//! Settings read from the process environment.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Runtime settings for the server and the CLI.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
}

// Connection strings carry credentials
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Read `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `SERVER_HOST` and
    /// `SERVER_PORT`, loading `.env` first when one exists.
    ///
    /// Unset or unparsable values fall back to [`Config::default`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            database_url: env_or("DATABASE_URL", defaults.database_url),
            database_max_connections: env_or(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            ),
            server_host: env_or("SERVER_HOST", defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// `host:port` the HTTP listener binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn env_or<T: FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
            fallback
        }),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.server_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config {
            database_url: "postgres://admin:hunter2@db/users".to_string(),
            ..Config::default()
        };

        let output = format!("{:?}", config);
        assert!(!output.contains("hunter2"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        std::env::set_var("USER_MANAGEMENT_TEST_PORT", "not-a-port");
        assert_eq!(env_or("USER_MANAGEMENT_TEST_PORT", 9090u16), 9090);

        std::env::set_var("USER_MANAGEMENT_TEST_PORT", "8181");
        assert_eq!(env_or("USER_MANAGEMENT_TEST_PORT", 9090u16), 8181);
        std::env::remove_var("USER_MANAGEMENT_TEST_PORT");
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unparsable_setting_is_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        std::env::set_var("USER_MANAGEMENT_TEST_POOL", "lots");
        let value = tracing::subscriber::with_default(subscriber, || {
            env_or("USER_MANAGEMENT_TEST_POOL", 10u32)
        });
        std::env::remove_var("USER_MANAGEMENT_TEST_POOL");

        assert_eq!(value, 10);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Ignoring unparsable setting"));
        assert!(output.contains("USER_MANAGEMENT_TEST_POOL"));
    }
}
