/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Largest accepted request body in bytes (default: `65536`).
    pub max_body_bytes: usize,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            max_body_bytes: 64 * 1024,
            db_max_connections: 10,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default   |
    /// |----------------------|-----------|
    /// | `HOST`               | `0.0.0.0` |
    /// | `PORT`               | `3000`    |
    /// | `MAX_BODY_BYTES`     | `65536`   |
    /// | `DB_MAX_CONNECTIONS` | `10`      |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port: u16 = env_or("PORT", defaults.port)
            .parse()
            .expect("PORT must be a valid u16");

        let max_body_bytes: usize = env_or("MAX_BODY_BYTES", defaults.max_body_bytes)
            .parse()
            .expect("MAX_BODY_BYTES must be a valid usize");

        let db_max_connections: u32 = env_or("DB_MAX_CONNECTIONS", defaults.db_max_connections)
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            max_body_bytes,
            db_max_connections,
        }
    }
}

fn env_or(key: &str, default: impl ToString) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
