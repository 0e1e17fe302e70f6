use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public base URL used to build upload links (default: `http://localhost:{port}`).
    pub base_url: String,
    /// Directory where uploaded images are stored (default: `public/uploads`).
    pub upload_dir: String,
    /// Fixed password-reset OTP for development. Random per request when unset.
    pub otp_static: Option<String>,
    /// JWT token configuration (secret, lifetime).
    pub jwt: JwtConfig,
    /// Redis connection configuration for the session cache.
    pub redis: RedisConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BASE_URL`             | `http://localhost:{PORT}`  |
    /// | `UPLOAD_DIR`           | `public/uploads`           |
    /// | `OTP_STATIC`           | unset (random OTPs)        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".into());

        let otp_static = std::env::var("OTP_STATIC").ok().filter(|s| !s.is_empty());

        let jwt = JwtConfig::from_env();
        let redis = RedisConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            base_url,
            upload_dir,
            otp_static,
            jwt,
            redis,
        }
    }
}

/// Redis connection configuration for the session cache.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis host (default: `127.0.0.1`).
    pub host: String,
    /// Redis port (default: `6379`).
    pub port: u16,
    /// Optional Redis password.
    pub password: Option<String>,
}

impl RedisConfig {
    /// Load Redis configuration from environment variables.
    ///
    /// | Env Var          | Default     |
    /// |------------------|-------------|
    /// | `REDIS_HOST`     | `127.0.0.1` |
    /// | `REDIS_PORT`     | `6379`      |
    /// | `REDIS_PASSWORD` | unset       |
    pub fn from_env() -> Self {
        let host = std::env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".into())
            .parse()
            .expect("REDIS_PORT must be a valid u16");

        let password = std::env::var("REDIS_PASSWORD").ok().filter(|s| !s.is_empty());

        Self {
            host,
            port,
            password,
        }
    }

    /// Build the `redis://` connection URL.
    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!("redis://:{password}@{}:{}", self.host, self.port),
            None => format!("redis://{}:{}", self.host, self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_url_without_password() {
        let config = RedisConfig {
            host: "cache.internal".to_string(),
            port: 6380,
            password: None,
        };
        assert_eq!(config.url(), "redis://cache.internal:6380");
    }

    #[test]
    fn test_redis_url_with_password() {
        let config = RedisConfig {
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: Some("hunter2".to_string()),
        };
        assert_eq!(config.url(), "redis://:hunter2@127.0.0.1:6379");
    }
}
