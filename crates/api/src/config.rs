/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Override via
/// environment variables (a `.env` file is honoured at startup).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `1234`).
    pub port: u16,
    /// Allowed request origins, parsed from the comma-separated
    /// `CORS_ORIGINS` env var. Exact string matches only; the origin gate
    /// and the CORS layer both read this list.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// Origins accepted when `CORS_ORIGINS` is not set.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8080,\
                                    http://localhost:1234,http://127.0.0.1:5500,\
                                    http://movies.com";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `1234`                           |
    /// | `CORS_ORIGINS`         | the compiled-in allow-list       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "1234".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
