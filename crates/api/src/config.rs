/// Runtime settings for the portfolio server, read once at startup.
///
/// Every field except `admin_token` has a local-development default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Origins allowed to call the management API (`CORS_ORIGINS`, comma-separated).
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL that uploaded file paths are served under (default: `/media/`).
    pub media_url: String,
    /// Bearer token for the content-management API. `None` disables it.
    pub admin_token: Option<String>,
    /// Recipient of contact notifications.
    pub admin_email: String,
    /// Upper bound on a single notification attempt (default: `10`).
    pub notify_timeout_secs: u64,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// Panics on a malformed number, which only happens at startup.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MEDIA_URL`            | `/media/`                  |
    /// | `ADMIN_TOKEN`          | unset (admin API disabled) |
    /// | `ADMIN_EMAIL`          | `admin@localhost`          |
    /// | `NOTIFY_TIMEOUT_SECS`  | `10`                       |
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

        let media_url = std::env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".into());

        let admin_token = std::env::var("ADMIN_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".into());

        let notify_timeout_secs: u64 = std::env::var("NOTIFY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("NOTIFY_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_url,
            admin_token,
            admin_email,
            notify_timeout_secs,
        }
    }
}
