use crate::config::{env_lookup, non_empty, parse_var};
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://ohhell.riskspace.net", "http://localhost:3000"];

/// Listener and CORS settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Reads `BACKEND_HOST`, `BACKEND_PORT` and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = non_empty(&lookup, "BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var::<u16>(&lookup, "BACKEND_PORT")?.unwrap_or(DEFAULT_PORT);
        let allowed_origins = match non_empty(&lookup, "CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Comma separated origins; blank and "null" entries are skipped, anything
/// else must be an http(s) origin.
fn parse_origins(raw: &str) -> Result<Vec<String>, AppError> {
    let mut origins = Vec::new();
    for origin in raw.split(',').map(str::trim) {
        if origin.is_empty() || origin == "null" {
            continue;
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(AppError::config(format!(
                "CORS_ALLOWED_ORIGINS: '{origin}' is not an http(s) origin"
            )));
        }
        origins.push(origin.trim_end_matches('/').to_string());
    }
    if origins.is_empty() {
        return Err(AppError::config("CORS_ALLOWED_ORIGINS: no usable origins"));
    }
    Ok(origins)
}
