//! Environment-driven configuration.
//!
//! Values are read once at startup. Parsing is split from the environment so
//! tests can feed a lookup function instead of mutating process state.

pub mod engine;
pub mod server;

pub use engine::EngineConfig;
pub use server::ServerConfig;

use crate::error::AppError;

/// Read a variable, treating unset and blank values the same.
pub(crate) fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional variable, failing on malformed values rather than
/// silently falling back to the default.
pub(crate) fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    non_empty(lookup, key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::config(format!("{key}: invalid value '{raw}': {e}")))
        })
        .transpose()
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
