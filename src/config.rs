//! Runtime configuration.
//!
//! Defaults are suitable for local use; each value can be overridden
//! through an `APPRAISAL_*` environment variable.

use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Default SQLite file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "appraisals.sqlite3";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Worker threads handed to the HTTP server.
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Largest accepted request body (1 MiB). Appraisal documents are a few KiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Lifetime of sessions issued by `issue-session` (7 days).
pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// Shown in the header band of printed summaries.
pub const DEFAULT_AGENCY_NAME: &str = "Appraisal Capture";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub max_body_bytes: usize,
    pub session_ttl_secs: i64,
    pub agency_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            agency_name: DEFAULT_AGENCY_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup("APPRAISAL_DB_PATH").filter(|p| !p.trim().is_empty()) {
            cfg.db_path = path;
        }
        if let Some(name) = lookup("APPRAISAL_AGENCY_NAME").filter(|n| !n.trim().is_empty()) {
            cfg.agency_name = name;
        }

        cfg.bind_addr = parse_or(&lookup, "APPRAISAL_BIND_ADDR", cfg.bind_addr)?;
        cfg.max_workers = parse_or(&lookup, "APPRAISAL_MAX_WORKERS", cfg.max_workers)?;
        cfg.max_body_bytes = parse_or(&lookup, "APPRAISAL_MAX_BODY_BYTES", cfg.max_body_bytes)?;
        cfg.session_ttl_secs =
            parse_or(&lookup, "APPRAISAL_SESSION_TTL_SECS", cfg.session_ttl_secs)?;

        if cfg.max_workers == 0 {
            return Err(ConfigError::Invalid {
                key: "APPRAISAL_MAX_WORKERS",
                value: "0".into(),
            });
        }
        if cfg.session_ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "APPRAISAL_SESSION_TTL_SECS",
                value: cfg.session_ttl_secs.to_string(),
            });
        }

        Ok(cfg)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
