//! Configuration types.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 8000;

/// Service configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct HoneypotConfig {
    /// Shared secret expected in the `x-api-key` header.
    pub api_key: SecretString,
    /// Address the HTTP listener binds to.
    pub bind: IpAddr,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Upper bound on live sessions. `None` keeps every session for the
    /// lifetime of the process.
    pub max_sessions: Option<usize>,
    /// Directory for daily-rolling log files, in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl HoneypotConfig {
    /// Build config from environment variables.
    ///
    /// `HONEYPOT_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (env, map in tests, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HONEYPOT_API_KEY")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("HONEYPOT_API_KEY".to_string()))?;

        let bind = match lookup("HONEYPOT_BIND") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: "HONEYPOT_BIND".to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("HONEYPOT_PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: "HONEYPOT_PORT".to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let max_sessions = match lookup("HONEYPOT_MAX_SESSIONS") {
            Some(raw) => {
                let n: usize = raw.parse().map_err(|e| ConfigError::InvalidValue {
                    key: "HONEYPOT_MAX_SESSIONS".to_string(),
                    message: format!("{raw:?}: {e}"),
                })?;
                if n == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "HONEYPOT_MAX_SESSIONS".to_string(),
                        message: "must be at least 1".to_string(),
                    });
                }
                Some(n)
            }
            None => None,
        };

        let log_dir = lookup("HONEYPOT_LOG_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_key: SecretString::from(api_key),
            bind,
            port,
            max_sessions,
            log_dir,
        })
    }

    /// Socket address for the HTTP listener.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
