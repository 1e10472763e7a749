//! Process configuration read from the environment

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TENANT: &str = "default";
const DEFAULT_SOURCE: &str = "WhatsApp";
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 10 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub db_path: PathBuf,
    pub port: u16,
    pub tenant_id: String,
    /// Origin channel recorded on submissions
    pub source: String,
    /// Transport bridge webhook; replies are only logged when unset
    pub outbound_url: Option<String>,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("WARD_BOT_DB_PATH").map_or_else(
            || {
                let home = lookup("HOME").unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(home).join(".ward-bot").join("ward_bot.db")
            },
            PathBuf::from,
        );

        let tenant_id = lookup("WARD_BOT_TENANT_ID").unwrap_or_else(|| DEFAULT_TENANT.to_string());
        if tenant_id.trim().is_empty() {
            return Err(ConfigError::Empty {
                var: "WARD_BOT_TENANT_ID",
            });
        }

        let session_ttl = numeric(&lookup, "WARD_BOT_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS);
        let sweep_interval = numeric(&lookup, "WARD_BOT_SWEEP_INTERVAL_SECS", DEFAULT_SWEEP_INTERVAL_SECS);
        if sweep_interval == 0 {
            return Err(ConfigError::Zero {
                var: "WARD_BOT_SWEEP_INTERVAL_SECS",
            });
        }
        if session_ttl == 0 {
            return Err(ConfigError::Zero {
                var: "WARD_BOT_SESSION_TTL_SECS",
            });
        }

        Ok(Self {
            db_path,
            port: numeric(&lookup, "WARD_BOT_PORT", DEFAULT_PORT),
            tenant_id,
            source: lookup("WARD_BOT_SOURCE").unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            outbound_url: lookup("WARD_BOT_OUTBOUND_URL").filter(|url| !url.trim().is_empty()),
            session_ttl: Duration::from_secs(session_ttl),
            sweep_interval: Duration::from_secs(sweep_interval),
        })
    }
}

/// Parse a numeric variable, falling back to `default` with a warning
fn numeric<F, T>(lookup: &F, var: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(var) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var, value = %raw, default = %default, "Unparseable setting, using default");
            default
        }),
    }
}
