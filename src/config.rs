// src/config.rs
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::animation::hook::DEFAULT_TICK;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Dark basemap key; OpenStreetMap tiles are used without it.
    pub maptiler_key: Option<String>,
    pub session_idle_ttl: Duration,
    pub hook_tick: Duration,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            maptiler_key: None,
            session_idle_ttl: Duration::from_secs(60 * 60 * 24),
            hook_tick: DEFAULT_TICK,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from any variable source; unset means default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Config::default();

        let maptiler_key = lookup("MAPTILER_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Config {
            bind_addr: parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            max_workers: parse_nonzero(&lookup, "MAX_WORKERS")?.unwrap_or(defaults.max_workers),
            maptiler_key,
            session_idle_ttl: parse_var(&lookup, "SESSION_IDLE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_idle_ttl),
            hook_tick: parse_nonzero(&lookup, "HOOK_TICK_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.hook_tick),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

/// A worker count or tick length of zero is as invalid as garbage.
fn parse_nonzero<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr + Default + PartialEq,
    F: Fn(&'static str) -> Option<String>,
{
    match parse_var::<T, F>(lookup, var)? {
        Some(value) if value == T::default() => Err(ConfigError::Invalid {
            var,
            value: lookup(var).unwrap_or_default(),
        }),
        other => Ok(other),
    }
}
