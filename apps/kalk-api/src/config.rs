//! Service configuration loaded from the environment

use std::{fmt::Display, str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Result};
use kalk_domain::OverflowPolicy;

const HOST_VAR: &str = "KALK_HOST";
const PORT_VAR: &str = "KALK_PORT";
const OVERFLOW_POLICY_VAR: &str = "KALK_OVERFLOW_POLICY";
const REQUEST_TIMEOUT_VAR: &str = "KALK_REQUEST_TIMEOUT_SECS";
const LOG_FORMAT_VAR: &str = "KALK_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => bail!("unknown log format '{}' (expected 'json' or 'pretty')", other),
        }
    }
}

/// Runtime configuration of the HTTP service
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub overflow_policy: OverflowPolicy,
    /// Upper bound on the time spent serving one request
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8989,
            overflow_policy: OverflowPolicy::default(),
            request_timeout: Duration::from_secs(10),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    ///
    /// Unset variables fall back to the defaults; set but unparsable ones are
    /// an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port);
        let overflow_policy =
            parse_var(&lookup, OVERFLOW_POLICY_VAR)?.unwrap_or(defaults.overflow_policy);
        let request_timeout = parse_var::<u64, _>(&lookup, REQUEST_TIMEOUT_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let log_format = parse_var(&lookup, LOG_FORMAT_VAR)?.unwrap_or(defaults.log_format);

        if request_timeout.is_zero() {
            bail!("{} must be greater than zero", REQUEST_TIMEOUT_VAR);
        }

        Ok(Self {
            host,
            port,
            overflow_policy,
            request_timeout,
            log_format,
        })
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| anyhow!("invalid value {:?} for {}: {}", raw, key, err)),
    }
}
