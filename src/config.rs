use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "FILESTASH_CONFIG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9998;
pub const DEFAULT_STORAGE_DIR: &str = "serverdata";
pub const DEFAULT_MAX_HEADER_SIZE: usize = 4096;

/// Largest accepted `max_header_size` (1 MiB).
pub const MAX_HEADER_SIZE_LIMIT: usize = 1024 * 1024;

/// Smallest accepted `max_header_size`: room for the blank-line terminator.
pub const MIN_HEADER_SIZE: usize = 4;

/// Server configuration.
///
/// Every field has a default, so a YAML file only needs the keys it changes:
///
/// ```yaml
/// port: 8080
/// storage_dir: /srv/files
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Directory served by listings and file reads
    pub storage_dir: PathBuf,
    /// Upper bound on the request head, in bytes
    pub max_header_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            max_header_size: DEFAULT_MAX_HEADER_SIZE,
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Loads the configuration using `lookup` in place of the environment.
    ///
    /// If `FILESTASH_CONFIG` is set the named YAML file is read first; `PORT`
    /// then overrides whatever port it produced.
    pub fn load_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(CONFIG_PATH_ENV) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("can't read config file {path}"))?;
                Self::from_yaml_str(&raw)
                    .with_context(|| format!("can't parse config file {path}"))?
            }
            None => Self::default(),
        };

        if let Some(port) = lookup(PORT_ENV) {
            cfg.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid {PORT_ENV} value {port:?}"))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Parses a YAML document; missing keys fall back to their defaults.
    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects values the server can't run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (MIN_HEADER_SIZE..=MAX_HEADER_SIZE_LIMIT).contains(&self.max_header_size),
            "max_header_size must be between {} and {} bytes, got {}",
            MIN_HEADER_SIZE,
            MAX_HEADER_SIZE_LIMIT,
            self.max_header_size
        );
        Ok(())
    }

    /// Address handed to the listener, e.g. `0.0.0.0:9998`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
