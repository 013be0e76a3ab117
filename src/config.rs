//! Server configuration.
//!
//! Layered lowest-to-highest: built-in defaults, `~/.memofib/config.json`
//! (partial files allowed), then `MEMOFIB_BIND` / `MEMOFIB_PORT` from the
//! environment. CLI flags are applied on top by the binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bind address (default: 127.0.0.1).
    pub bind: String,
    /// Listen port.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 7071,
        }
    }
}

impl Config {
    /// Path of the optional config file: `~/.memofib/config.json`.
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".memofib")
            .join("config.json")
    }

    /// Load the config file if it exists, then apply environment overrides.
    ///
    /// An unreadable or malformed file logs a warning and falls back to
    /// defaults rather than refusing to start.
    pub fn load_or_default() -> Self {
        let mut config = match std::fs::read_to_string(Self::path()) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %Self::path().display(), error = %e, "Invalid config file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.apply_env();
        config
    }

    /// Apply `MEMOFIB_BIND` / `MEMOFIB_PORT` overrides.
    pub fn apply_env(&mut self) {
        if let Ok(bind) = std::env::var("MEMOFIB_BIND") {
            if !bind.is_empty() {
                self.bind = bind;
            }
        }
        if let Ok(port) = std::env::var("MEMOFIB_PORT") {
            match port.parse() {
                Ok(p) => self.port = p,
                Err(_) => warn!(value = %port, "Ignoring non-numeric MEMOFIB_PORT"),
            }
        }
    }

    /// `bind:port` as passed to the TCP listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
