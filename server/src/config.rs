//! Server configuration from defaults and environment variables.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "INSIGHTS_ADDR";
pub const DATA_VAR: &str = "INSIGHTS_DATA";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATA_PATH: &str = "data/jobs.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `INSIGHTS_ADDR` and `INSIGHTS_DATA`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup(ADDR_VAR) {
            let addr = addr.parse().with_context(|| {
                format!("{ADDR_VAR} must be ip:port like {DEFAULT_ADDR}, got {addr:?}")
            })?;
            config = config.with_addr(addr);
        }
        if let Some(path) = lookup(DATA_VAR) {
            config = config.with_data_path(PathBuf::from(path));
        }

        Ok(config)
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = path;
        self
    }
}
