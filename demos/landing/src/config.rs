//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "LANDING_ADDR";
pub const PKG_DIR_VAR: &str = "LANDING_PKG_DIR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PKG_DIR: &str = "./pkg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid LANDING_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory holding the `wasm-pack` output served under `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let pkg_dir = lookup(PKG_DIR_VAR).unwrap_or_else(|| DEFAULT_PKG_DIR.to_owned());

        let addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr { value: addr, source })?;

        Ok(ServerConfig {
            addr,
            pkg_dir: PathBuf::from(pkg_dir),
        })
    }
}
