//! HTTP server configuration from TOML (`[server]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address, e.g. `127.0.0.1:8080`
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl FileServerConfig {
    /// Parse `bind` into a socket address, returning validation issues.
    pub fn parse_bind(&self) -> (Option<SocketAddr>, Vec<ConfigIssue>) {
        match self.bind.trim().parse::<SocketAddr>() {
            Ok(addr) => (Some(addr), vec![]),
            Err(e) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidValue {
                        field: "server.bind".to_string(),
                        value: self.bind.clone(),
                    },
                    format!("server.bind: '{}' is not a socket address ({})", self.bind, e),
                )],
            ),
        }
    }
}
