//! Server status record.
//!
//! A small JSON file at the layout root (`.cache.json`) records whether a
//! server is running and on which port. The server lifecycle writes it;
//! status tooling reads it. It is advisory only and never consulted by the
//! request path.

use std::fs;
use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::layout::StorageLayout;

/// Contents of the status record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Whether a server believes it is currently running.
    pub server: bool,
    /// The port it serves on, recorded only while running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ServerStatus {
    /// Record for a server listening on `port`.
    pub fn running(port: u16) -> Self {
        Self {
            server: true,
            port: Some(port),
        }
    }

    /// Record for a stopped server.
    pub fn stopped() -> Self {
        Self {
            server: false,
            port: None,
        }
    }
}

/// Overwrite the status record under the layout root.
pub fn write_status(layout: &StorageLayout, status: &ServerStatus) -> Result<()> {
    let bytes =
        serde_json::to_vec(status).map_err(|err| StoreError::Serialization(err.to_string()))?;
    fs::write(layout.cache_file(), bytes)?;
    debug!(running = status.server, port = status.port, "wrote status record");
    Ok(())
}

/// Read the status record, or `None` when no record has been written yet.
pub fn read_status(layout: &StorageLayout) -> Result<Option<ServerStatus>> {
    let bytes = match fs::read(layout.cache_file()) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let status = serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
        name: ".cache.json".to_string(),
        reason: err.to_string(),
    })?;
    Ok(Some(status))
}
