use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fourier_store::StorageLayout;

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 2359;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on; the server binds to localhost only.
    pub port: u16,
    /// Storage root directory holding databases, logs, and the status record.
    pub root: PathBuf,
}

impl ServerConfig {
    /// The socket address derived from the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: StorageLayout::default_root(),
        }
    }
}
