//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use camino::{Utf8Path, Utf8PathBuf};

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_dir: Utf8PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, data_dir: Utf8PathBuf) -> Self {
        Self {
            bind_addr,
            data_dir,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        self.data_dir.as_path()
    }
}
