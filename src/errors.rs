//! Errors that may occur while starting or running the server.
//!
//! Resolvers themselves never fail: a missing book is reported as `null`, and malformed requests
//! are rejected by schema validation before any resolver runs.

use std::{io::Error as IoError, net::SocketAddr};
use thiserror::Error;

/// Errors that end the server process. Created by [`serve`](crate::server::serve).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServeError {
    /// The listening socket could not be bound.
    #[error("Could not bind to {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// The server stopped due to an IO error after binding.
    #[error("Server on {addr} failed: {source}")]
    Serve {
        /// The address the server was bound to.
        addr: SocketAddr,
        /// The source error.
        #[source]
        source: IoError,
    },
}
