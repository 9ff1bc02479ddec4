//! # netgames
//!
//! Two minimal single-client network game demos: rock-paper-scissors over
//! TCP and number guessing over UDP, each with a matching interactive
//! terminal client.
//!
//! Every server hosts exactly one peer for the lifetime of the process:
//! it binds, serves a single session, and returns.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//!
//! use netgames::protocol;
//! use netgames::server::RpsServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), netgames::GameError> {
//!     let addr = SocketAddr::new(protocol::HOST, protocol::RPS_PORT);
//!     let server = RpsServer::bind(addr).await?;
//!     server.serve().await
//! }
//! ```

pub mod client;
mod models;
pub mod protocol;
pub mod server;

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

pub use models::{GuessOutcome, Move, RoundResult};

/// Fatal error for a server or client run.
///
/// Bad input from the peer or the operator is never fatal; it is answered
/// with a corrective message and the session loop continues. Only
/// transport failures end a run.
#[derive(Debug, Error)]
pub enum GameError {
    /// The listening or connectionless endpoint could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: io::Error,
    },

    /// Any other socket failure: accept, connect, send, or receive.
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
}
