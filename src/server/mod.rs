//! Game servers.
//!
//! Each server hosts exactly one peer interaction for the lifetime of the
//! process: the TCP server accepts a single connection and never loops
//! back to accept another, and the UDP server answers datagrams until the
//! game ends. Both then release their sockets and return.

pub mod guess;
pub mod rps;

pub use guess::GuessServer;
pub use rps::RpsServer;
