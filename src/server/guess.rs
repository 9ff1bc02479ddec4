//! UDP number-guessing server.

use std::io;
use std::net::SocketAddr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::UdpSocket;

use crate::models::{draw_secret, GuessOutcome};
use crate::protocol::{self, GOODBYE};
use crate::GameError;

/// Bind on the default host and serve one game.
pub async fn run(port: u16) -> Result<(), GameError> {
    let server = GuessServer::bind(SocketAddr::new(protocol::HOST, port)).await?;
    server.serve().await
}

/// A number-guessing server holding the secret for its whole run.
pub struct GuessServer {
    socket: UdpSocket,
    secret: i64,
}

impl GuessServer {
    /// Bind and draw a random secret.
    pub async fn bind(addr: SocketAddr) -> Result<Self, GameError> {
        let mut rng = StdRng::from_os_rng();
        Self::bind_with_secret(addr, draw_secret(&mut rng)).await
    }

    /// Bind with a caller-chosen secret.
    pub async fn bind_with_secret(addr: SocketAddr, secret: i64) -> Result<Self, GameError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| GameError::Bind { addr, source })?;
        Ok(Self { socket, secret })
    }

    /// The address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Answer datagrams one at a time, in receipt order, until the secret
    /// is guessed or a client asks to quit. Exactly one reply datagram is
    /// sent to the source of each request.
    pub async fn serve(self) -> Result<(), GameError> {
        info!("listening on {}", self.socket.local_addr()?);
        debug!("secret number is {} (hidden from clients)", self.secret);

        let mut buf = [0u8; 512];
        loop {
            let (len, peer) = self.socket.recv_from(&mut buf).await?;
            let received = String::from_utf8_lossy(&buf[..len]).trim().to_string();

            // Quit is honored before any guess parsing.
            let (reply, done) = if protocol::is_quit(&received) {
                (GOODBYE.to_string(), true)
            } else {
                let outcome = GuessOutcome::evaluate(&received, self.secret);
                (protocol::guess_reply(outcome), outcome.ends_game())
            };

            self.socket.send_to(reply.as_bytes(), peer).await?;
            info!("from {peer} msg={received:?} reply={reply:?}");

            if done {
                break;
            }
        }

        info!("stopped");
        Ok(())
    }
}
