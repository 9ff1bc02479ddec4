//! TCP rock-paper-scissors server.

use std::io;
use std::net::SocketAddr;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, WriteHalf};
use tokio::net::{TcpListener, TcpStream};

use crate::models::{Move, RoundResult};
use crate::protocol::{self, GOODBYE, RPS_INVALID, RPS_WELCOME};
use crate::GameError;

/// Bind on the default host and serve one session.
pub async fn run(port: u16) -> Result<(), GameError> {
    let server = RpsServer::bind(SocketAddr::new(protocol::HOST, port)).await?;
    server.serve().await
}

/// A listening rock-paper-scissors server.
pub struct RpsServer {
    listener: TcpListener,
}

impl RpsServer {
    pub async fn bind(addr: SocketAddr) -> Result<Self, GameError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GameError::Bind { addr, source })?;
        Ok(Self { listener })
    }

    /// The address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept exactly one client and play rounds until it quits or
    /// disconnects. The listener is dropped afterwards; no second client
    /// is ever accepted.
    pub async fn serve(self) -> Result<(), GameError> {
        info!("waiting for a client on {}", self.listener.local_addr()?);
        let (stream, peer) = self.listener.accept().await?;
        info!("client connected: {peer}");

        let mut rng = StdRng::from_os_rng();
        play_session(stream, &mut rng).await?;

        info!("session closed");
        Ok(())
    }
}

/// One request-reply loop over an accepted connection.
async fn play_session<R: Rng>(stream: TcpStream, rng: &mut R) -> Result<(), GameError> {
    let (reader, mut writer) = tokio::io::split(stream);
    let mut lines = BufReader::new(reader).lines();

    send_line(&mut writer, RPS_WELCOME).await?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim().to_ascii_lowercase();

        if protocol::is_quit(&input) {
            send_line(&mut writer, GOODBYE).await?;
            info!("client requested quit");
            break;
        }

        // A rejected line does not consume a round.
        let Some(client_move) = Move::parse(&input) else {
            send_line(&mut writer, RPS_INVALID).await?;
            continue;
        };

        let server_move = Move::random(rng);
        let result = RoundResult::play(client_move, server_move);
        send_line(&mut writer, &protocol::round_reply(server_move, result)).await?;
        info!("client={client_move} server={server_move} result={result}");
    }

    Ok(())
}

async fn send_line(writer: &mut WriteHalf<TcpStream>, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
