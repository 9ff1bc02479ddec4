//! Interactive UDP number-guessing client.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UdpSocket;

use crate::protocol::{self, GUESS_MAX, GUESS_MIN};
use crate::GameError;

/// Send one guess per datagram and print each reply until the game ends.
pub async fn run(host: IpAddr, port: u16) -> Result<(), GameError> {
    let server = SocketAddr::new(host, port);
    let local = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0);
    let socket = UdpSocket::bind(local)
        .await
        .map_err(|source| GameError::Bind { addr: local, source })?;
    socket.connect(server).await?;
    println!("Talking to {server}. Type a number between {GUESS_MIN}-{GUESS_MAX} or 'quit'.");

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut buf = [0u8; 512];
    loop {
        super::prompt("Your guess: ")?;
        let Some(line) = input.next_line().await? else {
            break;
        };
        let msg = line.trim().to_string();

        socket.send(msg.as_bytes()).await?;
        let len = socket.recv(&mut buf).await?;
        let reply = String::from_utf8_lossy(&buf[..len]).to_string();
        println!("Server: {reply}");

        if protocol::is_quit(&msg) || protocol::is_winning_reply(&reply) {
            break;
        }
    }

    println!("Bye.");
    Ok(())
}
