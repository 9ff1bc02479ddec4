//! Interactive TCP rock-paper-scissors client.

use std::net::{IpAddr, SocketAddr};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::protocol;
use crate::GameError;

/// Connect to the server and relay operator input until the session ends.
pub async fn run(host: IpAddr, port: u16) -> Result<(), GameError> {
    let addr = SocketAddr::new(host, port);
    println!("Connecting to {addr}...");
    let stream = TcpStream::connect(addr).await?;
    let (reader, mut writer) = tokio::io::split(stream);
    let mut replies = BufReader::new(reader).lines();

    if let Some(greeting) = replies.next_line().await? {
        println!("{greeting}");
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        super::prompt("Enter choice (rock/paper/scissors) or quit: ")?;
        let Some(choice) = input.next_line().await? else {
            break;
        };

        writer.write_all(choice.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        let Some(reply) = replies.next_line().await? else {
            println!("Server closed the connection.");
            break;
        };
        println!("{reply}");

        if protocol::is_quit(&choice) {
            break;
        }
    }

    println!("Bye.");
    Ok(())
}
