use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::error;
use netgames::{client, protocol, server};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run mode; omit to pick one from the menu
    #[arg(value_enum)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    RpsServer,
    RpsClient,
    GuessServer,
    GuessClient,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args = Args::parse();
    let Some(mode) = args.mode.or_else(pick_mode_from_menu) else {
        println!("Invalid option");
        return;
    };

    let result = match mode {
        Mode::RpsServer => server::rps::run(protocol::RPS_PORT).await,
        Mode::RpsClient => client::rps::run(protocol::HOST, protocol::RPS_PORT).await,
        Mode::GuessServer => server::guess::run(protocol::GUESS_PORT).await,
        Mode::GuessClient => client::guess::run(protocol::HOST, protocol::GUESS_PORT).await,
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Startup menu: a single integer selects one of the four modes.
fn pick_mode_from_menu() -> Option<Mode> {
    println!("Choose mode:");
    println!("1. RPS Server");
    println!("2. RPS Client");
    println!("3. UDP Guess Server");
    println!("4. UDP Guess Client");
    print!("> ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    match line.trim() {
        "1" => Some(Mode::RpsServer),
        "2" => Some(Mode::RpsClient),
        "3" => Some(Mode::GuessServer),
        "4" => Some(Mode::GuessClient),
        _ => None,
    }
}
