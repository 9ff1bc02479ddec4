//! Protocol text shared by the game servers and clients.
//!
//! Both games speak plain UTF-8 text: newline-delimited lines over TCP,
//! one payload per datagram over UDP. There is no further framing.

use std::net::{IpAddr, Ipv4Addr};

use crate::models::{GuessOutcome, Move, RoundResult};

/// Host both clients connect to and both servers bind on.
pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default rock-paper-scissors (TCP) port.
pub const RPS_PORT: u16 = 5000;

/// Default number-guessing (UDP) port.
pub const GUESS_PORT: u16 = 6000;

/// Inclusive guessing range.
pub const GUESS_MIN: i64 = 1;
pub const GUESS_MAX: i64 = 10;

/// First line the RPS server sends after accepting a connection.
pub const RPS_WELCOME: &str = "Welcome to Rock-Paper-Scissors! Type rock/paper/scissors or quit.";

/// Rejection for a line that is neither a move nor quit.
pub const RPS_INVALID: &str = "Invalid input. Use rock, paper, scissors, or quit.";

/// Final reply to a quit request, on both games.
pub const GOODBYE: &str = "Goodbye!";

/// True if the input is a quit request. Case and surrounding whitespace
/// are ignored.
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("quit")
}

/// Reply line for one played round.
pub fn round_reply(server_move: Move, result: RoundResult) -> String {
    format!("Server chose: {server_move}. Result: {result}")
}

/// Reply payload for one evaluated guess.
pub fn guess_reply(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::TooLow => "Too low".to_string(),
        GuessOutcome::TooHigh => "Too high".to_string(),
        GuessOutcome::Correct => "Correct! You win!".to_string(),
        GuessOutcome::OutOfRange => {
            format!("Please guess between {GUESS_MIN} and {GUESS_MAX}.")
        }
        GuessOutcome::NotANumber => {
            format!("Send a number ({GUESS_MIN}-{GUESS_MAX}) or 'quit'.")
        }
    }
}

/// True if a guess reply announces the winning guess.
pub fn is_winning_reply(reply: &str) -> bool {
    reply.starts_with("Correct!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(is_quit("quit"));
        assert!(is_quit("QUIT"));
        assert!(is_quit("  Quit \n"));
        assert!(!is_quit("quit now"));
        assert!(!is_quit("rock"));
        assert!(!is_quit(""));
    }

    #[test]
    fn test_round_reply_format() {
        assert_eq!(
            round_reply(Move::Scissors, RoundResult::play(Move::Rock, Move::Scissors)),
            "Server chose: scissors. Result: You win"
        );
        assert_eq!(
            round_reply(Move::Paper, RoundResult::play(Move::Paper, Move::Paper)),
            "Server chose: paper. Result: Draw"
        );
        assert_eq!(
            round_reply(Move::Rock, RoundResult::play(Move::Scissors, Move::Rock)),
            "Server chose: rock. Result: You lose"
        );
    }

    #[test]
    fn test_guess_replies() {
        assert_eq!(guess_reply(GuessOutcome::TooLow), "Too low");
        assert_eq!(guess_reply(GuessOutcome::TooHigh), "Too high");
        assert_eq!(guess_reply(GuessOutcome::Correct), "Correct! You win!");
        assert_eq!(
            guess_reply(GuessOutcome::OutOfRange),
            "Please guess between 1 and 10."
        );
        assert_eq!(
            guess_reply(GuessOutcome::NotANumber),
            "Send a number (1-10) or 'quit'."
        );
    }

    #[test]
    fn test_winning_reply_detection() {
        assert!(is_winning_reply(&guess_reply(GuessOutcome::Correct)));
        assert!(!is_winning_reply(&guess_reply(GuessOutcome::TooLow)));
        assert!(!is_winning_reply(GOODBYE));
    }
}
