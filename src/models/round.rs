use std::fmt;

use rand::Rng;

/// A rock-paper-scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Parse operator or peer input. Whitespace and case are ignored;
    /// anything that is not one of the three moves is `None`.
    pub fn parse(input: &str) -> Option<Move> {
        match input.trim().to_ascii_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Draw a uniformly random move.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        match rng.random_range(0..3) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }

    fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one round, from the client's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Draw,
    Win,
    Lose,
}

impl RoundResult {
    /// Identical moves draw; otherwise the beats-relation
    /// (rock > scissors > paper > rock) decides.
    pub fn play(client: Move, server: Move) -> RoundResult {
        if client == server {
            RoundResult::Draw
        } else if client.beats(server) {
            RoundResult::Win
        } else {
            RoundResult::Lose
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self {
            RoundResult::Draw => "Draw",
            RoundResult::Win => "You win",
            RoundResult::Lose => "You lose",
        };
        write!(f, "{}", verdict)
    }
}
