//! Game domain types.

mod guess;
mod round;

pub use guess::{draw_secret, GuessOutcome};
pub use round::{Move, RoundResult};
