use rand::Rng;

use crate::protocol::{GUESS_MAX, GUESS_MIN};

/// How a single guess compares to the secret number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
    OutOfRange,
    NotANumber,
}

impl GuessOutcome {
    /// Evaluate one datagram's text against the secret. The text is
    /// trimmed before parsing; quit handling happens before this is
    /// called, so "quit" falls through to `NotANumber` here.
    pub fn evaluate(input: &str, secret: i64) -> GuessOutcome {
        let Ok(guess) = input.trim().parse::<i64>() else {
            return GuessOutcome::NotANumber;
        };
        if !(GUESS_MIN..=GUESS_MAX).contains(&guess) {
            GuessOutcome::OutOfRange
        } else if guess < secret {
            GuessOutcome::TooLow
        } else if guess > secret {
            GuessOutcome::TooHigh
        } else {
            GuessOutcome::Correct
        }
    }

    /// A correct guess ends the server's run.
    pub fn ends_game(self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

/// Draw the secret number, uniform over the guessing range.
pub fn draw_secret<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(GUESS_MIN..=GUESS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_partition_the_range() {
        for secret in GUESS_MIN..=GUESS_MAX {
            for guess in GUESS_MIN..=GUESS_MAX {
                let outcome = GuessOutcome::evaluate(&guess.to_string(), secret);
                let expected = if guess < secret {
                    GuessOutcome::TooLow
                } else if guess > secret {
                    GuessOutcome::TooHigh
                } else {
                    GuessOutcome::Correct
                };
                assert_eq!(outcome, expected, "guess {guess} vs secret {secret}");
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(GuessOutcome::evaluate("0", 5), GuessOutcome::OutOfRange);
        assert_eq!(GuessOutcome::evaluate("11", 5), GuessOutcome::OutOfRange);
        assert_eq!(GuessOutcome::evaluate("-3", 5), GuessOutcome::OutOfRange);
        assert_eq!(GuessOutcome::evaluate("15", 5), GuessOutcome::OutOfRange);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(GuessOutcome::evaluate("abc", 5), GuessOutcome::NotANumber);
        assert_eq!(GuessOutcome::evaluate("", 5), GuessOutcome::NotANumber);
        assert_eq!(GuessOutcome::evaluate("3.5", 5), GuessOutcome::NotANumber);
        assert_eq!(GuessOutcome::evaluate("quit", 5), GuessOutcome::NotANumber);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(GuessOutcome::evaluate(" 7 \n", 7), GuessOutcome::Correct);
    }

    #[test]
    fn test_only_correct_ends_game() {
        assert!(GuessOutcome::Correct.ends_game());
        assert!(!GuessOutcome::TooLow.ends_game());
        assert!(!GuessOutcome::TooHigh.ends_game());
        assert!(!GuessOutcome::OutOfRange.ends_game());
        assert!(!GuessOutcome::NotANumber.ends_game());
    }
}
