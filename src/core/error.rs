use thiserror::Error;

use super::Card;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages.
///
/// Every variant is a distinct condition so callers can decide
/// whether to retry, log, or show a message.
#[derive(Error, Debug, Hash, PartialEq, Eq, Clone)]
pub enum HandError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("Expected exactly {expected} cards but got {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("Asked to draw {requested} cards with only {remaining} left in the deck")]
    NotEnoughCards { requested: usize, remaining: usize },
    #[error("Unknown hand category {0:?}")]
    UnknownCategory(String),
}
