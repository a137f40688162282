//! This is the core module. It exports everything needed to
//! represent cards and rank poker hands.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors for everything in core.
mod error;
pub use self::error::HandError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 card hand classification and best hand out of 7 cards.
mod rank;
/// Export the trait and the results.
pub use self::rank::{BestHand, EvaluatedHand, HandCategory, Rankable, best_hand, rank_five};
pub(crate) use self::rank::best_of_seven;
