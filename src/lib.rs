//! Hand trainer is the engine behind a poker hand recognition quiz.
//!
//! It ranks five card hands into one of ten categories, finds the best
//! category that seven cards can make, and deals seven card hands so that
//! every category comes up equally often, even the royal flush.
//!
//! ```
//! use hand_trainer::core::{Hand, HandCategory, Rankable};
//!
//! let hand = Hand::new_from_str("7H 7D 7S 2C 2D").unwrap();
//! assert_eq!(HandCategory::FullHouse, hand.rank_five().unwrap().category);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Cards, decks, hands, and hand ranking.
pub mod core;

/// Dealing hands of a chosen category.
pub mod generator;

/// The quiz facing interface.
pub mod quiz;
