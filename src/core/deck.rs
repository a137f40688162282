use std::ops::{Index, RangeFull};

use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use super::{Card, HandError, Suit, Value};

/// `Deck` is the normal 52 card deck.
///
/// Cards are dealt from the front. Once shuffled the order is never
/// touched again; dealing just moves a cursor, so two draws from the
/// same deck can never hand out the same card twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
    /// How many cards have been dealt off the front.
    dealt: usize,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create the 52 card deck in value then suit order.
    ///
    /// ```
    /// use hand_trainer::core::Deck;
    ///
    /// assert_eq!(52, Deck::ordered().len());
    /// ```
    pub fn ordered() -> Self {
        let cards = Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect();
        Self { cards, dealt: 0 }
    }

    /// Create a full deck and shuffle it with the given rng.
    ///
    /// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so every
    /// permutation is equally likely given a uniform rng.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Randomly shuffle the cards that have not been dealt yet.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.dealt..].shuffle(rng)
    }

    /// How many cards are left to deal?
    pub fn len(&self) -> usize {
        self.cards.len() - self.dealt
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cards that have not been dealt yet, in dealing order.
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.dealt..]
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.dealt).copied()?;
        self.dealt += 1;
        Some(card)
    }

    /// Draw the next `n` cards off the front of the deck.
    ///
    /// ```
    /// use hand_trainer::core::{Deck, HandError};
    ///
    /// let mut deck = Deck::default();
    /// let hand = deck.draw(7).unwrap();
    /// assert_eq!(7, hand.len());
    /// assert_eq!(45, deck.len());
    ///
    /// assert_eq!(
    ///     Err(HandError::NotEnoughCards { requested: 46, remaining: 45 }),
    ///     deck.draw(46)
    /// );
    /// ```
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, HandError> {
        let remaining = self.len();
        if n > remaining {
            return Err(HandError::NotEnoughCards {
                requested: n,
                remaining,
            });
        }
        let start = self.dealt;
        self.dealt += n;
        Ok(self.cards[start..self.dealt].to_vec())
    }
}

impl Default for Deck {
    /// A freshly shuffled deck using the thread rng.
    fn default() -> Self {
        Self::new_shuffled(&mut rng())
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.remaining()[index]
    }
}

impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, _index: RangeFull) -> &[Card] {
        self.remaining()
    }
}

/// Turn a deck into an iterator over the undealt cards.
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::iter::Skip<std::vec::IntoIter<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().skip(self.dealt)
    }
}
