use std::fmt;
use std::ops::{Index, RangeFull};
use std::str::FromStr;

use super::{Card, HandError};

/// An ordered set of cards.
///
/// Insertion order is kept since the order that five card subsets are
/// enumerated in depends on it. A card can only be in the hand once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Hand(Vec<Card>);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_trainer::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(Vec::with_capacity(7))
    }

    /// Create a hand from the cards given, rejecting duplicates.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        let mut hand = Self(Vec::with_capacity(cards.len()));
        for card in cards {
            if !hand.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_trainer::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    /// Add a card to the end of the hand.
    /// Returns false and leaves the hand alone if the card is already there.
    pub fn insert(&mut self, c: Card) -> bool {
        if self.contains(&c) {
            return false;
        }
        self.0.push(c);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Parse a hand from card identifiers.
    ///
    /// Cards may be separated by whitespace or commas, or run together.
    ///
    /// ```
    /// use hand_trainer::core::{Hand, HandError};
    ///
    /// let hand = Hand::new_from_str("AH 10D, ks").unwrap();
    /// assert_eq!(3, hand.len());
    ///
    /// let hand = Hand::new_from_str("AH10DKS").unwrap();
    /// assert_eq!(3, hand.len());
    ///
    /// assert!(matches!(
    ///     Hand::new_from_str("AH AH"),
    ///     Err(HandError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, HandError> {
        let mut chars = hand_string.chars().peekable();
        let mut hand = Self::new();

        // Keep looping until we explicitly break
        loop {
            while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}
            if chars.peek().is_none() {
                break;
            }
            let c = Card::parse_next(&mut chars)?;
            if !hand.insert(c) {
                return Err(HandError::DuplicateCard(c));
            }
        }

        Ok(hand)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(value: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new_with_cards(value)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(val: Hand) -> Self {
        val.0
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, _index: RangeFull) -> &[Card] {
        &self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
