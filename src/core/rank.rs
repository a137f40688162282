use std::fmt;
use std::str::FromStr;

use super::card_iter::FIVE_OF_SEVEN;
use super::{Card, Hand, HandError, Value};

/// All the different possible hand categories, weakest first.
///
/// The derived ordering is the strength ordering, so comparing two
/// categories tells you which one wins.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten through Ace all of the same suit.
    RoyalFlush,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

impl HandCategory {
    /// Every category, weakest first.
    pub const fn all() -> [Self; 10] {
        CATEGORIES
    }

    /// 1 for a high card up to 10 for a royal flush.
    pub fn strength(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of `strength`.
    pub fn from_strength(strength: u8) -> Option<Self> {
        CATEGORIES.get(usize::from(strength).checked_sub(1)?).copied()
    }

    /// The name shown to players, e.g. `"Three of a Kind"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower case the name and drop anything that isn't a letter, so
/// `"Royal Flush"`, `"royal_flush"`, and `"RoyalFlush"` all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for HandCategory {
    type Err = HandError;

    /// ```
    /// use hand_trainer::core::HandCategory;
    ///
    /// assert_eq!(Ok(HandCategory::RoyalFlush), "Royal Flush".parse());
    /// assert_eq!(Ok(HandCategory::ThreeOfAKind), "three_of_a_kind".parse());
    /// assert!("Five of a Kind".parse::<HandCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        CATEGORIES
            .into_iter()
            .find(|c| normalize(c.name()) == wanted)
            .ok_or_else(|| HandError::UnknownCategory(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HandCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HandCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Five cards and the category they make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedHand {
    pub category: HandCategory,
    pub cards: [Card; 5],
}

/// The best five card hand that can be made out of seven cards.
///
/// When several subsets share the best category the first one found in
/// enumeration order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestHand {
    pub category: HandCategory,
    pub cards: [Card; 5],
}

fn check_distinct(cards: &[Card]) -> Result<(), HandError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(HandError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// The values of a sorted wheel, A-2-3-4-5 with the ace playing low.
const WHEEL: [u8; 5] = [
    Value::Two as u8,
    Value::Three as u8,
    Value::Four as u8,
    Value::Five as u8,
    Value::Ace as u8,
];

/// Work out the category of five distinct cards.
fn classify(cards: &[Card; 5]) -> HandCategory {
    let mut values: [u8; 5] = cards.map(|c| c.value as u8);
    values.sort_unstable();

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut value_to_count = [0u8; 13];
    for v in values {
        value_to_count[usize::from(v)] += 1;
    }
    // The two largest groups of matching values, largest first.
    // Nothing else is needed to tell the categories apart.
    let mut groups = [0u8; 2];
    for count in value_to_count {
        if count > groups[0] {
            groups = [count, groups[0]];
        } else if count > groups[1] {
            groups[1] = count;
        }
    }

    let is_wheel = values == WHEEL;
    let is_straight = groups[0] == 1 && (values[4] - values[0] == 4 || is_wheel);

    if is_flush && is_straight {
        if values.contains(&(Value::Ace as u8)) && !is_wheel {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        }
    } else if groups[0] == 4 {
        HandCategory::FourOfAKind
    } else if groups[0] == 3 && groups[1] == 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if groups[0] == 3 {
        HandCategory::ThreeOfAKind
    } else if groups[0] == 2 && groups[1] == 2 {
        HandCategory::TwoPair
    } else if groups[0] == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    }
}

/// Best hand out of seven distinct cards, keeping the first subset
/// that reaches the best category.
pub(crate) fn best_of_seven(cards: &[Card; 7]) -> BestHand {
    let first = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let mut best = BestHand {
        category: classify(&first),
        cards: first,
    };

    for idx in FIVE_OF_SEVEN.iter().skip(1) {
        if best.category == HandCategory::RoyalFlush {
            // Nothing beats it.
            break;
        }
        let five = idx.map(|i| cards[i]);
        let category = classify(&five);
        if category > best.category {
            best = BestHand {
                category,
                cards: five,
            };
        }
    }
    best
}

/// Classify exactly five cards.
///
/// ```
/// use hand_trainer::core::{Hand, HandCategory, rank_five};
///
/// let hand = Hand::new_from_str("7H 7D 7S 2C 2D").unwrap();
/// assert_eq!(HandCategory::FullHouse, rank_five(&hand[..]).unwrap().category);
/// ```
pub fn rank_five(cards: &[Card]) -> Result<EvaluatedHand, HandError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| HandError::WrongCardCount {
        expected: 5,
        found: cards.len(),
    })?;
    check_distinct(five)?;

    Ok(EvaluatedHand {
        category: classify(five),
        cards: *five,
    })
}

/// Find the best category out of all 21 five card hands in seven cards.
///
/// ```
/// use hand_trainer::core::{Hand, HandCategory, best_hand};
///
/// let hand = Hand::new_from_str("AH KH QH JH 10H 2C 3D").unwrap();
/// let best = best_hand(&hand[..]).unwrap();
/// assert_eq!(HandCategory::RoyalFlush, best.category);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<BestHand, HandError> {
    let seven: &[Card; 7] = cards.try_into().map_err(|_| HandError::WrongCardCount {
        expected: 7,
        found: cards.len(),
    })?;
    check_distinct(seven)?;

    Ok(best_of_seven(seven))
}

/// Can this be turned into a hand category?
pub trait Rankable {
    /// The cards to rank, in order.
    fn cards(&self) -> &[Card];

    /// Classify these cards, which must be exactly five.
    fn rank_five(&self) -> Result<EvaluatedHand, HandError> {
        rank_five(self.cards())
    }

    /// Best five card hand out of these cards, which must be exactly seven.
    fn best_hand(&self) -> Result<BestHand, HandError> {
        best_hand(self.cards())
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        Hand::cards(self)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    use super::*;
    use crate::core::{CardIter, Deck};

    fn category(s: &str) -> HandCategory {
        Hand::new_from_str(s).unwrap().rank_five().unwrap().category
    }

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::StraightFlush);
        assert!(HandCategory::HighCard < HandCategory::FourOfAKind);
        assert!(HandCategory::StraightFlush < HandCategory::RoyalFlush);
        assert!(HandCategory::Flush < HandCategory::FullHouse);
        assert!(HandCategory::all().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_strength() {
        assert_eq!(1, HandCategory::HighCard.strength());
        assert_eq!(10, HandCategory::RoyalFlush.strength());
        for c in HandCategory::all() {
            assert_eq!(Some(c), HandCategory::from_strength(c.strength()));
        }
        assert_eq!(None, HandCategory::from_strength(0));
        assert_eq!(None, HandCategory::from_strength(11));
    }

    #[test]
    fn test_names_parse_back() {
        for c in HandCategory::all() {
            assert_eq!(Ok(c), c.name().parse());
            assert_eq!(Ok(c), format!("{c:?}").parse());
        }
        assert_eq!(
            Err(HandError::UnknownCategory("Five of a Kind".to_string())),
            "Five of a Kind".parse::<HandCategory>()
        );
    }

    #[test]
    fn test_concrete_examples() {
        assert_eq!(HandCategory::FullHouse, category("7H 7D 7S 2C 2D"));
        assert_eq!(HandCategory::StraightFlush, category("9H 10H JH QH KH"));
        assert_eq!(HandCategory::RoyalFlush, category("AH KH QH JH 10H"));
        assert_eq!(HandCategory::HighCard, category("2H 3D 5S 9C KH"));
    }

    #[test]
    fn test_every_category() {
        assert_eq!(HandCategory::OnePair, category("2H 2D 5S 9C KH"));
        assert_eq!(HandCategory::TwoPair, category("2H 2D 5S 5C KH"));
        assert_eq!(HandCategory::ThreeOfAKind, category("2H 2D 2S 5C KH"));
        assert_eq!(HandCategory::Straight, category("6H 7D 8S 9C 10H"));
        assert_eq!(HandCategory::Straight, category("10H JD QS KC AH"));
        assert_eq!(HandCategory::Flush, category("2H 4H 6H 8H 10H"));
        assert_eq!(HandCategory::FourOfAKind, category("9H 9D 9S 9C 2H"));
    }

    #[test]
    fn test_wheel() {
        assert_eq!(HandCategory::StraightFlush, category("AS 2S 3S 4S 5S"));
        assert_eq!(HandCategory::Straight, category("AS 2D 3S 4C 5H"));
    }

    #[test]
    fn test_not_straights() {
        // Ace can't wrap around the top.
        assert_eq!(HandCategory::HighCard, category("QS KD AS 2C 3H"));
        assert_eq!(HandCategory::Flush, category("QS KS AS 2S 3S"));
        assert_eq!(HandCategory::HighCard, category("2S 3D 4S 5C 7H"));
    }

    #[test]
    fn test_wrong_sizes() {
        let hand = Hand::new_from_str("2H 3D 5S 9C").unwrap();
        assert_eq!(
            Err(HandError::WrongCardCount {
                expected: 5,
                found: 4
            }),
            hand.rank_five()
        );
        let empty: Vec<Card> = vec![];
        assert_eq!(
            Err(HandError::WrongCardCount {
                expected: 7,
                found: 0
            }),
            empty.best_hand()
        );
        let five = Hand::new_from_str("2H 3D 5S 9C KH").unwrap();
        assert_eq!(
            Err(HandError::WrongCardCount {
                expected: 7,
                found: 5
            }),
            five.best_hand()
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        let c = Card::from(7);
        let cards = vec![c, c, Card::from(1), Card::from(2), Card::from(3)];
        assert_eq!(Err(HandError::DuplicateCard(c)), cards.rank_five());
    }

    #[test]
    fn test_permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut cards = Deck::new_shuffled(&mut rng).draw(5).unwrap();
            let expected = cards.rank_five().unwrap().category;
            for _ in 0..5 {
                cards.shuffle(&mut rng);
                assert_eq!(expected, cards.rank_five().unwrap().category);
            }
        }
    }

    #[test]
    fn test_best_hand_is_max_of_subsets() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let cards = Deck::new_shuffled(&mut rng).draw(7).unwrap();
            let best = cards.best_hand().unwrap();
            let subset_categories: Vec<HandCategory> = CardIter::new(&cards, 5)
                .map(|s| s.rank_five().unwrap().category)
                .collect();
            assert_eq!(21, subset_categories.len());
            assert!(subset_categories.iter().all(|c| *c <= best.category));
            assert!(subset_categories.contains(&best.category));
            assert_eq!(best.category, best.cards.rank_five().unwrap().category);
        }
    }

    #[test]
    fn test_best_hand_keeps_first_subset() {
        // The first subset already holds the pair of aces and nothing beats it.
        let hand = Hand::new_from_str("AH AD 2C 4S 6H 8D 10C").unwrap();
        let best = hand.best_hand().unwrap();
        assert_eq!(HandCategory::OnePair, best.category);
        assert_eq!(hand.cards()[..5], best.cards);
    }

    #[test]
    fn test_best_hand_finds_hidden_straight() {
        let hand = Hand::new_from_str("KD 2C 3H 9S 4D AS 5C").unwrap();
        let best = hand.best_hand().unwrap();
        assert_eq!(HandCategory::Straight, best.category);
    }

    #[test]
    fn test_five_card_distribution() {
        // Known counts over all 2,598,960 five card hands.
        let deck = Deck::ordered();
        let mut counts = [0usize; 10];
        for cards in CardIter::new(&deck[..], 5) {
            counts[cards.rank_five().unwrap().category as usize] += 1;
        }
        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4],
            counts
        );
    }
}
