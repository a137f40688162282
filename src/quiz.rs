//! The hand recognition quiz boundary.
//!
//! The quiz shows seven cards, five on the board and two in the hand, and
//! asks the player to name the best hand they make. This module deals those
//! questions, grades answers, and maps cards to image asset keys.
use crate::core::{Card, HandCategory, HandError};
use crate::generator::{HandGenerator, RngHandGenerator};
use rand::Rng;

/// One quiz question: seven cards and the best hand they make.
///
/// With the `serde` feature this serialises as
/// `{"cards": ["AH", ...], "bestCategoryName": "Royal Flush"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizQuestion {
    pub cards: [Card; 7],
    #[cfg_attr(feature = "serde", serde(rename = "bestCategoryName"))]
    pub best_category: HandCategory,
}

/// How an answer to a question went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Incorrect { answer: HandCategory },
    /// No answer was given before time ran out.
    TimedOut { answer: HandCategory },
}

impl QuizQuestion {
    /// Deal a question using the given generator.
    pub fn deal<R: Rng>(generator: &mut RngHandGenerator<R>) -> Self {
        let hand = generator.generate_uniform();
        Self {
            cards: hand.cards,
            best_category: hand.category,
        }
    }

    /// The five community cards.
    pub fn board(&self) -> &[Card] {
        &self.cards[..5]
    }

    /// The player's two hole cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.cards[5..]
    }

    pub fn best_category_name(&self) -> &'static str {
        self.best_category.name()
    }

    /// Image asset keys for all seven cards in order.
    pub fn display_keys(&self) -> Vec<String> {
        self.cards.iter().map(Card::display_key).collect()
    }

    /// Grade a guess. `None` or a blank guess means time ran out.
    ///
    /// ```
    /// use hand_trainer::core::{Hand, HandCategory};
    /// use hand_trainer::quiz::{QuizQuestion, Verdict};
    ///
    /// let hand = Hand::new_from_str("AH KH QH JH 10H 2C 3D").unwrap();
    /// let question = QuizQuestion::try_from(hand.cards()).unwrap();
    /// assert_eq!(Ok(Verdict::Correct), question.grade(Some("Royal Flush")));
    /// assert_eq!(
    ///     Ok(Verdict::Incorrect { answer: HandCategory::RoyalFlush }),
    ///     question.grade(Some("Flush"))
    /// );
    /// assert!(question.grade(Some("Big Slick")).is_err());
    /// ```
    pub fn grade(&self, guess: Option<&str>) -> Result<Verdict, HandError> {
        let answer = self.best_category;
        let Some(guess) = guess.map(str::trim).filter(|g| !g.is_empty()) else {
            return Ok(Verdict::TimedOut { answer });
        };
        if guess.parse::<HandCategory>()? == answer {
            Ok(Verdict::Correct)
        } else {
            Ok(Verdict::Incorrect { answer })
        }
    }
}

/// Build a question from seven known cards.
impl TryFrom<&[Card]> for QuizQuestion {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let best = crate::core::best_hand(cards)?;
        let cards: [Card; 7] = cards.try_into().map_err(|_| HandError::WrongCardCount {
            expected: 7,
            found: cards.len(),
        })?;
        Ok(Self {
            cards,
            best_category: best.category,
        })
    }
}

/// Deal a question whose answer is uniformly spread over all ten
/// categories, using the thread rng.
pub fn generate_uniform_hand() -> QuizQuestion {
    QuizQuestion::deal(&mut HandGenerator::default())
}

/// The image asset key for a card, see [`Card::display_key`].
pub fn card_display_key(card: &Card) -> String {
    card.display_key()
}

/// The image asset key for a card identifier such as `"AH"`.
///
/// ```
/// use hand_trainer::quiz::card_display_key_str;
///
/// assert_eq!(Ok("aH".to_string()), card_display_key_str("AH"));
/// assert_eq!(Ok("10D".to_string()), card_display_key_str("10D"));
/// assert!(card_display_key_str("ZZ").is_err());
/// ```
pub fn card_display_key_str(card: &str) -> Result<String, HandError> {
    Ok(card.parse::<Card>()?.display_key())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Hand, Rankable};

    fn question(s: &str) -> QuizQuestion {
        let hand = Hand::new_from_str(s).unwrap();
        QuizQuestion::try_from(hand.cards()).unwrap()
    }

    #[test]
    fn test_board_and_hole_cards() {
        let q = question("2H 3H 4H 5H 7C 9D 9S");
        assert_eq!(5, q.board().len());
        assert_eq!(2, q.hole_cards().len());
        assert_eq!("9D".parse::<Card>().unwrap(), q.hole_cards()[0]);
        assert_eq!(HandCategory::Flush, q.best_category);
        assert_eq!("Flush", q.best_category_name());
    }

    #[test]
    fn test_grade() {
        let q = question("7H 7D 7S 2C 2D KS 4H");
        assert_eq!(HandCategory::FullHouse, q.best_category);
        assert_eq!(Ok(Verdict::Correct), q.grade(Some("Full House")));
        assert_eq!(Ok(Verdict::Correct), q.grade(Some(" full house ")));
        let answer = HandCategory::FullHouse;
        assert_eq!(Ok(Verdict::Incorrect { answer }), q.grade(Some("Two Pair")));
        assert_eq!(Ok(Verdict::TimedOut { answer }), q.grade(None));
        assert_eq!(Ok(Verdict::TimedOut { answer }), q.grade(Some("")));
        assert_eq!(
            Err(HandError::UnknownCategory("Boat".to_string())),
            q.grade(Some("Boat"))
        );
    }

    #[test]
    fn test_wrong_size_question() {
        let hand = Hand::new_from_str("2H 3H 4H 5H 7C").unwrap();
        assert_eq!(
            Err(HandError::WrongCardCount {
                expected: 7,
                found: 5
            }),
            QuizQuestion::try_from(hand.cards())
        );
    }

    #[test]
    fn test_display_keys() {
        let q = question("AH 10D KS QC JD 2S 3C");
        assert_eq!(
            vec!["aH", "10D", "kS", "qC", "jD", "2S", "3C"],
            q.display_keys()
        );
        assert_eq!("aH", card_display_key(&q.cards[0]));
    }

    #[test]
    fn test_deal_is_consistent() {
        let mut generator = RngHandGenerator::new(StdRng::seed_from_u64(8)).max_attempts(500_000);
        for _ in 0..20 {
            let q = QuizQuestion::deal(&mut generator);
            assert_eq!(q.best_category, q.cards.best_hand().unwrap().category);
        }
    }

    #[test]
    fn test_generate_uniform_hand() {
        let q = generate_uniform_hand();
        assert_eq!(q.best_category, q.cards.best_hand().unwrap().category);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let q = question("AH KH QH JH 10H 2C 3D");
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(
            serde_json::json!({
                "cards": ["AH", "KH", "QH", "JH", "10H", "2C", "3D"],
                "bestCategoryName": "Royal Flush"
            }),
            json
        );
        let back: QuizQuestion = serde_json::from_value(json).unwrap();
        assert_eq!(q, back);
    }
}
