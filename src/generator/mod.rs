//! Deal seven card hands whose best five card hand is a chosen category.
//!
//! Random hands are heavily skewed towards high cards and pairs; a royal
//! flush shows up in roughly one of every 30,000 seven card hands. For
//! training, every category should come up equally often, so the
//! generator first picks a category uniformly and then rejection samples
//! freshly shuffled decks until one deals a hand of that category.
//!
//! Sampling is bounded by `max_attempts`. When the bound is hit the last
//! hand dealt is returned as is, and [`GeneratedHand::is_exact`] reports
//! that it missed the target. That is a degraded result, not an error.
//!
//! ```
//! use hand_trainer::core::HandCategory;
//! use hand_trainer::generator::HandGenerator;
//!
//! let mut generator = HandGenerator::default();
//! let hand = generator.generate_with_target(HandCategory::FullHouse);
//! assert!(hand.is_exact());
//! assert_eq!(HandCategory::FullHouse, hand.category);
//! ```
mod config;

pub use self::config::GeneratorConfig;

use rand::rngs::ThreadRng;
use rand::{Rng, rng};
use tracing::{event, trace_span};

use crate::core::{Card, Deck, HandCategory, best_of_seven};

/// A seven card hand produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedHand {
    /// The seven cards in the order they were dealt.
    pub cards: [Card; 7],
    /// The best category these cards actually make.
    pub category: HandCategory,
    /// The category that was asked for.
    pub target: HandCategory,
    /// How many hands were dealt to get here.
    pub attempts: usize,
}

impl GeneratedHand {
    /// Did the generator find a hand of the requested category?
    ///
    /// When this is false the attempt limit was hit and `category`
    /// is whatever the last hand dealt happened to make.
    pub fn is_exact(&self) -> bool {
        self.category == self.target
    }
}

/// # HandGenerator
///
/// `RngHandGenerator` deals hands with a caller supplied rng, which makes
/// runs reproducible when a seeded rng is used. `HandGenerator` is a type
/// alias for `RngHandGenerator<ThreadRng>` which is the default.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use hand_trainer::generator::RngHandGenerator;
///
/// let mut generator = RngHandGenerator::new(StdRng::seed_from_u64(420)).max_attempts(500_000);
/// let hand = generator.generate_uniform();
/// assert_eq!(7, hand.cards.len());
/// ```
#[derive(Debug, Clone)]
pub struct RngHandGenerator<R: Rng> {
    rng: R,
    config: GeneratorConfig,
}

impl<R: Rng> RngHandGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
        }
    }

    /// Replace the rng used to shuffle decks and pick targets.
    pub fn rng(mut self, rng: R) -> Self {
        self.rng = rng;
        self
    }

    /// Cap the number of hands dealt per request.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn current_config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Deal seven cards off the front of a freshly shuffled deck and
    /// find their best category.
    fn deal_one(&mut self) -> ([Card; 7], HandCategory) {
        let deck = Deck::new_shuffled(&mut self.rng);
        let cards: [Card; 7] = std::array::from_fn(|i| deck[i]);
        (cards, best_of_seven(&cards).category)
    }

    /// Rejection sample until a hand of `target` comes up, or the attempt
    /// limit is hit. In the latter case the last hand dealt is returned.
    ///
    /// A limit of zero still deals a single hand.
    pub fn generate_with_target(&mut self, target: HandCategory) -> GeneratedHand {
        let _span = trace_span!("generate_with_target", %target).entered();
        let max_attempts = self.config.max_attempts.max(1);

        let mut attempts = 0;
        loop {
            attempts += 1;
            let (cards, category) = self.deal_one();

            if category == target {
                event!(tracing::Level::DEBUG, %target, attempts, "Found target hand");
                return GeneratedHand {
                    cards,
                    category,
                    target,
                    attempts,
                };
            }

            if attempts >= max_attempts {
                event!(
                    tracing::Level::WARN,
                    %target,
                    %category,
                    attempts,
                    "Attempt limit hit, returning last hand dealt"
                );
                return GeneratedHand {
                    cards,
                    category,
                    target,
                    attempts,
                };
            }
        }
    }

    /// Pick a category uniformly at random then deal a hand of it.
    pub fn generate_uniform(&mut self) -> GeneratedHand {
        let categories = HandCategory::all();
        let target = categories[self.rng.random_range(0..categories.len())];
        event!(tracing::Level::TRACE, %target, "Picked target category");
        self.generate_with_target(target)
    }
}

impl Default for RngHandGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new(rng())
    }
}

/// The rng is ThreadRng.
pub type HandGenerator = RngHandGenerator<ThreadRng>;

/// Deal a hand of `target` using the thread rng, trying at most
/// `max_attempts` hands. See [`RngHandGenerator::generate_with_target`].
pub fn generate_with_target(target: HandCategory, max_attempts: usize) -> GeneratedHand {
    HandGenerator::default()
        .max_attempts(max_attempts)
        .generate_with_target(target)
}

/// Deal a hand of a uniformly chosen category using the thread rng.
pub fn generate_uniform() -> GeneratedHand {
    HandGenerator::default().generate_uniform()
}
