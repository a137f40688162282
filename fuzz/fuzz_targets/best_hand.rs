#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hand_trainer;
use hand_trainer::core::{Card, CardIter, HandError, Rankable};

fuzz_target!(|cards: [Card; 7]| {
    match cards.best_hand() {
        Ok(best) => {
            let max_five = CardIter::new(&cards, 5)
                .map(|five| five.rank_five().unwrap().category)
                .max()
                .unwrap();
            assert_eq!(max_five, best.category);
            assert_eq!(best.category, best.cards.rank_five().unwrap().category);
        }
        Err(HandError::DuplicateCard(c)) => {
            assert!(cards.iter().filter(|x| **x == c).count() > 1);
        }
        Err(e) => panic!("unexpected error {e}"),
    }
});
