#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hand_trainer;
use hand_trainer::core::Hand;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            let again = Hand::new_from_str(&h.to_string()).unwrap();
            assert_eq!(h, again);
        }
    }
});
