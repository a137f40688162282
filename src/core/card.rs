use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use super::HandError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Anything above 12 wraps around, so `Value::from_u8(13)` is a two.
    ///
    /// ```
    /// use hand_trainer::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::from_u8(0));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v) % VALUES.len()]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Parse a single character value. Ten is written `T` here;
    /// use `Value::from_token` to accept `10` as well.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Parse a value token as written on a card identifier.
    ///
    /// ```
    /// use hand_trainer::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_token("10"));
    /// assert_eq!(Some(Value::Ace), Value::from_token("A"));
    /// assert_eq!(None, Value::from_token("1"));
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "10" {
            return Some(Self::Ten);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// The canonical token for this value, `"2"` through `"10"` then
    /// `"J"`, `"Q"`, `"K"`, `"A"`.
    pub fn to_token(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Token used for card image assets. Faces are lower case,
    /// numbers keep their decimal form.
    pub fn display_token(self) -> &'static str {
        match self {
            Self::Jack => "j",
            Self::Queen => "q",
            Self::King => "k",
            Self::Ace => "a",
            _ => self.to_token(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_token())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_uppercase() {
            'H' => Some(Self::Heart),
            'D' => Some(Self::Diamond),
            'C' => Some(Self::Club),
            'S' => Some(Self::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Heart => 'H',
            Self::Diamond => 'D',
            Self::Club => 'C',
            Self::Spade => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The key used to look up this card's image asset.
    ///
    /// ```
    /// use hand_trainer::core::{Card, Suit, Value};
    ///
    /// assert_eq!("aH", Card::new(Value::Ace, Suit::Heart).display_key());
    /// assert_eq!("10D", Card::new(Value::Ten, Suit::Diamond).display_key());
    /// ```
    pub fn display_key(&self) -> String {
        format!("{}{}", self.value.display_token(), self.suit.to_char())
    }

    /// Read one card off the front of `chars`.
    ///
    /// The value may be written `10` or `T`. Used by both the single
    /// card parser and `Hand::new_from_str`.
    pub(crate) fn parse_next(chars: &mut Peekable<Chars<'_>>) -> Result<Self, HandError> {
        let first = chars.next().ok_or(HandError::TooFewChars)?;
        let value = if first == '1' {
            match chars.next() {
                Some('0') => Value::Ten,
                Some(_) => return Err(HandError::UnexpectedValueChar),
                None => return Err(HandError::TooFewChars),
            }
        } else {
            Value::from_char(first).ok_or(HandError::UnexpectedValueChar)?
        };
        let suit = chars
            .next()
            .ok_or(HandError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(HandError::UnexpectedSuitChar))?;
        Ok(Self { value, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = HandError;

    /// Parse a card identifier such as `"AH"` or `"10D"`.
    ///
    /// ```
    /// use hand_trainer::core::{Card, HandError, Suit, Value};
    ///
    /// let card: Card = "10D".parse().unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
    /// assert_eq!(Err(HandError::UnexpectedSuitChar), "AX".parse::<Card>());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().peekable();
        let card = Self::parse_next(&mut chars)?;
        if chars.next().is_some() {
            return Err(HandError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}

impl TryFrom<&str> for Card {
    type Error = HandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Cards are dense in the range 0..52, value major.
impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Self {
            value: Value::from_u8(value / 4),
            suit: SUITS[usize::from(value % 4)],
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
struct CardVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for CardVisitor {
    type Value = Card;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a card identifier like \"AH\" or \"10D\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(CardVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        assert!(c1 == c1);
        // Values dominate the ordering
        assert!(c1 < c2);
        assert!(c2 > c1);
        assert!(c3 != c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Value::Two, Value::from_u8(0));
        assert_eq!(Value::Ace, Value::from_u8(12));
        for i in 0..52u8 {
            assert_eq!(i, u8::from(Card::from(i)));
        }
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(Ok(Card::new(Value::Ace, Suit::Heart)), "AH".parse());
        assert_eq!(Ok(Card::new(Value::Ten, Suit::Diamond)), "10D".parse());
        assert_eq!(Ok(Card::new(Value::Ten, Suit::Club)), "Tc".parse());
        assert_eq!(Ok(Card::new(Value::Two, Suit::Spade)), "2s".parse());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(HandError::TooFewChars), "".parse::<Card>());
        assert_eq!(Err(HandError::TooFewChars), "A".parse::<Card>());
        assert_eq!(Err(HandError::TooFewChars), "1".parse::<Card>());
        assert_eq!(Err(HandError::UnexpectedValueChar), "1H".parse::<Card>());
        assert_eq!(Err(HandError::UnexpectedValueChar), "XH".parse::<Card>());
        assert_eq!(Err(HandError::UnexpectedSuitChar), "AZ".parse::<Card>());
        assert_eq!(
            Err(HandError::UnparsedCharsRemaining),
            "AHK".parse::<Card>()
        );
    }

    #[test]
    fn test_round_trip_all() {
        for i in 0..52u8 {
            let card = Card::from(i);
            let s = card.to_string();
            assert_eq!(Ok(card), s.parse::<Card>(), "{s}");
        }
    }

    #[test]
    fn test_display_key() {
        assert_eq!("aH", Card::try_from("AH").unwrap().display_key());
        assert_eq!("10D", Card::try_from("10D").unwrap().display_key());
        assert_eq!("kS", Card::try_from("KS").unwrap().display_key());
        assert_eq!("7C", Card::try_from("7C").unwrap().display_key());

        let keys: HashSet<String> = (0..52u8).map(|i| Card::from(i).display_key()).collect();
        assert_eq!(52, keys.len());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let card = Card::new(Value::Ten, Suit::Heart);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!("\"10H\"", json);
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
        assert!(serde_json::from_str::<Card>("\"1H\"").is_err());
    }
}
