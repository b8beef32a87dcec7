use std::fmt;

use super::OddsError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
    /// T
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

/// Display names, indexed by `Value as usize`.
const VALUE_NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

impl Value {
    /// Take a u8 in `0..13` and convert it to a value.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a valid value index.
    pub fn from_u8(v: u8) -> Value {
        VALUES[v as usize]
    }

    /// Get all of the `Value`'s that are possible.
    /// Ordered from `Two` up to `Ace`.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The single char used when parsing. `T` for ten.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALUE_NAMES[*self as usize])
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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

/// Display symbols, indexed by `Suit as usize`.
const SUIT_SYMBOLS: [&str; 4] = ["\u{2665}", "\u{2666}", "\u{2663}", "\u{2660}"];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Take a u8 in `0..4` and convert it to a suit.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid suit index.
    pub fn from_u8(s: u8) -> Suit {
        SUITS[s as usize]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'h' | 'H' => Some(Suit::Heart),
            'd' | 'D' => Some(Suit::Diamond),
            'c' | 'C' => Some(Suit::Club),
            's' | 'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
            Suit::Spade => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SUIT_SYMBOLS[*self as usize])
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Dense index of a card. Cards are laid out value major,
/// so `2h 2d 2c 2s 3h ...` map to `0 1 2 3 4 ...`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

/// Inverse of the dense index.
///
/// # Panics
///
/// Panics if `idx` is not below 52.
impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = OddsError;

    /// Parse a two char card like `As` or `Td`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let v = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(OddsError::UnexpectedValueChar)?;
        let s = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(OddsError::UnexpectedSuitChar)?;
        if chars.next().is_some() {
            return Err(OddsError::UnparsedCharsRemaining);
        }
        Ok(Card::new(v, s))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}{} ]", self.value, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
        let c2 = Card::new(Value::Four, Suit::Heart);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
        assert_ne!(c2, c3);
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
        assert_eq!(Suit::Spade, Suit::from_u8(3));
    }

    #[test]
    fn test_dense_index() {
        for idx in 0..52u8 {
            let card = Card::from(idx);
            assert_eq!(idx, u8::from(card));
        }
        assert_eq!(Card::new(Value::Two, Suit::Heart), Card::from(0));
        assert_eq!(Card::new(Value::Ace, Suit::Spade), Card::from(51));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Card::new(Value::Ten, Suit::Diamond),
            Card::try_from("Td").unwrap()
        );
        assert!(matches!(
            Card::try_from("Xd"),
            Err(OddsError::UnexpectedValueChar)
        ));
        assert!(matches!(
            Card::try_from("Ax"),
            Err(OddsError::UnexpectedSuitChar)
        ));
        assert!(matches!(Card::try_from("A"), Err(OddsError::TooFewChars)));
        assert!(matches!(
            Card::try_from("Ahh"),
            Err(OddsError::UnparsedCharsRemaining)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!("[ 10\u{2666} ]", Card::new(Value::Ten, Suit::Diamond).to_string());
        assert_eq!("[ A\u{2660} ]", Card::new(Value::Ace, Suit::Spade).to_string());
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
