use super::{Card, CardBitSet, OddsError, Suit, Value};

/// Parse a run of two char cards such as `AsKd Th`.
///
/// Whitespace and commas between cards are ignored. A card that shows up
/// twice is an error.
///
/// ```
/// use holdem_odds::core::{Card, Suit, Value, parse_cards};
///
/// let cards = parse_cards("Ad, Kc Kh").unwrap();
/// assert_eq!(3, cards.len());
/// assert_eq!(Card::new(Value::King, Suit::Heart), cards[2]);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, OddsError> {
    let mut chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',');
    let mut seen = CardBitSet::new();
    let mut cards = Vec::new();

    // Keep looping until we run out of value chars
    while let Some(vc) = chars.next() {
        let sc = chars.next().ok_or(OddsError::TooFewChars)?;
        let value = Value::from_char(vc).ok_or(OddsError::UnexpectedValueChar)?;
        let suit = Suit::from_char(sc).ok_or(OddsError::UnexpectedSuitChar)?;
        let card = Card::new(value, suit);

        if !seen.insert(card) {
            return Err(OddsError::DuplicateCard(card));
        }
        cards.push(card);
    }
    Ok(cards)
}
