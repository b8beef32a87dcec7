use std::cmp::Ordering;

use crate::core::{Card, Hand, HandStrength, evaluate_hand};

/// How to break a tie when combination and primary value match but only
/// one of the two strengths carries a secondary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondaryTieBreak {
    /// The side that has a secondary value wins.
    #[default]
    PresentWins,
    /// A secondary value only matters when both sides have one.
    IgnoreUnmatched,
}

/// Compare two evaluated hands.
///
/// `Greater` means `a` is the better hand, `Less` means `b` is, and
/// `Equal` is a tie.
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_odds::core::{Combination, HandStrength, Value};
/// use holdem_odds::holdem::compare_hands;
///
/// let quads = HandStrength::new(Combination::FourOfAKind, Value::Two, None);
/// let trips = HandStrength::new(Combination::ThreeOfAKind, Value::Ace, None);
/// assert_eq!(Ordering::Greater, compare_hands(&quads, &trips));
/// ```
pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    compare_hands_with(a, b, SecondaryTieBreak::default())
}

/// Compare two evaluated hands, choosing how a one sided secondary value
/// is treated.
pub fn compare_hands_with(
    a: &HandStrength,
    b: &HandStrength,
    tie_break: SecondaryTieBreak,
) -> Ordering {
    a.combination
        .cmp(&b.combination)
        .then_with(|| a.primary.cmp(&b.primary))
        .then_with(|| match (a.secondary, b.secondary) {
            (Some(sa), Some(sb)) => sa.cmp(&sb),
            (Some(_), None) | (None, Some(_)) if tie_break == SecondaryTieBreak::IgnoreUnmatched => {
                Ordering::Equal
            }
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        })
}

/// Find the opponent that beats the player.
///
/// The player's hand is evaluated once and every opponent is compared
/// against it. Returns the index of the strongest opponent that strictly
/// beats the player, the first one if several are equally strong. `None`
/// means nobody beat the player; ties go to the player.
///
/// ```
/// use holdem_odds::core::{CommunityCards, Hand};
/// use holdem_odds::holdem::find_winning_opponent;
///
/// let player = Hand::new_from_str("AsAh").unwrap();
/// let opponents = vec![
///     Hand::new_from_str("2c7d").unwrap(),
///     Hand::new_from_str("KsKd").unwrap(),
/// ];
/// let board = CommunityCards::new_from_str("Kh8c3d").unwrap();
///
/// assert_eq!(Some(1), find_winning_opponent(&player, &opponents, &board));
/// ```
pub fn find_winning_opponent(
    player: &Hand,
    opponents: &[Hand],
    community: &[Card],
) -> Option<usize> {
    find_winning_opponent_with(player, opponents, community, SecondaryTieBreak::default())
}

/// `find_winning_opponent` with an explicit secondary tie break.
pub fn find_winning_opponent_with(
    player: &Hand,
    opponents: &[Hand],
    community: &[Card],
    tie_break: SecondaryTieBreak,
) -> Option<usize> {
    let player_strength = evaluate_hand(player, community);
    opponents
        .iter()
        .map(|hand| evaluate_hand(hand, community))
        .enumerate()
        .fold(
            None,
            |best: Option<(usize, HandStrength)>, (idx, strength)| {
                let beats_best = match &best {
                    Some((_, best_strength)) => {
                        compare_hands_with(&strength, best_strength, tie_break).is_gt()
                    }
                    None => compare_hands_with(&strength, &player_strength, tie_break).is_gt(),
                };
                if beats_best { Some((idx, strength)) } else { best }
            },
        )
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Combination, CommunityCards, Value};

    fn strength(c: Combination, p: Value, s: Option<Value>) -> HandStrength {
        HandStrength::new(c, p, s)
    }

    fn hands(hands: &[&str]) -> Vec<Hand> {
        hands
            .iter()
            .map(|s| Hand::new_from_str(s).unwrap())
            .collect()
    }

    #[test]
    fn test_level_wins_outright() {
        let quad_deuces = strength(Combination::FourOfAKind, Value::Two, None);
        let trip_aces = strength(Combination::ThreeOfAKind, Value::Ace, None);
        let two_pair = strength(Combination::TwoPair, Value::Ace, Some(Value::King));
        assert_eq!(Ordering::Greater, compare_hands(&quad_deuces, &trip_aces));
        assert_eq!(Ordering::Greater, compare_hands(&trip_aces, &two_pair));
        assert_eq!(Ordering::Less, compare_hands(&two_pair, &quad_deuces));
    }

    #[test]
    fn test_primary_then_secondary() {
        let kings_up = strength(Combination::TwoPair, Value::King, Some(Value::Two));
        let queens_up = strength(Combination::TwoPair, Value::Queen, Some(Value::Jack));
        let kings_threes = strength(Combination::TwoPair, Value::King, Some(Value::Three));
        assert_eq!(Ordering::Greater, compare_hands(&kings_up, &queens_up));
        assert_eq!(Ordering::Less, compare_hands(&kings_up, &kings_threes));
    }

    #[test]
    fn test_no_secondary_is_tie() {
        let a = strength(Combination::OnePair, Value::Nine, None);
        let b = strength(Combination::OnePair, Value::Nine, None);
        assert_eq!(Ordering::Equal, compare_hands(&a, &b));
    }

    #[test]
    fn test_one_sided_secondary() {
        let with = strength(Combination::OnePair, Value::Nine, Some(Value::Two));
        let without = strength(Combination::OnePair, Value::Nine, None);

        assert_eq!(Ordering::Greater, compare_hands(&with, &without));
        assert_eq!(Ordering::Less, compare_hands(&without, &with));
        assert_eq!(
            Ordering::Equal,
            compare_hands_with(&with, &without, SecondaryTieBreak::IgnoreUnmatched)
        );
        assert_eq!(
            Ordering::Equal,
            compare_hands_with(&without, &with, SecondaryTieBreak::IgnoreUnmatched)
        );
    }

    #[test]
    fn test_matches_derived_ord() {
        let all = [
            strength(Combination::HighCard, Value::Ace, None),
            strength(Combination::OnePair, Value::Two, None),
            strength(Combination::OnePair, Value::Two, Some(Value::Three)),
            strength(Combination::TwoPair, Value::Five, Some(Value::Four)),
            strength(Combination::Straight, Value::Six, None),
            strength(Combination::Flush, Value::Six, None),
            strength(Combination::FullHouse, Value::Six, Some(Value::Two)),
            strength(Combination::FourOfAKind, Value::Six, None),
        ];
        for a in &all {
            for b in &all {
                assert_eq!(a.cmp(b), compare_hands(a, b));
            }
        }
    }

    #[test]
    fn test_same_hand_is_tie() {
        let hand = Hand::new_from_str("AsAh").unwrap();
        let board = CommunityCards::new_from_str("AdKcKh2s3d").unwrap();
        let s = evaluate_hand(&hand, &board);
        assert_eq!(Ordering::Equal, compare_hands(&s, &s));
    }

    #[test]
    fn test_player_wins_returns_none() {
        let player = Hand::new_from_str("AsAh").unwrap();
        let opponents = hands(&["2c7d", "3h8s", "Qc4d"]);
        let board = CommunityCards::new_from_str("AdKcJh").unwrap();
        assert_eq!(None, find_winning_opponent(&player, &opponents, &board));
    }

    #[test]
    fn test_tie_goes_to_player() {
        // Both play the board straight.
        let player = Hand::new_from_str("2c3d").unwrap();
        let opponents = hands(&["2h3s"]);
        let board = CommunityCards::new_from_str("9sTdJhQcKs").unwrap();
        assert_eq!(None, find_winning_opponent(&player, &opponents, &board));
    }

    #[test]
    fn test_strongest_opponent_is_reported() {
        let player = Hand::new_from_str("2c3d").unwrap();
        // Pair of nines, trip kings, pair of nines again.
        let opponents = hands(&["9c4h", "KhKd", "9h5s"]);
        let board = CommunityCards::new_from_str("9sKsJh").unwrap();
        assert_eq!(Some(1), find_winning_opponent(&player, &opponents, &board));
    }

    #[test]
    fn test_first_of_equal_opponents() {
        let player = Hand::new_from_str("2c3d").unwrap();
        let opponents = hands(&["4h5h", "AhAd", "AcAs"]);
        let board = CommunityCards::new_from_str("9sKsJh").unwrap();
        assert_eq!(Some(1), find_winning_opponent(&player, &opponents, &board));
    }

    #[test]
    fn test_no_opponents() {
        let player = Hand::new_from_str("2c3d").unwrap();
        assert_eq!(None, find_winning_opponent(&player, &[], &[]));
    }
}
