// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank categories, extractors, and the classifier.
use serde::{Deserialize, Serialize};
use std::fmt;

use fivecard_cards::{Card, Suit, Value};

use crate::hand::Hand;

/// The ten hand rank categories, ordered from strongest to weakest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    /// Ace high straight flush.
    RoyalFlush,
    /// Straight flush.
    StraightFlush,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
    /// Two pair.
    TwoPair,
    /// Pair.
    Pair,
    /// High card.
    HighCard,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::RoyalFlush => "Royal Flush",
            Rank::StraightFlush => "Straight Flush",
            Rank::FourOfAKind => "Four Of A Kind",
            Rank::FullHouse => "Full House",
            Rank::Flush => "Flush",
            Rank::Straight => "Straight",
            Rank::ThreeOfAKind => "Three Of A Kind",
            Rank::TwoPair => "Two Pair",
            Rank::Pair => "Pair",
            Rank::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}

/// A matched category with the values and suits that decided it.
///
/// Each variant carries exactly the parameters its description template
/// needs, the [fmt::Display] implementation renders the template:
///
/// ```
/// # use fivecard_rank::*;
/// let hand: Hand = "AH AC AD KS KH".parse().unwrap();
/// let m = classify(&hand);
/// assert_eq!(m, RankMatch::FullHouse { trips: Value::Ace, pair: Value::King });
/// assert_eq!(m.to_string(), "full house: ace over king");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMatch {
    /// Royal flush with its suit.
    RoyalFlush {
        /// The flush suit.
        suit: Suit,
    },
    /// Straight flush with its high card and suit.
    StraightFlush {
        /// The straight high card.
        high: Value,
        /// The flush suit.
        suit: Suit,
    },
    /// Four of a kind with the quads value.
    FourOfAKind {
        /// The quads value.
        value: Value,
    },
    /// Full house with the trips and pair values.
    FullHouse {
        /// The three of a kind value.
        trips: Value,
        /// The pair value.
        pair: Value,
    },
    /// Flush with its suit.
    Flush {
        /// The flush suit.
        suit: Suit,
    },
    /// Straight with its high card.
    Straight {
        /// The straight high card.
        high: Value,
    },
    /// Three of a kind with the trips value.
    ThreeOfAKind {
        /// The trips value.
        value: Value,
    },
    /// Two pair with the higher and lower pair values.
    TwoPair {
        /// The higher pair value.
        high: Value,
        /// The lower pair value.
        low: Value,
    },
    /// Pair with the paired value.
    Pair {
        /// The pair value.
        value: Value,
    },
    /// High card with the maximum value in the hand.
    HighCard {
        /// The highest card value.
        value: Value,
    },
}

impl RankMatch {
    /// The category this match belongs to.
    pub fn rank(&self) -> Rank {
        match self {
            RankMatch::RoyalFlush { .. } => Rank::RoyalFlush,
            RankMatch::StraightFlush { .. } => Rank::StraightFlush,
            RankMatch::FourOfAKind { .. } => Rank::FourOfAKind,
            RankMatch::FullHouse { .. } => Rank::FullHouse,
            RankMatch::Flush { .. } => Rank::Flush,
            RankMatch::Straight { .. } => Rank::Straight,
            RankMatch::ThreeOfAKind { .. } => Rank::ThreeOfAKind,
            RankMatch::TwoPair { .. } => Rank::TwoPair,
            RankMatch::Pair { .. } => Rank::Pair,
            RankMatch::HighCard { .. } => Rank::HighCard,
        }
    }
}

impl fmt::Display for RankMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMatch::RoyalFlush { suit } => write!(f, "royal flush: {suit}"),
            RankMatch::StraightFlush { high, suit } => {
                write!(f, "straight flush: {high}-high {suit}")
            }
            RankMatch::FourOfAKind { value } => write!(f, "four of a kind: {value}"),
            RankMatch::FullHouse { trips, pair } => {
                write!(f, "full house: {trips} over {pair}")
            }
            RankMatch::Flush { suit } => write!(f, "flush: {suit}"),
            RankMatch::Straight { high } => write!(f, "straight: {high}-high"),
            RankMatch::ThreeOfAKind { value } => write!(f, "three of a kind: {value}"),
            RankMatch::TwoPair { high, low } => write!(f, "two pair: {high} and {low}"),
            RankMatch::Pair { value } => write!(f, "pair: {value}"),
            RankMatch::HighCard { value } => write!(f, "high card: {value}"),
        }
    }
}

/// A classified hand with its rank and rendered description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedHand {
    cards: [Card; 5],
    rank: Rank,
    description: String,
}

impl RankedHand {
    /// The cards of the classified hand.
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }

    /// The hand rank category.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The rendered hand description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// A category extractor, returns the match parameters if the hand
/// satisfies the category.
type Extractor = fn(&Hand, &[(Value, usize)]) -> Option<RankMatch>;

/// The extractors in descending strength order, the classifier picks the
/// first that matches. Several raw conditions overlap, a full house profile
/// also starts with a trips entry, so the order is load bearing.
const EXTRACTORS: [Extractor; 10] = [
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    pair,
    high_card,
];

/// Classifies a hand into its strongest matching category.
pub fn classify(hand: &Hand) -> RankMatch {
    let counts = hand.value_counts();
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(hand, &counts))
        .unwrap_or_else(|| unreachable!("high card matches every hand"))
}

/// Classifies a hand and renders its description.
pub fn rank_hand(hand: &Hand) -> RankedHand {
    let m = classify(hand);
    RankedHand {
        cards: hand.cards(),
        rank: m.rank(),
        description: m.to_string(),
    }
}

fn royal_flush(hand: &Hand, _counts: &[(Value, usize)]) -> Option<RankMatch> {
    use Value::*;

    let suit = hand.flush_suit()?;
    let mut values = hand.cards().map(|c| c.value());
    values.sort_unstable();

    (values == [Ten, Jack, Queen, King, Ace]).then_some(RankMatch::RoyalFlush { suit })
}

fn straight_flush(hand: &Hand, _counts: &[(Value, usize)]) -> Option<RankMatch> {
    let suit = hand.flush_suit()?;
    let high = hand.straight_high()?;
    Some(RankMatch::StraightFlush { high, suit })
}

fn four_of_a_kind(_hand: &Hand, counts: &[(Value, usize)]) -> Option<RankMatch> {
    (counts[0].1 == 4).then_some(RankMatch::FourOfAKind { value: counts[0].0 })
}

fn full_house(_hand: &Hand, counts: &[(Value, usize)]) -> Option<RankMatch> {
    (counts[0].1 == 3 && counts[1].1 == 2).then_some(RankMatch::FullHouse {
        trips: counts[0].0,
        pair: counts[1].0,
    })
}

fn flush(hand: &Hand, _counts: &[(Value, usize)]) -> Option<RankMatch> {
    match (hand.flush_suit(), hand.straight_high()) {
        (Some(suit), None) => Some(RankMatch::Flush { suit }),
        _ => None,
    }
}

fn straight(hand: &Hand, _counts: &[(Value, usize)]) -> Option<RankMatch> {
    match (hand.straight_high(), hand.flush_suit()) {
        (Some(high), None) => Some(RankMatch::Straight { high }),
        _ => None,
    }
}

fn three_of_a_kind(_hand: &Hand, counts: &[(Value, usize)]) -> Option<RankMatch> {
    (counts[0].1 == 3 && counts[1].1 == 1 && counts[2].1 == 1)
        .then_some(RankMatch::ThreeOfAKind { value: counts[0].0 })
}

fn two_pair(_hand: &Hand, counts: &[(Value, usize)]) -> Option<RankMatch> {
    (counts[0].1 == 2 && counts[1].1 == 2).then_some(RankMatch::TwoPair {
        high: counts[0].0.max(counts[1].0),
        low: counts[0].0.min(counts[1].0),
    })
}

fn pair(_hand: &Hand, counts: &[(Value, usize)]) -> Option<RankMatch> {
    (counts[0].1 == 2 && counts[1].1 == 1).then_some(RankMatch::Pair { value: counts[0].0 })
}

fn high_card(hand: &Hand, _counts: &[(Value, usize)]) -> Option<RankMatch> {
    hand.cards()
        .iter()
        .map(|c| c.value())
        .max()
        .map(|value| RankMatch::HighCard { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use fivecard_cards::Deck;
    use rand::prelude::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn rank_display() {
        assert_eq!(Rank::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(Rank::FourOfAKind.to_string(), "Four Of A Kind");
        assert_eq!(Rank::HighCard.to_string(), "High Card");
    }

    #[test]
    fn rank_ordering() {
        assert!(Rank::RoyalFlush < Rank::StraightFlush);
        assert!(Rank::FullHouse < Rank::Flush);
        assert!(Rank::Pair < Rank::HighCard);
    }

    #[test]
    fn classify_examples() {
        let cases = [
            ("AH KH QH JH 10H", Rank::RoyalFlush, "royal flush: hearts"),
            (
                "6H 7H 8H 9H 10H",
                Rank::StraightFlush,
                "straight flush: 10-high hearts",
            ),
            ("AH AC AD AS KH", Rank::FourOfAKind, "four of a kind: ace"),
            ("AH AC AD KS KH", Rank::FullHouse, "full house: ace over king"),
            ("KC 10C 8C 7C 5C", Rank::Flush, "flush: clubs"),
            ("10H 9C 8D 7S 6H", Rank::Straight, "straight: 10-high"),
            (
                "AH AC AD KS QH",
                Rank::ThreeOfAKind,
                "three of a kind: ace",
            ),
            ("AH AC KD KS 7H", Rank::TwoPair, "two pair: ace and king"),
            ("AH AC KD JS 7H", Rank::Pair, "pair: ace"),
            ("AH KC QD 9S 7H", Rank::HighCard, "high card: ace"),
        ];

        for (cards, rank, description) in cases {
            let ranked = rank_hand(&hand(cards));
            assert_eq!(ranked.rank(), rank, "hand {cards}");
            assert_eq!(ranked.description(), description, "hand {cards}");
        }
    }

    #[test]
    fn ace_low_straights() {
        let m = classify(&hand("AH 2C 3D 4S 5H"));
        assert_eq!(m, RankMatch::Straight { high: Value::Five });
        assert_eq!(m.to_string(), "straight: 5-high");

        let m = classify(&hand("AH 2H 3H 4H 5H"));
        assert_eq!(
            m,
            RankMatch::StraightFlush {
                high: Value::Five,
                suit: Suit::Hearts
            }
        );
        assert_eq!(m.to_string(), "straight flush: 5-high hearts");
    }

    #[test]
    fn broadway_precedence() {
        // Same suit is a royal flush, never a straight flush.
        let m = classify(&hand("AH KH QH JH 10H"));
        assert_eq!(m, RankMatch::RoyalFlush { suit: Suit::Hearts });

        // Mixed suits is a straight, not a flush.
        let m = classify(&hand("AH KC QD JS 10H"));
        assert_eq!(m, RankMatch::Straight { high: Value::Ace });
    }

    #[test]
    fn flush_straight_overlap() {
        // A straight flush is neither a plain flush nor a plain straight.
        let m = classify(&hand("2H 3H 4H 5H 6H"));
        assert_eq!(m.rank(), Rank::StraightFlush);

        // A flush that is not a run stays a flush.
        let m = classify(&hand("2H 3H 4H 5H 7H"));
        assert_eq!(m, RankMatch::Flush { suit: Suit::Hearts });
    }

    #[test]
    fn trips_profile_overlap() {
        // Trips plus a pair is a full house, never a three of a kind.
        let m = classify(&hand("2C 2D 2H 3S 3D"));
        assert_eq!(
            m,
            RankMatch::FullHouse {
                trips: Value::Two,
                pair: Value::Three
            }
        );

        // Trips with two kickers stays a three of a kind.
        let m = classify(&hand("2C 2D 2H AS 3D"));
        assert_eq!(m, RankMatch::ThreeOfAKind { value: Value::Two });
    }

    #[test]
    fn pair_profile_overlap() {
        // Two pairs report high and low pair values.
        let m = classify(&hand("KD KS AH AC 7H"));
        assert_eq!(
            m,
            RankMatch::TwoPair {
                high: Value::Ace,
                low: Value::King
            }
        );

        // A single pair with three kickers.
        let m = classify(&hand("2C 2D KH AS 3D"));
        assert_eq!(m, RankMatch::Pair { value: Value::Two });
    }

    #[test]
    fn card_order_does_not_matter() {
        let mut rng = rand::rng();
        let hands = [
            "AH KH QH JH 10H",
            "AH 2C 3D 4S 5H",
            "AH AC AD KS KH",
            "AH AC KD KS 7H",
            "AH KC QD 9S 7H",
        ];

        for cards in hands {
            let expected = rank_hand(&hand(cards));

            let mut shuffled = hand(cards).cards();
            for _ in 0..10 {
                shuffled.shuffle(&mut rng);
                let ranked = rank_hand(&Hand::new(shuffled).unwrap());
                assert_eq!(ranked.rank(), expected.rank());
                assert_eq!(ranked.description(), expected.description());
            }
        }
    }

    #[test]
    fn category_frequencies() {
        // Classify all C(52,5) hands and check the category counts against
        // the known five cards poker frequencies.
        let mut counts = AHashMap::new();
        Deck::default().for_each_five(|cards| {
            let ranked = classify(&Hand::new(cards).unwrap());
            *counts.entry(ranked.rank()).or_insert(0u32) += 1;
        });

        assert_eq!(counts[&Rank::RoyalFlush], 4);
        assert_eq!(counts[&Rank::StraightFlush], 36);
        assert_eq!(counts[&Rank::FourOfAKind], 624);
        assert_eq!(counts[&Rank::FullHouse], 3_744);
        assert_eq!(counts[&Rank::Flush], 5_108);
        assert_eq!(counts[&Rank::Straight], 10_200);
        assert_eq!(counts[&Rank::ThreeOfAKind], 54_912);
        assert_eq!(counts[&Rank::TwoPair], 123_552);
        assert_eq!(counts[&Rank::Pair], 1_098_240);
        assert_eq!(counts[&Rank::HighCard], 1_302_540);
        assert_eq!(counts.values().sum::<u32>(), 2_598_960);
    }
}
