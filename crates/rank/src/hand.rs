// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand type and derived hand shape helpers.
use ahash::{AHashMap, AHashSet};
use std::{fmt, str::FromStr};

use fivecard_cards::{Card, ParseCardError, Suit, Value};

/// An unordered hand of five distinct cards.
///
/// Construction validates the five cards invariant, once built a hand is
/// immutable and always valid:
///
/// ```
/// # use fivecard_rank::{Hand, HandError};
/// let hand: Hand = "2H 3D 5S 10C KD".parse().unwrap();
///
/// let err = "2H 3D 5S 10C".parse::<Hand>();
/// assert!(matches!(err, Err(HandError::WrongCount(4))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// Creates a hand from five distinct cards.
    pub fn new(cards: [Card; 5]) -> Result<Self, HandError> {
        let mut seen = AHashSet::with_capacity(cards.len());
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }

        Ok(Self { cards })
    }

    /// The cards in this hand.
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }

    /// Groups the hand values by frequency.
    ///
    /// Returns the values sorted by count descending then value descending,
    /// so the most frequent value comes first and ties go to the higher
    /// value. Pair based categories are detected from the first entries of
    /// this profile.
    pub fn value_counts(&self) -> Vec<(Value, usize)> {
        let mut counts = AHashMap::with_capacity(self.cards.len());
        for card in &self.cards {
            *counts.entry(card.value()).or_insert(0usize) += 1;
        }

        let mut counts = counts.into_iter().collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        counts
    }

    /// Returns the suit shared by all five cards, if any.
    pub fn flush_suit(&self) -> Option<Suit> {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit).then_some(suit)
    }

    /// Returns the high card of a five values run, if any.
    ///
    /// The ace low straight 2-3-4-5-A counts with [Value::Five] as its high
    /// card, any other run of five consecutive values counts with its
    /// maximum. Duplicate values never form a straight.
    pub fn straight_high(&self) -> Option<Value> {
        use Value::*;

        let mut values = self.cards.map(|c| c.value());
        values.sort_unstable();

        if values == [Two, Three, Four, Five, Ace] {
            return Some(Five);
        }

        values
            .windows(2)
            .all(|w| w[1] as u8 == w[0] as u8 + 1)
            .then_some(values[4])
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| HandError::WrongCount(cards.len()))?;
        Self::new(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses five whitespace separated cards, e.g. `"2H 3D 5S 10C KD"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, ParseCardError>>()?;
        Self::try_from(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.cards.iter();
        if let Some(card) = cards.next() {
            write!(f, "{card}")?;
        }
        for card in cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// A hand construction error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    /// The hand does not have exactly five cards.
    #[error("hand must have five cards, got {0}")]
    WrongCount(usize),
    /// Two cards in the hand have the same value and suit.
    #[error("hand contains duplicate card {0}")]
    DuplicateCard(Card),
    /// A card token could not be parsed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}
