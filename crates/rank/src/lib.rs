// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard poker hand classifier.
//!
//! Classifies a five cards poker hand into one of the ten standard rank
//! categories and renders a description parameterized with the deciding
//! values and suits.
//!
//! To classify a hand parse it from the compact notation, or build it from
//! [Card] values, and call [rank_hand]:
//!
//! ```
//! # use fivecard_rank::*;
//! let hand: Hand = "AH KH QH JH 10H".parse().unwrap();
//! let ranked = rank_hand(&hand);
//! assert_eq!(ranked.rank(), Rank::RoyalFlush);
//! assert_eq!(ranked.description(), "royal flush: hearts");
//! ```
//!
//! Classification is a pure function of the hand, calls share no state and
//! may run concurrently without coordination.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub mod rank;

pub use hand::{Hand, HandError};
pub use rank::{Rank, RankMatch, RankedHand, classify, rank_hand};

// Reexport cards types.
pub use fivecard_cards::{Card, Deck, ParseCardError, Suit, Value};
