// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard playing cards types.
//!
//! This crate defines the [Card], [Value], and [Suit] types and the compact
//! text notation used to exchange cards with clients:
//!
//! ```
//! # use fivecard_cards::{Card, Suit, Value};
//! let card: Card = "10H".parse().unwrap();
//! assert_eq!(card, Card::new(Value::Ten, Suit::Hearts));
//! assert_eq!(card.to_string(), "10H");
//! ```
//!
//! and a [Deck] type for dealing random cards:
//!
//! ```
//! # use fivecard_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let cards = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();
//! assert_eq!(cards.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, ParseCardError, Suit, Value};
