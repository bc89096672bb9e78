// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard CLI.
//!
//! Ranks a five cards hand given in compact notation, or deals and ranks a
//! random hand with `--deal`.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use fivecard_rank::{Deck, Hand, rank_hand};

#[derive(Debug, Parser)]
struct Cli {
    /// Five cards in compact notation, e.g. `AH KD 10C 7S 2H`.
    #[clap(required_unless_present = "deal")]
    cards: Vec<String>,
    /// Deal and rank a random hand.
    #[clap(long, conflicts_with = "cards")]
    deal: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let hand = if cli.deal {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let cards = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();
        Hand::try_from(cards)?
    } else {
        cli.cards.join(" ").parse::<Hand>()?
    };

    let ranked = rank_hand(&hand);
    println!("{hand} -> {}", ranked.description());

    Ok(())
}
