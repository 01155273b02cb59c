//! # holdem-engine: Six-seat Texas Hold'em core
//!
//! Deals and settles hands for two to six seats: hand evaluation, the
//! betting-round state machine, table bookkeeping and the hand orchestrator.
//! Decisions come from [`provider::ActionProvider`] implementations, so humans,
//! AIs and scripted tests all drive the same engine.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffling through an injectable [`deck::RandomSource`]
//! - [`hand`] - Five to seven card evaluation into a totally ordered score
//! - [`player`] - Seats, actions and per-street seat status
//! - [`table`] - Shared table state: seats, board, pot, current bet
//! - [`rules`] - Legal actions and action validation
//! - [`betting`] - One betting street, including reopening after raises
//! - [`pot`] - Splitting a pot between tied winners
//! - [`engine`] - Hand orchestration from deal to payout
//! - [`provider`] - Decision and presentation interfaces
//! - [`config`] - Table configuration
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_best, Category};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//!
//! let score = evaluate_best(&cards).unwrap();
//! assert_eq!(score.category, Category::StraightFlush);
//! assert_eq!(score.primary(), 14);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles are reproducible from a seed:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal_card(), b.deal_card());
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod provider;
pub mod rules;
pub mod table;
