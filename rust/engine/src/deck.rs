use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Supplies the shuffle permutation for a [`Deck`].
///
/// Injected so that tests and replays can fix the card order.
pub trait RandomSource {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Default source: a ChaCha20 stream seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: ChaCha20Rng,
}

impl SeededShuffle {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededShuffle {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    source: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_source(Box::new(SeededShuffle::new(seed)))
    }

    pub fn with_source(source: Box<dyn RandomSource>) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            source,
        }
    }

    /// Restores all 52 cards and permutes them. Only called between hands.
    pub fn shuffle(&mut self) {
        self.reset();
        self.source.shuffle(&mut self.cards);
    }

    /// Next undrawn card, or `None` once all 52 have been dealt.
    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn burn_card(&mut self) -> Option<Card> {
        self.deal_card()
    }

    /// Back to 52 cards in unshuffled order.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
