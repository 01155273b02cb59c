use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Comparable strength of a five-card hand.
///
/// `ranks[0]` is the rank defining the category (quad rank, trip rank, high pair,
/// straight top card), followed by the tie-break ranks in descending order and
/// zero padded. Flush and high card carry all five ranks. Field order gives the
/// derived `Ord` its lexicographic meaning: category first, then ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandScore {
    pub category: Category,
    pub ranks: [u8; 5],
}

impl HandScore {
    pub fn primary(&self) -> u8 {
        self.ranks[0]
    }

    pub fn kickers(&self) -> &[u8] {
        &self.ranks[1..]
    }

    pub fn describe(&self) -> String {
        format!("{} ({})", self.category.name(), self.primary())
    }
}

/// Ranks exactly five distinct cards.
///
/// # Panics
///
/// Panics if the same card appears twice; a duplicated card means the deal is
/// corrupt and the hand must not be ranked.
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    for i in 0..5 {
        for j in (i + 1)..5 {
            assert!(cards[i] != cards[j], "duplicate card {} in hand", cards[i]);
        }
    }

    let mut ranks = [0u8; 5];
    for (slot, c) in ranks.iter_mut().zip(cards.iter()) {
        *slot = c.rank.value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ranks);

    if let (true, Some(high)) = (is_flush, straight) {
        return HandScore {
            category: Category::StraightFlush,
            ranks: [high, 0, 0, 0, 0],
        };
    }

    let groups = rank_groups(&ranks);
    // Grouped ranks in (count desc, rank desc) order are already the tiebreak order.
    let mut grouped = [0u8; 5];
    for (slot, &(_, r)) in grouped.iter_mut().zip(groups.iter()) {
        *slot = r;
    }
    let top = groups[0].0;
    let second = groups.get(1).map(|g| g.0).unwrap_or(0);

    let category = if top == 4 {
        Category::FourOfAKind
    } else if top == 3 && second == 2 {
        Category::FullHouse
    } else if is_flush {
        return HandScore {
            category: Category::Flush,
            ranks,
        };
    } else if let Some(high) = straight {
        return HandScore {
            category: Category::Straight,
            ranks: [high, 0, 0, 0, 0],
        };
    } else if top == 3 {
        Category::ThreeOfAKind
    } else if top == 2 && second == 2 {
        Category::TwoPair
    } else if top == 2 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    HandScore {
        category,
        ranks: grouped,
    }
}

/// Best score over every five-card subset of 5 to 7 distinct cards.
///
/// Exhaustive on purpose: seven cards are only 21 subsets.
pub fn evaluate_best(cards: &[Card]) -> Result<HandScore, GameError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(GameError::MalformedHand(format!(
            "expected 5 to 7 cards, got {}",
            n
        )));
    }
    for i in 0..n {
        if cards[(i + 1)..].contains(&cards[i]) {
            return Err(GameError::MalformedHand(format!(
                "duplicate card {}",
                cards[i]
            )));
        }
    }

    let mut best: Option<HandScore> = None;
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let score =
                            evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.is_none_or(|cur| score > cur) {
                            best = Some(score);
                        }
                    }
                }
            }
        }
    }
    best.ok_or_else(|| GameError::MalformedHand("no five-card subset".into()))
}

/// Top rank of a straight in descending `ranks`, with the wheel reporting 5.
fn straight_high(ranks: &[u8; 5]) -> Option<u8> {
    if ranks == &[14, 5, 4, 3, 2] {
        return Some(5);
    }
    let consecutive = ranks.windows(2).all(|w| w[0] == w[1] + 1);
    consecutive.then_some(ranks[0])
}

/// `(count, rank)` pairs sorted by count then rank, both descending.
fn rank_groups(ranks: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15];
    for &r in ranks {
        counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}
