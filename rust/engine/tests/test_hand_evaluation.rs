use holdem_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use holdem_engine::errors::GameError;
use holdem_engine::hand::{evaluate_best, evaluate_five, Category};

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

#[test]
fn six_high_straight_flush() {
    let s = evaluate_five(&[
        c(R::Two, S::Diamonds),
        c(R::Three, S::Diamonds),
        c(R::Four, S::Diamonds),
        c(R::Five, S::Diamonds),
        c(R::Six, S::Diamonds),
    ]);
    assert_eq!(s.category, Category::StraightFlush);
    assert_eq!(s.primary(), 6);
}

#[test]
fn wheel_straight_flush_is_five_high() {
    let wheel = evaluate_five(&[
        c(R::Ace, S::Clubs),
        c(R::Two, S::Clubs),
        c(R::Three, S::Clubs),
        c(R::Four, S::Clubs),
        c(R::Five, S::Clubs),
    ]);
    assert_eq!(wheel.category, Category::StraightFlush);
    assert_eq!(wheel.primary(), 5);

    let six_high = evaluate_five(&[
        c(R::Two, S::Hearts),
        c(R::Three, S::Hearts),
        c(R::Four, S::Hearts),
        c(R::Five, S::Hearts),
        c(R::Six, S::Hearts),
    ]);
    assert!(six_high > wheel);
}

#[test]
fn trips_carry_kickers_high_first() {
    let s = evaluate_five(&[
        c(R::Seven, S::Spades),
        c(R::Seven, S::Hearts),
        c(R::Seven, S::Diamonds),
        c(R::Two, S::Clubs),
        c(R::Nine, S::Spades),
    ]);
    assert_eq!(s.category, Category::ThreeOfAKind);
    assert_eq!(s.primary(), 7);
    assert_eq!(s.kickers(), &[9, 2, 0, 0]);
}

#[test]
fn category_ladder_is_ordered() {
    let high = evaluate_five(&[
        c(R::Ace, S::Spades),
        c(R::Jack, S::Hearts),
        c(R::Nine, S::Diamonds),
        c(R::Five, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let pair = evaluate_five(&[
        c(R::Two, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Nine, S::Diamonds),
        c(R::Five, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let two_pair = evaluate_five(&[
        c(R::Two, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Three, S::Diamonds),
        c(R::Five, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let straight = evaluate_five(&[
        c(R::Ace, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Three, S::Diamonds),
        c(R::Four, S::Clubs),
        c(R::Five, S::Spades),
    ]);
    let flush = evaluate_five(&[
        c(R::Two, S::Hearts),
        c(R::Four, S::Hearts),
        c(R::Six, S::Hearts),
        c(R::Eight, S::Hearts),
        c(R::Ten, S::Hearts),
    ]);
    let boat = evaluate_five(&[
        c(R::Two, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Two, S::Diamonds),
        c(R::Three, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let quads = evaluate_five(&[
        c(R::Two, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Two, S::Diamonds),
        c(R::Two, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let ladder = [high, pair, two_pair, straight, flush, boat, quads];
    for w in ladder.windows(2) {
        assert!(w[0] < w[1], "{:?} should lose to {:?}", w[0], w[1]);
    }
    assert_eq!(two_pair.ranks, [3, 2, 5, 0, 0]);
    assert_eq!(boat.ranks, [2, 3, 0, 0, 0]);
}

#[test]
fn kicker_decides_between_equal_pairs() {
    let ace_kicker = evaluate_five(&[
        c(R::King, S::Spades),
        c(R::King, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::Five, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let queen_kicker = evaluate_five(&[
        c(R::King, S::Diamonds),
        c(R::King, S::Clubs),
        c(R::Queen, S::Diamonds),
        c(R::Five, S::Hearts),
        c(R::Three, S::Hearts),
    ]);
    assert!(ace_kicker > queen_kicker);
}

#[test]
fn suits_never_break_ties() {
    let a = evaluate_five(&[
        c(R::Ace, S::Spades),
        c(R::King, S::Hearts),
        c(R::Nine, S::Diamonds),
        c(R::Five, S::Clubs),
        c(R::Three, S::Spades),
    ]);
    let b = evaluate_five(&[
        c(R::Ace, S::Hearts),
        c(R::King, S::Diamonds),
        c(R::Nine, S::Clubs),
        c(R::Five, S::Spades),
        c(R::Three, S::Hearts),
    ]);
    assert_eq!(a, b);
}

#[test]
fn best_of_seven_matches_max_over_subsets() {
    let deck = full_deck();
    // A few fixed, spread-out seven card draws.
    for start in [0usize, 5, 11, 19, 30, 44] {
        let seven: Vec<Card> = (0..7).map(|k| deck[(start + k * 7) % 52]).collect();
        let best = evaluate_best(&seven).unwrap();
        let mut max = None;
        for skip_a in 0..7 {
            for skip_b in (skip_a + 1)..7 {
                let five: Vec<Card> = seven
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                let s = evaluate_five(&[five[0], five[1], five[2], five[3], five[4]]);
                if max.is_none_or(|m| s > m) {
                    max = Some(s);
                }
            }
        }
        assert_eq!(Some(best), max);
    }
}

#[test]
fn best_of_seven_finds_hidden_flush() {
    let cards = [
        c(R::Ace, S::Hearts),
        c(R::Two, S::Hearts),
        c(R::King, S::Clubs),
        c(R::King, S::Spades),
        c(R::Nine, S::Hearts),
        c(R::Six, S::Hearts),
        c(R::Four, S::Hearts),
    ];
    let s = evaluate_best(&cards).unwrap();
    assert_eq!(s.category, Category::Flush);
    assert_eq!(s.ranks, [14, 9, 6, 4, 2]);
}

#[test]
fn malformed_inputs_are_rejected() {
    let four = [
        c(R::Ace, S::Hearts),
        c(R::Two, S::Hearts),
        c(R::King, S::Clubs),
        c(R::King, S::Spades),
    ];
    assert!(matches!(
        evaluate_best(&four),
        Err(GameError::MalformedHand(_))
    ));

    let dup = [
        c(R::Ace, S::Hearts),
        c(R::Ace, S::Hearts),
        c(R::King, S::Clubs),
        c(R::King, S::Spades),
        c(R::Two, S::Spades),
        c(R::Three, S::Spades),
    ];
    assert!(matches!(
        evaluate_best(&dup),
        Err(GameError::MalformedHand(_))
    ));
}
