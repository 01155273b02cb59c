//! Card, board, seat, and action formatters for terminal display.
//!
//! Pure functions over engine types. Suits render as Unicode symbols with an
//! ASCII fallback for Windows consoles that cannot draw them.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::player::{Action, Player, SeatStatus};

/// Whether the terminal can draw suit symbols.
///
/// Windows consoles only qualify inside Windows Terminal or VS Code; everything
/// else is assumed to handle Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Single-character rank (2-9, T, J, Q, K, A) so every card is two columns wide.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        other => other.label().to_string(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Formats a board in bracket notation: `[A♠ K♥ Q♦]`, or `[]` before the flop.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Hole cards, or `[?? ??]` when they should stay hidden.
pub fn format_hole(hole: &[Option<Card>; 2], reveal: bool) -> String {
    if hole.iter().all(Option::is_none) {
        return "[]".to_string();
    }
    let cards: Vec<String> = hole
        .iter()
        .map(|c| match c {
            Some(card) if reveal => format_card(card),
            _ => "??".to_string(),
        })
        .collect();
    format!("[{}]", cards.join(" "))
}

/// Formats an action request the way a player would type it.
///
/// ```rust
/// use holdem_engine::player::Action;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&Action::Fold), "fold");
/// assert_eq!(format_action(&Action::Raise(60)), "raise 60");
/// ```
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Fold => "fold".to_string(),
        Action::CheckOrCall => "check/call".to_string(),
        Action::Bet(amount) => format!("bet {}", amount),
        Action::Raise(to) => format!("raise {}", to),
        Action::AllIn => "all-in".to_string(),
    }
}

pub fn format_status(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Waiting => "to act",
        SeatStatus::ActedMatched => "in",
        SeatStatus::Folded => "folded",
        SeatStatus::AllIn => "all-in",
    }
}

/// One line per seat: marker, name, stack, street commitment, and cards.
pub fn format_seat(index: usize, player: &Player, button: bool, reveal: bool) -> String {
    let marker = if button { "(D)" } else { "   " };
    let status = if player.is_active() {
        format_status(player.status())
    } else {
        "out"
    };
    format!(
        "{} {}: {:<12} ${:>6}  bet ${:<5} {:<7} {}",
        marker,
        index,
        player.name(),
        player.stack(),
        player.committed(),
        status,
        format_hole(&player.hole_cards(), reveal)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Queen), "Q");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_board_with_cards() {
        let board = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Hearts),
        ];
        let formatted = format_board(&board);
        assert!(formatted.starts_with("[A"));
        assert!(formatted.contains(" T"));
        assert!(formatted.ends_with(']'));
    }

    #[test]
    fn test_hidden_hole_cards() {
        let hole = [
            Some(Card::new(Rank::Ace, Suit::Clubs)),
            Some(Card::new(Rank::King, Suit::Clubs)),
        ];
        assert_eq!(format_hole(&hole, false), "[?? ??]");
        assert!(format_hole(&hole, true).starts_with("[A"));
        assert_eq!(format_hole(&[None, None], true), "[]");
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&Action::CheckOrCall), "check/call");
        assert_eq!(format_action(&Action::Bet(100)), "bet 100");
        assert_eq!(format_action(&Action::AllIn), "all-in");
    }

    #[test]
    fn test_format_seat_marks_button() {
        let p = Player::new("Alice", 980);
        let line = format_seat(2, &p, true, false);
        assert!(line.starts_with("(D) 2: Alice"));
        assert!(line.contains("$   980"));
        assert!(line.contains("out"));
    }
}
