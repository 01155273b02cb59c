//! Input parsing and validation for interactive commands.

use holdem_engine::player::Action;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(Action),
    /// `q` or `quit`
    Quit,
    /// Unparseable input, with a message for the player
    Invalid(String),
}

/// Parses a typed action (case-insensitive).
///
/// - `f`, `fold` → fold
/// - `c`, `k`, `check`, `call` → check or call, whichever applies
/// - `bet N` → open for N chips
/// - `raise N` → raise to a street total of N
/// - `a`, `allin`, `all-in` → push the whole stack
/// - `q`, `quit` → leave the table
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::Action;
///
/// assert_eq!(parse_player_action("call"), ParseResult::Action(Action::CheckOrCall));
/// assert_eq!(parse_player_action("RAISE 80"), ParseResult::Action(Action::Raise(80)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "call" | "c" | "k" => ParseResult::Action(Action::CheckOrCall),
        "allin" | "all-in" | "a" => ParseResult::Action(Action::AllIn),
        "bet" => match parse_amount(&parts, "Bet", "bet 100") {
            Ok(amount) => ParseResult::Action(Action::Bet(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "raise" => match parse_amount(&parts, "Raise", "raise 60") {
            Ok(to) => ParseResult::Action(Action::Raise(to)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <to>, allin, q",
            head
        )),
    }
}

fn parse_amount(parts: &[&str], verb: &str, example: &str) -> Result<u32, String> {
    let Some(raw) = parts.get(1) else {
        return Err(format!("{} requires an amount (e.g., '{}')", verb, example));
    };
    match raw.parse::<u32>() {
        Ok(0) => Err(format!("{} amount must be positive", verb)),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!("Invalid {} amount", verb.to_lowercase())),
    }
}

/// Checks a requested seat index against the table size.
pub fn validate_seat(seat: usize, players: usize) -> Result<(), String> {
    if seat >= players {
        return Err(format!(
            "Seat {} does not exist; choose 0..{}",
            seat,
            players.saturating_sub(1)
        ));
    }
    Ok(())
}

/// Player names must be non-empty and fit the table display.
pub fn validate_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if trimmed.chars().count() > 12 {
        return Err("Name must be at most 12 characters".to_string());
    }
    Ok(trimmed.to_string())
}
