//! Terminal output: error and warning lines plus the table view.

use std::io::Write;

use holdem_engine::cards::Card;
use holdem_engine::provider::Presenter;
use holdem_engine::table::TableState;

use crate::formatters::{format_board, format_seat};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Renders the board, pot, and every seat.
///
/// Hole cards are shown for `viewer` only, unless `reveal_all` is set, in which
/// case every seat still in the hand shows its cards.
pub fn render_table(table: &TableState, viewer: Option<usize>, reveal_all: bool) -> String {
    let mut s = format!(
        "Board: {}  Pot: ${}  Bet: ${}\n",
        format_board(&table.board()),
        table.pot,
        table.current_bet
    );
    for (i, p) in table.seats.iter().enumerate() {
        let reveal = viewer == Some(i) || (reveal_all && p.in_hand());
        s.push_str(&format_seat(i, p, i == table.button, reveal));
        s.push('\n');
    }
    s
}

/// Writes every engine message, and the whole table whenever cards change.
pub struct ConsolePresenter<'a> {
    out: &'a mut dyn Write,
    viewer: Option<usize>,
    seen: Option<(Vec<Card>, Vec<[Option<Card>; 2]>)>,
}

impl<'a> ConsolePresenter<'a> {
    pub fn new(out: &'a mut dyn Write, viewer: Option<usize>) -> Self {
        Self {
            out,
            viewer,
            seen: None,
        }
    }
}

impl Presenter for ConsolePresenter<'_> {
    fn present(&mut self, table: &TableState, message: &str) {
        let board = table.board();
        let holes: Vec<_> = table.seats.iter().map(|p| p.hole_cards()).collect();
        let showdown = table.pot == 0 && board.len() == 5 && table.in_hand_count() > 1;
        let changed = self
            .seen
            .as_ref()
            .is_none_or(|(b, h)| *b != board || *h != holes);

        let _ = writeln!(self.out, "{}", message);
        if changed || showdown {
            let _ = write!(self.out, "{}", render_table(table, self.viewer, showdown));
        }
        self.seen = Some((board, holes));
    }
}
