use crate::errors::GameError;
use crate::player::Action;
use crate::rules::LegalActions;
use crate::table::TableState;

/// Source of decisions for one seat: a human at a terminal, an AI, or a script.
///
/// The engine only ever asks the seat whose turn it is, and only hands out a
/// shared view of the table.
pub trait ActionProvider {
    /// Chooses an action for `seat`.
    ///
    /// Returning [`GameError::Cancelled`] aborts the hand; the engine refunds
    /// every contribution before propagating it.
    fn decide(
        &mut self,
        seat: usize,
        table: &TableState,
        legal: &LegalActions,
    ) -> Result<Action, GameError>;

    /// Called when the previous decision was refused, before asking again.
    fn rejected(&mut self, _seat: usize, _err: &GameError) {}
}

/// Receives a view of the table after every state change.
pub trait Presenter {
    fn present(&mut self, table: &TableState, message: &str);
}

/// Presenter that discards everything; used by simulations and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _table: &TableState, _message: &str) {}
}

/// Provider that plays a fixed list of actions, then checks or calls.
///
/// Handy for tests and replaying recorded lines of play.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: std::collections::VecDeque<Action>,
    pub rejections: Vec<GameError>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: actions.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn decide(
        &mut self,
        _seat: usize,
        _table: &TableState,
        _legal: &LegalActions,
    ) -> Result<Action, GameError> {
        Ok(self.script.pop_front().unwrap_or(Action::CheckOrCall))
    }

    fn rejected(&mut self, _seat: usize, err: &GameError) {
        self.rejections.push(err.clone());
    }
}
