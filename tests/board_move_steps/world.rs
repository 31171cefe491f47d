//! Shared world state for board move BDD scenarios.

use rstest::fixture;
use taskdeck::board::domain::{BoardCard, BoardError, BoardState, MoveOutcome, PositionPolicy};

/// Scenario world for board move behaviour tests.
pub struct BoardMoveWorld {
    pub policy: PositionPolicy,
    pub cards: Vec<BoardCard>,
    pub board_before: Option<BoardState>,
    pub last_result: Option<Result<MoveOutcome, BoardError>>,
}

impl BoardMoveWorld {
    /// Creates a world with an empty board and the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: PositionPolicy::default(),
            cards: Vec::new(),
            board_before: None,
            last_result: None,
        }
    }

    /// Returns the successful outcome of the last move.
    pub fn outcome(&self) -> Result<&MoveOutcome, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(err)) => Err(eyre::eyre!("move was rejected: {err}")),
            None => Err(eyre::eyre!("no move has been made in this scenario")),
        }
    }
}

impl Default for BoardMoveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardMoveWorld {
    BoardMoveWorld::default()
}
