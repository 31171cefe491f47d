//! When steps for board move BDD scenarios.

use super::world::BoardMoveWorld;
use rstest_bdd_macros::when;
use taskdeck::board::domain::{BoardState, DragMove, TaskStatus};

fn column(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

fn index(raw: u64) -> Result<usize, eyre::Report> {
    usize::try_from(raw).map_err(|err| eyre::eyre!("index out of range: {err}"))
}

#[when(r#"the card at "{source}" index {source_index:u64} is dropped on "{destination}" index {destination_index:u64}"#)]
fn card_is_dropped(
    world: &mut BoardMoveWorld,
    source: String,
    source_index: u64,
    destination: String,
    destination_index: u64,
) -> Result<(), eyre::Report> {
    let movement = DragMove::new(
        column(&source)?,
        index(source_index)?,
        column(&destination)?,
        index(destination_index)?,
    );
    let board = BoardState::project(world.cards.clone());
    world.last_result = Some(board.reconcile_move(movement, &world.policy));
    world.board_before = Some(board);
    Ok(())
}
