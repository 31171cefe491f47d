//! Given steps for board move BDD scenarios.

use super::world::BoardMoveWorld;
use rstest_bdd_macros::given;
use taskdeck::board::domain::{BoardCard, Position, TaskId, TaskStatus};

#[given(r#"a card "{id}" in "{status}" at position {position:u64}"#)]
fn card_in_column(
    world: &mut BoardMoveWorld,
    id: String,
    status: String,
    position: u64,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).map_err(|err| eyre::eyre!("invalid card id: {err}"))?;
    let column = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    world
        .cards
        .push(BoardCard::new(task_id, column, Position::new(position)));
    Ok(())
}
