//! Then steps for board move BDD scenarios.

use super::world::BoardMoveWorld;
use rstest_bdd_macros::then;
use taskdeck::board::domain::TaskStatus;

fn column(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

#[then(r#"column "{status}" is empty"#)]
fn column_is_empty(world: &BoardMoveWorld, status: String) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    let cards = outcome.state().column(column(&status)?);
    eyre::ensure!(cards.is_empty(), "expected {status} to be empty, found {cards:?}");
    Ok(())
}

#[then(r#"column "{status}" lists "{expected}""#)]
fn column_lists(
    world: &BoardMoveWorld,
    status: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    let actual: Vec<&str> = outcome
        .state()
        .column(column(&status)?)
        .iter()
        .map(|card| card.id().as_str())
        .collect();
    let wanted: Vec<&str> = expected.split(',').map(str::trim).collect();
    eyre::ensure!(
        actual == wanted,
        "expected {status} to list {wanted:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the pending updates are "{expected}""#)]
fn pending_updates_are(world: &BoardMoveWorld, expected: String) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    let actual: Vec<String> = outcome
        .updates()
        .iter()
        .map(|update| format!("{}:{}:{}", update.id, update.status, update.position))
        .collect();
    let wanted: Vec<String> = expected
        .split(',')
        .map(|entry| entry.trim().to_owned())
        .collect();
    eyre::ensure!(
        actual == wanted,
        "expected updates {wanted:?}, found {actual:?}"
    );
    Ok(())
}

#[then("there are no pending updates")]
fn no_pending_updates(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    eyre::ensure!(
        outcome.updates().is_empty(),
        "expected no updates, found {:?}",
        outcome.updates()
    );
    Ok(())
}

#[then("the move is rejected")]
fn move_is_rejected(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(_)) => Ok(()),
        Some(Ok(outcome)) => Err(eyre::eyre!("expected rejection, got {outcome:?}")),
        None => Err(eyre::eyre!("no move has been made in this scenario")),
    }
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let before = world
        .board_before
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board snapshot"))?;
    match world.last_result.as_ref() {
        Some(Ok(outcome)) => eyre::ensure!(outcome.state() == before, "board changed"),
        Some(Err(_)) => {}
        None => return Err(eyre::eyre!("no move has been made in this scenario")),
    }
    Ok(())
}
