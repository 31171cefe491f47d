//! In-memory integration tests for board loading, moves, and write-back.

use super::helpers::{Services, create_task, services, workspace};
use rstest::rstest;
use taskdeck::board::{
    domain::{BoardState, DragMove, Position, PositionPolicy, TaskStatus},
    ports::TaskFilter,
    services::BoardServiceError,
};

fn names(board: &BoardState, status: TaskStatus) -> Vec<String> {
    board
        .column(status)
        .iter()
        .map(|card| card.id().to_string())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_reflects_creation_order_within_columns(services: Services) {
    let first = create_task(&services, "Landing page", "TODO").await;
    let second = create_task(&services, "Pricing page", "TODO").await;
    let shipped = create_task(&services, "Logo", "DONE").await;

    let board = services
        .board
        .load_board(&services.actor, &TaskFilter::new(workspace()))
        .await
        .expect("load board");

    assert_eq!(
        names(&board, TaskStatus::Todo),
        vec![first.id().to_string(), second.id().to_string()]
    );
    assert_eq!(names(&board, TaskStatus::Done), vec![shipped.id().to_string()]);
    assert_eq!(board.task_count(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successive_moves_round_trip_through_the_store(services: Services) {
    for name in ["Copy", "Design", "Build", "Test"] {
        create_task(&services, name, "BACKLOG").await;
    }
    let filter = TaskFilter::new(workspace());
    let mut board = services
        .board
        .load_board(&services.actor, &filter)
        .await
        .expect("load board");

    let moves = [
        DragMove::new(TaskStatus::Backlog, 3, TaskStatus::InProgress, 0),
        DragMove::within(TaskStatus::Backlog, 0, 2),
        DragMove::new(TaskStatus::Backlog, 1, TaskStatus::InProgress, 1),
        DragMove::new(TaskStatus::InProgress, 0, TaskStatus::Done, 0),
    ];
    for movement in moves {
        let (next, updates) = services
            .board
            .move_card(&board, movement)
            .expect("valid move")
            .into_parts();
        let report = services
            .board
            .persist(&services.actor, &workspace(), &updates)
            .await
            .expect("persist updates");
        assert!(report.is_complete());

        let reloaded = services
            .board
            .load_board(&services.actor, &filter)
            .await
            .expect("reload board");
        assert_eq!(reloaded, next, "{movement:?}");
        board = next;
    }

    assert_eq!(board.column(TaskStatus::Backlog).len(), 2);
    assert_eq!(board.column(TaskStatus::InProgress).len(), 1);
    assert_eq!(board.column(TaskStatus::Done).len(), 1);
    assert!(board
        .flatten()
        .iter()
        .all(|card| card.position() >= Position::new(1000)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_move_is_discarded_and_board_kept(services: Services) {
    create_task(&services, "Only card", "TODO").await;
    let board = services
        .board
        .load_board(&services.actor, &TaskFilter::new(workspace()))
        .await
        .expect("load board");

    let stale = DragMove::new(TaskStatus::Todo, 4, TaskStatus::Done, 0);
    let result = services.board.move_card(&board, stale);
    assert!(matches!(result, Err(BoardServiceError::Move(_))));

    let kept = board
        .clone()
        .reconcile_move_or_keep(stale, services.board.policy());
    assert_eq!(kept.state(), &board);
    assert!(kept.updates().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_policy_drives_renumbering(services: Services) {
    for name in ["One", "Two", "Three"] {
        create_task(&services, name, "TODO").await;
    }
    let policy = PositionPolicy::from_json(r#"{"step": 10, "ceiling": 20}"#).expect("valid policy");
    let board_service = services.board.clone().with_policy(policy);
    let board = board_service
        .load_board(&services.actor, &TaskFilter::new(workspace()))
        .await
        .expect("load board");

    let outcome = board_service
        .move_card(&board, DragMove::within(TaskStatus::Todo, 2, 0))
        .expect("valid move");

    let positions: Vec<u64> = outcome
        .state()
        .column(TaskStatus::Todo)
        .iter()
        .map(|card| card.position().value())
        .collect();
    assert_eq!(positions, vec![10, 20, 20]);
}
