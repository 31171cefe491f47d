//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Services, create_task, services, workspace};
use rstest::rstest;
use taskdeck::board::{
    domain::{Position, TaskStatus, UserId},
    ports::TaskFilter,
    services::{BoardServiceError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_stack_at_the_bottom_of_their_column(services: Services) {
    let positions = [
        create_task(&services, "One", "IN_REVIEW").await.position(),
        create_task(&services, "Two", "IN_REVIEW").await.position(),
        create_task(&services, "Three", "IN_REVIEW").await.position(),
    ];
    assert_eq!(
        positions,
        [Position::new(1000), Position::new(2000), Position::new(3000)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_leaves_a_gap_that_creation_does_not_fill(services: Services) {
    create_task(&services, "One", "TODO").await;
    let middle = create_task(&services, "Two", "TODO").await;
    create_task(&services, "Three", "TODO").await;

    services
        .tasks
        .delete(&services.actor, middle.id())
        .await
        .expect("delete task");
    let appended = create_task(&services, "Four", "TODO").await;

    assert_eq!(appended.position(), Position::new(4000));
    let listed = services
        .tasks
        .list(&services.actor, &TaskFilter::new(workspace()))
        .await
        .expect("list tasks");
    assert_eq!(listed.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_status_keeps_position(services: Services) {
    let task = create_task(&services, "Audit", "TODO").await;

    let edited = services
        .tasks
        .update(
            &services.actor,
            task.id(),
            UpdateTaskRequest::new()
                .with_status("DONE")
                .with_assignee("member-bob")
                .with_project("intranet")
                .with_due_date("2026-06-01T00:00:00Z"),
        )
        .await
        .expect("update task");

    assert_eq!(edited.status(), TaskStatus::Done);
    assert_eq!(edited.position(), task.position());
    assert_eq!(edited.assignee_id().as_str(), "member-bob");
    assert_eq!(edited.project_id().as_str(), "intranet");
    assert!(edited.updated_at() >= task.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outsiders_cannot_list_the_workspace(services: Services) {
    create_task(&services, "Secret", "TODO").await;
    let outsider = UserId::new("eve").expect("valid user id");

    let result = services
        .tasks
        .list(&outsider, &TaskFilter::new(workspace()))
        .await;

    assert!(matches!(
        result,
        Err(BoardServiceError::Unauthorized { .. })
    ));
}
