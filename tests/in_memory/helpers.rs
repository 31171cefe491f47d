//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::board::{
    adapters::memory::{InMemoryMembershipDirectory, InMemoryTaskStore},
    domain::{Member, MemberId, MemberRole, Task, UserId, WorkspaceId},
    services::{BoardService, CreateTaskRequest, TaskService},
};

/// Workspace every fixture member belongs to.
pub const WORKSPACE: &str = "acme";

/// Task service wired to in-memory adapters.
pub type MemoryTaskService =
    TaskService<InMemoryTaskStore, InMemoryMembershipDirectory, DefaultClock>;

/// Board service wired to in-memory adapters.
pub type MemoryBoardService =
    BoardService<InMemoryTaskStore, InMemoryMembershipDirectory, DefaultClock>;

/// Task and board services sharing one store and membership directory.
pub struct Services {
    pub tasks: MemoryTaskService,
    pub board: MemoryBoardService,
    pub actor: UserId,
}

/// Provides services with a single member, `ada`, in [`WORKSPACE`].
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(InMemoryTaskStore::new());
    let membership = Arc::new(InMemoryMembershipDirectory::new());
    let clock = Arc::new(DefaultClock);
    let actor = UserId::new("ada").expect("valid user id");
    membership
        .add(Member {
            id: MemberId::new("member-ada").expect("valid member id"),
            workspace_id: workspace(),
            user_id: actor.clone(),
            role: MemberRole::Admin,
        })
        .expect("membership recorded");

    Services {
        tasks: TaskService::new(Arc::clone(&store), Arc::clone(&membership), Arc::clone(&clock)),
        board: BoardService::new(store, membership, clock),
        actor,
    }
}

/// Returns the fixture workspace identifier.
pub fn workspace() -> WorkspaceId {
    WorkspaceId::new(WORKSPACE).expect("valid workspace id")
}

/// Creates a task in [`WORKSPACE`] with the given name and status.
pub async fn create_task(services: &Services, name: &str, status: &str) -> Task {
    services
        .tasks
        .create(
            &services.actor,
            CreateTaskRequest::new(
                name,
                status,
                WORKSPACE,
                "website",
                "member-ada",
                "2026-05-01T12:00:00Z",
            ),
        )
        .await
        .expect("task creation should succeed")
}
