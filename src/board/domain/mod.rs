//! Domain model for the task board.
//!
//! The board domain covers task records, the fixed set of status columns,
//! and the pure reconciler that turns drag-and-drop moves into pending
//! position updates. Nothing in here performs I/O.

mod board;
mod error;
mod ids;
mod policy;
mod status;
mod task;

pub use board::{BoardCard, BoardState, DragMove, MoveOutcome, PendingUpdate, TaskRow};
pub use error::{BoardDomainError, BoardError, ParseTaskStatusError};
pub use ids::{MemberId, ProjectId, TaskId, UserId, WorkspaceId};
pub use policy::{Position, PositionPolicy};
pub use status::TaskStatus;
pub use task::{Member, MemberRole, NewTaskData, PersistedTaskData, Task, TaskName};
