//! Application services for task management, board orchestration, and
//! workspace membership.

mod access;
mod board;
mod error;
mod members;
mod tasks;

pub use board::{BoardService, PersistFailure, PersistReport};
pub use error::{BoardServiceError, BoardServiceResult};
pub use members::MemberService;
pub use tasks::{CreateTaskRequest, TaskService, UpdateTaskRequest};
