//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod membership;
pub mod store;

pub use membership::{MembershipDirectory, MembershipError, MembershipResult};
pub use store::{TaskFilter, TaskStore, TaskStoreError, TaskStoreResult};
