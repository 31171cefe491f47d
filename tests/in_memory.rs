//! In-memory adapter integration tests.
//!
//! Tests are organised into modules by functionality:
//! - `board_flow_tests`: Loading, moving, and writing back board state
//! - `task_lifecycle_tests`: Task creation, editing, listing, and removal

mod in_memory {
    pub mod helpers;

    mod board_flow_tests;
    mod task_lifecycle_tests;
}
