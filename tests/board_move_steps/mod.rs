//! Step definitions for kanban board move scenarios.

mod given;
mod then;
mod when;
pub mod world;
