//! Task board management for Taskdeck.
//!
//! This module projects a workspace's tasks into kanban columns, reconciles
//! drag-and-drop moves into the minimal set of position updates, and exposes
//! the task services the board reads from and writes back to. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the board reconciler in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
