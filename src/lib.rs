//! Taskdeck: workspace task tracking with a kanban board.
//!
//! This crate provides the task model, the task services that sit on top of a
//! hosted store, and the board reconciler that turns drag-and-drop moves into
//! the minimal set of position writes.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, hosted
//!   backends, etc.)
//!
//! # Modules
//!
//! - [`board`]: Tasks, board projection, move reconciliation, and services

pub mod board;
