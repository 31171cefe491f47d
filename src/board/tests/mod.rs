//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain values, the move reconciler, and
//! the services over in-memory and mocked adapters.
