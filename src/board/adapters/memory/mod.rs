//! In-memory adapter implementations for testing and embedding.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without a hosted backend.

mod membership;
mod store;

pub use membership::InMemoryMembershipDirectory;
pub use store::InMemoryTaskStore;
