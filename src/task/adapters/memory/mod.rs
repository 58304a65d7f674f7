//! In-memory adapter implementations.
//!
//! The repository here backs the default service configuration and the test
//! suites. Its contents are lost when the process exits.

mod task;

pub use task::InMemoryTaskRepository;
