//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod generation;
pub mod repository;

pub use generation::{
    ExpectedShape, GenerationError, GenerationResult, StructuredGenerator, generate,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use generation::MockStructuredGenerator;
#[cfg(test)]
pub use repository::MockTaskRepository;
