//! Domain model for task management.
//!
//! The task domain models the task entity, its validated field values,
//! partial updates, listing filters and AI enhancement payloads while keeping
//! all infrastructure concerns outside of the domain boundary.

mod enhancement;
mod error;
mod filter;
mod ids;
mod patch;
mod task;
mod values;

pub use enhancement::EnhancementPayload;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use task::{PersistedTaskData, Task, TaskCreationParams, TaskStatus};
pub use values::{Priority, TaskNotes, TaskTitle};
