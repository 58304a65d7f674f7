//! Application use-cases for task management.
//!
//! Each use-case owns shared handles to the ports it needs and maps port
//! failures onto [`TaskServiceError`].

mod create;
mod delete;
mod enhance;
mod enhancer;
mod error;
mod list;
mod prompt;
mod update;

pub use create::CreateTaskUseCase;
pub use delete::DeleteTaskUseCase;
pub use enhance::EnhanceTaskUseCase;
pub use enhancer::TaskEnhancer;
pub use error::{ErrorKind, TaskServiceError, TaskServiceResult};
pub use list::ListTasksUseCase;
pub use prompt::render_enhancement_prompt;
pub use update::{EMPTY_PATCH, UpdateTaskUseCase};
