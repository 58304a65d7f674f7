//! Taskwise: task management with optional AI-generated task breakdowns.
//!
//! Tasks carry a title, notes, priority, due date and status. On request an
//! external language model turns a task into a structured plan (summary,
//! steps, risks, estimate), stored alongside the task with a provenance flag
//! recording whether the text is still unmodified model output.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Async trait interfaces for persistence and generation
//! - **Adapters**: In-memory, `PostgreSQL` and Gemini implementations
//!
//! # Modules
//!
//! - [`task`]: Domain, validation, ports, adapters and use-cases
//! - [`api`]: HTTP transport built on axum
//! - [`config`]: Environment-driven configuration

pub mod api;
pub mod config;
pub mod task;
