//! Adapter implementations of the task ports.
//!
//! - [`memory::InMemoryTaskRepository`]: process-local storage, the default
//! - [`generation::GeminiGenerator`] and [`generation::StubGenerator`]:
//!   implementations of the generation port
//! - `postgres::PostgresTaskRepository`: Diesel-backed storage, available
//!   with the `postgres` feature

pub mod generation;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
