//! Step definitions shared by the task behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
