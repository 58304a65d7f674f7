//! Generation adapters implementing [`StructuredGenerator`].
//!
//! - [`GeminiGenerator`]: Google Generative Language API over HTTPS
//! - [`StubGenerator`]: canned output for offline runs and tests
//!
//! [`StructuredGenerator`]: crate::task::ports::StructuredGenerator

mod gemini;
mod stub;

pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiGenerator};
pub use stub::StubGenerator;
