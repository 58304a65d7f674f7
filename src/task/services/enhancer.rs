//! Time-bounded enhancement shared by the create and enhance workflows.

use super::prompt::render_enhancement_prompt;
use crate::task::{
    domain::{EnhancementPayload, TaskNotes, TaskTitle},
    ports::{GenerationError, GenerationResult, StructuredGenerator, generate},
};
use std::sync::Arc;
use std::time::Duration;

/// Produces serialized enhancement text for a task via the generation port.
pub struct TaskEnhancer<G>
where
    G: StructuredGenerator + ?Sized,
{
    generator: Arc<G>,
    timeout: Duration,
}

impl<G> TaskEnhancer<G>
where
    G: StructuredGenerator + ?Sized,
{
    /// Default bound on a single generation call.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates an enhancer with the default timeout.
    #[must_use]
    pub const fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the bound on a single generation call.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generates an enhancement for the given task text and returns it in
    /// its stored, serialized form.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when prompt rendering, generation, shape
    /// validation or serialization fails, or the call times out.
    pub async fn enhance(
        &self,
        title: &TaskTitle,
        notes: Option<&TaskNotes>,
    ) -> GenerationResult<String> {
        let prompt = render_enhancement_prompt(title, notes)?;
        let call = generate::<EnhancementPayload, G>(&*self.generator, &prompt);
        let payload = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| GenerationError::timed_out(self.timeout))??;
        payload.to_description().map_err(GenerationError::transport)
    }
}
