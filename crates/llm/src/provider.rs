//! The model provider seam.

use crate::{General, Message, Response};
use anyhow::Result;

/// Something that answers chat completions.
///
/// Transport and HTTP failures are errors; an answer without usable text
/// is still a successful [`Response`].
pub trait LLM: Clone + Send + Sync {
    /// Complete `messages` with the model and parameters in `config`.
    fn send(
        &self,
        config: &General,
        messages: &[Message],
    ) -> impl Future<Output = Result<Response>> + Send;
}
