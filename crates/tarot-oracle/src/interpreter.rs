//! The text-generation collaborator seam.

use async_trait::async_trait;

use crate::error::OracleResult;
use crate::request::InterpretationRequest;

/// Something that turns an interpretation request into reading text.
///
/// Implementations report every failure (missing credentials, transport,
/// empty output) as an error rather than substituting placeholder text, so
/// the session can offer a retry.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Generate the interpretation text for a request.
    async fn interpret(&self, request: &InterpretationRequest) -> OracleResult<String>;
}
