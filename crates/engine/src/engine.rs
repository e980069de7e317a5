use std::error::Error;

use crate::answer::Answer;
use crate::error::ErrorKind;

/// The error type for a chat engine.
pub trait ChatEngineError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that answers natural-language questions from a retrieval
/// corpus.
///
/// Once the engine is created, it should behave like a stateless
/// object. It can still have internal state (connection pools, caches),
/// but callers should not rely on it, and the engine should be prepared
/// for being dropped anytime. Conversation history is the caller's
/// concern, not the engine's.
pub trait ChatEngine: Send + Sync {
    /// The error type that may be returned by the engine.
    type Error: ChatEngineError;

    /// Asks one question and resolves to a complete answer with its
    /// supporting sources.
    ///
    /// The call is atomic from the caller's perspective: it either
    /// yields an [`Answer`] or an error, never a partial result.
    fn ask(
        &self,
        question: &str,
    ) -> impl Future<Output = Result<Answer, Self::Error>> + Send + 'static;
}
