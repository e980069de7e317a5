use std::pin::Pin;
use std::sync::Arc;

use ncd_assist_engine::{Answer, ChatEngine, ChatEngineError};
use tracing::Instrument;

type AskResult = Result<Answer, Box<dyn ChatEngineError>>;
type BoxedAskFuture = Pin<Box<dyn Future<Output = AskResult> + Send>>;
type HandlerFn = Arc<dyn Fn(String) -> BoxedAskFuture + Send + Sync>;

/// A wrapper around a chat engine that maintains an execution
/// environment for the engine and provides a type-erased interface
/// for the other modules.
#[derive(Clone)]
pub(crate) struct EngineClient {
    handler_fn: HandlerFn,
}

impl EngineClient {
    #[inline]
    pub(crate) fn new<E: ChatEngine + 'static>(engine: E) -> Self {
        // We have to erase the type `E`, since `EngineClient` doesn't
        // have a generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |question| {
            let fut = engine.ask(&question);
            Box::pin(
                async move {
                    trace!("asking: {question:?}");
                    match fut.await {
                        Ok(answer) => {
                            trace!(
                                "got an answer with {} sources",
                                answer.sources.len()
                            );
                            Ok(answer)
                        }
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err) as Box<dyn ChatEngineError>)
                        }
                    }
                }
                .instrument(trace_span!("engine client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends one question and awaits the complete answer.
    ///
    /// The call runs to completion once started; there is no mid-flight
    /// cancellation at this layer.
    #[inline]
    pub(crate) async fn ask(&self, question: &str) -> AskResult {
        (self.handler_fn)(question.to_owned()).await
    }
}

#[cfg(test)]
mod tests {
    use ncd_assist_engine::{ErrorKind, SourceRef};
    use ncd_assist_test_engine::ScriptedEngine;

    use super::*;

    #[tokio::test]
    async fn test_ask() {
        let mut engine = ScriptedEngine::default();
        engine.add_answer(Answer {
            answer: "Hypertension means high blood pressure. [1]".to_owned(),
            sources: vec![SourceRef {
                source: "WHO".to_owned(),
                content: "Hypertension overview".to_owned(),
            }],
        });

        let client = EngineClient::new(engine);
        let answer = client.ask("What is hypertension?").await.unwrap();
        assert_eq!(
            answer.answer,
            "Hypertension means high blood pressure. [1]"
        );
        assert_eq!(answer.sources[0].source, "WHO");
    }

    #[tokio::test]
    async fn test_error_handling() {
        let engine = ScriptedEngine::default();
        let client = EngineClient::new(engine);
        let err = client.ask("Hi").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
