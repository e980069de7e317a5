//! End-to-end session behavior against the scripted engine.

use ncd_assist_core::render::render_citations;
use ncd_assist_core::transcript::Role;
use ncd_assist_core::{SessionBuilder, SubmitError};
use ncd_assist_engine::{Answer, ErrorKind, SourceRef};
use ncd_assist_test_engine::ScriptedEngine;

fn scripted_conversation() -> ScriptedEngine {
    let mut engine = ScriptedEngine::default();
    engine.add_answer(Answer {
        answer: "Diabetes is [1] a chronic condition [2].".to_owned(),
        sources: vec![
            SourceRef {
                source: "WHO".to_owned(),
                content: "Diabetes is a chronic disease that occurs..."
                    .to_owned(),
            },
            SourceRef {
                source: "CDC".to_owned(),
                content: "Diabetes basics".to_owned(),
            },
        ],
    });
    engine.add_failure(ErrorKind::Other, "upstream timed out");
    engine.add_answer(Answer {
        answer: "Regular screening is recommended.".to_owned(),
        sources: Vec::new(),
    });
    engine
}

#[tokio::test]
async fn test_multi_turn_conversation() {
    let session =
        SessionBuilder::with_engine(scripted_conversation()).build();

    session.submit("  What is diabetes?  ").await.unwrap();
    session.submit("").await.unwrap();
    session.submit("Anything else?").await.unwrap();
    session.submit("How often should I get screened?").await.unwrap();

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 6);

    // Leading/trailing whitespace is trimmed before anything lands.
    assert_eq!(transcript[0].content, "What is diabetes?");

    // First turn: answer with two cited sources, rendered with
    // distinguishable markers bound to the right entries.
    let rendered = render_citations(&transcript[1], |k, source| {
        format!("[{k}:{}]", source.source)
    });
    assert_eq!(
        rendered,
        "Diabetes is [1:WHO] a chronic condition [2:CDC]."
    );

    // Second turn: the failure became a normal assistant message.
    assert_eq!(transcript[3].role, Role::Assistant);
    assert_eq!(
        transcript[3].content,
        "Sorry, I encountered an error: upstream timed out"
    );
    assert!(transcript[3].sources.is_empty());

    // Third turn: no retrieval hits, rendering is the identity.
    let rendered = render_citations(&transcript[5], |k, source| {
        format!("[{k}:{}]", source.source)
    });
    assert_eq!(rendered, transcript[5].content);
}

#[tokio::test]
async fn test_reset_between_turns() {
    let session =
        SessionBuilder::with_engine(scripted_conversation()).build();

    session.submit("What is diabetes?").await.unwrap();
    assert_eq!(session.transcript().len(), 2);

    session.reset();
    assert!(session.transcript().is_empty());

    // The engine handle survives a reset; the next turn consumes the
    // next scripted reply.
    session.submit("Still there?").await.unwrap();
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(
        transcript[1].content,
        "Sorry, I encountered an error: upstream timed out"
    );
}

#[tokio::test]
async fn test_submit_after_completion_is_accepted() {
    let session =
        SessionBuilder::with_engine(scripted_conversation()).build();

    // Back-to-back submits are fine as long as they don't overlap.
    for _ in 0..3 {
        let result = session.submit("Next question").await;
        assert_ne!(result, Err(SubmitError::Busy));
    }
    assert_eq!(session.transcript().len(), 6);
}
