use ncd_assist_engine::{Answer, SourceRef};
use serde::{Deserialize, Serialize};

use crate::HttpEngineConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct QueryReply {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Source {
    pub source: String,
    pub content: String,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct QueryRequest {
    question: String,
    collection: String,
    include_sources: bool,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_query(
    question: &str,
    config: &HttpEngineConfig,
) -> QueryRequest {
    QueryRequest {
        question: question.to_owned(),
        collection: config.collection.clone(),
        include_sources: true,
    }
}

#[inline]
pub fn into_answer(reply: QueryReply) -> Answer {
    Answer {
        answer: reply.answer,
        sources: reply
            .sources
            .into_iter()
            .map(|source| SourceRef {
                source: source.source,
                content: source.content,
            })
            .collect(),
    }
}
