use serde::{Deserialize, Serialize};

/// A complete answer to one question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    /// The generated answer text.
    ///
    /// May contain inline citation markers of the form `[k]`, where `k`
    /// is a 1-based index into [`Answer::sources`].
    pub answer: String,
    /// The evidence snippets the answer is grounded in, in citation
    /// order. Empty when retrieval produced no hits.
    pub sources: Vec<SourceRef>,
}

/// One retrieved evidence snippet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    /// Label of the origin document.
    pub source: String,
    /// The excerpt text.
    pub content: String,
}
