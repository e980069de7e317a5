use ncd_assist_engine::{Answer, ErrorKind};
use serde::{Deserialize, Serialize};

/// One step in a reply script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetReply {
    /// The engine answers the question.
    #[serde(rename = "answer")]
    Answer(Answer),
    /// The engine fails the question.
    #[serde(rename = "failure")]
    Failure(PresetFailure),
}

/// A scripted engine failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetFailure {
    /// The kind the returned error reports.
    pub kind: ErrorKind,
    /// The human-readable description of the error.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use ncd_assist_engine::SourceRef;

    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let reply = PresetReply::Answer(Answer {
            answer: "Obesity raises cardiovascular risk. [1]".to_owned(),
            sources: vec![SourceRef {
                source: "CDC".to_owned(),
                content: "Overweight and obesity overview".to_owned(),
            }],
        });

        let serialized = serde_json::to_string(&reply).unwrap();
        let deserialized: PresetReply =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(reply, deserialized);
    }
}
