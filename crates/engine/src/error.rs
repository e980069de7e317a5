use serde::{Deserialize, Serialize};

/// The kind of error that occurred.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The backend is rate limited or out of quota.
    RateLimitExceeded,
    /// The backend replied with something the engine could not decode.
    MalformedResponse,
    /// Any other errors.
    Other,
}
