//! A local fake chat engine for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::sync::Mutex;
use std::time::Duration;

use ncd_assist_engine::{Answer, ChatEngine, ChatEngineError, ErrorKind};
use tokio::time::sleep;

pub use preset::*;

/// Error type returned by [`ScriptedEngine`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ChatEngineError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A local fake chat engine for testing purpose.
///
/// Before asking questions, you need to setup the reply script, which
/// is how the engine should respond to each question. Replies are
/// consumed in submission order, one per `ask`. If the script runs out,
/// an error will be returned.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy
/// memory copies involved. You should only use it for testing.
#[derive(Default)]
pub struct ScriptedEngine {
    script: Mutex<VecDeque<PresetReply>>,
    delay: Option<Duration>,
}

impl ScriptedEngine {
    /// Appends a preset reply to the script.
    #[inline]
    pub fn add_reply(&mut self, reply: PresetReply) {
        self.script
            .get_mut()
            .expect("script mutex poisoned")
            .push_back(reply);
    }

    /// Appends a successful answer step to the script.
    #[inline]
    pub fn add_answer(&mut self, answer: Answer) {
        self.add_reply(PresetReply::Answer(answer));
    }

    /// Appends a failure step to the script.
    #[inline]
    pub fn add_failure<S: Into<String>>(
        &mut self,
        kind: ErrorKind,
        message: S,
    ) {
        self.add_reply(PresetReply::Failure(PresetFailure {
            kind,
            message: message.into(),
        }));
    }

    /// Sets an artificial delay applied to every `ask`, so that tests
    /// can observe a request while it is still in flight.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }
}

impl ChatEngine for ScriptedEngine {
    type Error = Error;

    fn ask(
        &self,
        _question: &str,
    ) -> impl Future<Output = Result<Answer, Self::Error>> + Send + 'static
    {
        let next = self
            .script
            .lock()
            .expect("script mutex poisoned")
            .pop_front();
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            match next {
                Some(PresetReply::Answer(answer)) => Ok(answer),
                Some(PresetReply::Failure(failure)) => Err(Error {
                    message: failure.message,
                    kind: failure.kind,
                }),
                None => Err(Error {
                    message: "no more scripted replies".to_owned(),
                    kind: ErrorKind::Other,
                }),
            }
        }
    }
}
