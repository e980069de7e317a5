mod builder;

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Mutex;

use crate::engine_client::EngineClient;
use crate::transcript::{Message, Transcript};
pub use builder::SessionBuilder;

/// Error returned when the chat engine cannot be constructed.
///
/// Fatal to the session: the failure is recorded and every later
/// [`Session::submit`] is refused. Recovery is a process restart.
#[derive(Clone, Debug)]
pub struct InitializationError {
    message: String,
}

impl InitializationError {
    #[inline]
    pub(crate) fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the description of the underlying construction failure.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to initialize chatbot: {}", self.message)
    }
}

impl Error for InitializationError {}

/// Error returned by [`Session::submit`] when a request was not
/// accepted. A rejected request appends nothing to the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitError {
    /// Another request is still in flight.
    Busy,
    /// The engine failed to initialize; the session refuses input.
    EngineUnavailable,
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Busy => {
                "another request is still in flight".fmt(f)
            }
            SubmitError::EngineUnavailable => {
                "the chat engine is unavailable".fmt(f)
            }
        }
    }
}

impl Error for SubmitError {}

type EngineFactory =
    Box<dyn FnMut() -> Result<EngineClient, InitializationError> + Send>;

enum EngineSlot {
    /// The factory has not run yet; it runs on first need.
    Uninitialized(EngineFactory),
    /// The engine handle, or `None` while a request borrows it.
    Ready(Option<EngineClient>),
    /// Construction failed; the recorded error is surfaced again on
    /// every later use instead of retrying.
    Failed(InitializationError),
}

/// A chat session: the transcript and the engine handle for one user,
/// and the only authorized mutation entry points for both.
///
/// The surrounding UI layer holds the session by reference (typically
/// an `Arc<Session>`) across interaction rounds. At most one request
/// is in flight at a time; a `submit` racing an outstanding one is
/// rejected with [`SubmitError::Busy`].
pub struct Session {
    transcript: Mutex<Transcript>,
    engine: Mutex<EngineSlot>,
}

impl Session {
    /// Constructs the engine handle now instead of on first submit.
    ///
    /// The factory runs exactly once per session. Calling this again
    /// after a success is a no-op; after a failure it reports the
    /// recorded error again.
    pub fn initialize(&self) -> Result<(), InitializationError> {
        let mut slot = self.lock_engine();
        initialize_slot(&mut slot)
    }

    /// Turns one submitted question into one user message and one
    /// assistant message.
    ///
    /// Empty or whitespace-only input is silently ignored. Engine
    /// failures are absorbed into a synthetic assistant message and
    /// never propagate out of this method; the user may retry by
    /// submitting again.
    pub async fn submit(&self, question: &str) -> Result<(), SubmitError> {
        let question = question.trim();
        if question.is_empty() {
            // Accidental empty submissions from the input widget.
            trace!("ignoring empty submission");
            return Ok(());
        }

        let client = self.take_engine()?;

        // The user message lands before the engine call begins, so a
        // transcript reader only ever sees completed turns plus at
        // most one dangling user message.
        self.lock_transcript().push(Message::user(question));

        debug!("submitting question ({} chars)", question.len());
        let result = client.ask(question).await;
        self.restore_engine(client);

        let reply = match result {
            Ok(answer) => Message::assistant(answer.answer, answer.sources),
            Err(err) => {
                warn!("engine call failed: {err}");
                Message::assistant(
                    format!("Sorry, I encountered an error: {err}"),
                    Vec::new(),
                )
            }
        };
        self.lock_transcript().push(reply);
        Ok(())
    }

    /// Discards the whole transcript. Idempotent.
    ///
    /// The engine handle is kept; the next submit reuses it.
    pub fn reset(&self) {
        self.lock_transcript().clear();
    }

    /// Returns a snapshot of the transcript for rendering.
    pub fn transcript(&self) -> Vec<Message> {
        self.lock_transcript().entries().to_vec()
    }

    fn take_engine(&self) -> Result<EngineClient, SubmitError> {
        let mut slot = self.lock_engine();
        if initialize_slot(&mut slot).is_err() {
            return Err(SubmitError::EngineUnavailable);
        }
        match &mut *slot {
            EngineSlot::Ready(client) => {
                client.take().ok_or(SubmitError::Busy)
            }
            _ => Err(SubmitError::EngineUnavailable),
        }
    }

    fn restore_engine(&self, client: EngineClient) {
        *self.lock_engine() = EngineSlot::Ready(Some(client));
    }

    fn lock_engine(&self) -> std::sync::MutexGuard<'_, EngineSlot> {
        self.engine.lock().expect("engine slot lock poisoned")
    }

    fn lock_transcript(&self) -> std::sync::MutexGuard<'_, Transcript> {
        self.transcript.lock().expect("transcript lock poisoned")
    }
}

fn initialize_slot(
    slot: &mut EngineSlot,
) -> Result<(), InitializationError> {
    match slot {
        EngineSlot::Uninitialized(factory) => match factory() {
            Ok(client) => {
                debug!("chat engine initialized");
                *slot = EngineSlot::Ready(Some(client));
                Ok(())
            }
            Err(err) => {
                error!("chat engine initialization failed: {err}");
                *slot = EngineSlot::Failed(err.clone());
                Err(err)
            }
        },
        EngineSlot::Ready(_) => Ok(()),
        EngineSlot::Failed(err) => Err(err.clone()),
    }
}
