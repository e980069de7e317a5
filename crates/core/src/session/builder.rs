use std::fmt::Display;
use std::sync::Mutex;

use ncd_assist_engine::ChatEngine;

use super::{EngineFactory, EngineSlot, InitializationError, Session};
use crate::engine_client::EngineClient;
use crate::transcript::Transcript;

/// [`Session`] builder.
pub struct SessionBuilder {
    factory: EngineFactory,
}

impl SessionBuilder {
    /// Creates a builder with an already constructed engine.
    pub fn with_engine<E: ChatEngine + 'static>(engine: E) -> Self {
        let mut client = Some(EngineClient::new(engine));
        Self {
            factory: Box::new(move || {
                Ok(client.take().expect("engine factory called twice"))
            }),
        }
    }

    /// Creates a builder with a fallible engine constructor.
    ///
    /// Construction is deferred until the session first needs the
    /// engine (or until [`Session::initialize`] is called), and runs
    /// exactly once. A construction failure makes the session refuse
    /// input permanently.
    pub fn with_engine_factory<E, Err, F>(factory: F) -> Self
    where
        E: ChatEngine + 'static,
        Err: Display,
        F: FnOnce() -> Result<E, Err> + Send + 'static,
    {
        let mut factory = Some(factory);
        Self {
            factory: Box::new(move || {
                let factory =
                    factory.take().expect("engine factory called twice");
                factory().map(EngineClient::new).map_err(|err| {
                    InitializationError::new(err.to_string())
                })
            }),
        }
    }

    /// Builds the session with an empty transcript.
    pub fn build(self) -> Session {
        Session {
            transcript: Mutex::new(Transcript::default()),
            engine: Mutex::new(EngineSlot::Uninitialized(self.factory)),
        }
    }
}
