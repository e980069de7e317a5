//! Core session logic: transcript bookkeeping, request control, and
//! citation rendering.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod engine_client;
pub mod render;
mod session;
pub mod transcript;

pub use session::{
    InitializationError, Session, SessionBuilder, SubmitError,
};
