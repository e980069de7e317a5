//! An abstraction layer for retrieval-backed chat engines.
//!
//! This crate establishes an unified protocol for the assistant to ask
//! questions of a retrieval-augmented generation backend, so that the
//! session logic can seamlessly switch between backends (a hosted
//! service, a local fake for tests) without modifying the core
//! codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to. An engine owns
//! everything behind a question: retrieval, prompting, model
//! invocation, and its own timeout/retry policy. Callers treat one
//! `ask` as atomic.

#![deny(missing_docs)]

mod answer;
mod engine;
mod error;

pub use answer::*;
pub use engine::*;
pub use error::*;
