//! A chat engine backed by a hosted RAG question-answering service.
//!
//! The service owns the retrieval pipeline (vector index, prompt
//! chaining, the model call); this crate is the typed client side of
//! its query endpoint.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use mime::Mime;
use ncd_assist_engine::{Answer, ChatEngine, ChatEngineError, ErrorKind};
use reqwest::{Client, StatusCode, header};

pub use config::{HttpEngineConfig, HttpEngineConfigBuilder};

/// Error type for [`HttpEngine`] queries.
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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

/// Error returned when the engine cannot be constructed.
#[derive(Debug)]
pub struct InitError {
    message: String,
}

impl Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for InitError {}

/// Chat engine that queries a hosted retrieval service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpEngine {
    client: Client,
    config: Arc<HttpEngineConfig>,
}

impl HttpEngine {
    /// Creates a new `HttpEngine` with the given configuration.
    ///
    /// Fails if the configuration carries a blank API key or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: HttpEngineConfig) -> Result<Self, InitError> {
        if config.api_key.trim().is_empty() {
            return Err(InitError {
                message: "API key is empty".to_owned(),
            });
        }
        let client = Client::builder().build().map_err(|err| InitError {
            message: format!("{err}"),
        })?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}

impl ChatEngine for HttpEngine {
    type Error = Error;

    fn ask(
        &self,
        question: &str,
    ) -> impl Future<Output = Result<Answer, Self::Error>> + Send + 'static
    {
        let query = proto::create_query(question, &self.config);
        let resp_fut = self
            .client
            .post(format!("{}{}", self.config.base_url, "/v1/query"))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(&query)
            .send();

        async move {
            let resp = match resp_fut.await {
                Ok(resp) => resp,
                Err(err) => {
                    return Err(Error::new(format!("{err}"), ErrorKind::Other));
                }
            };

            if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::new(
                    "the query service is rate limited",
                    ErrorKind::RateLimitExceeded,
                ));
            }
            let resp = match resp.error_for_status() {
                Ok(resp) => resp,
                Err(err) => {
                    return Err(Error::new(format!("{err}"), ErrorKind::Other));
                }
            };

            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok());
            let is_valid_content_type = content_type
                .and_then(|v| v.parse().ok())
                .map(|m: Mime| m.subtype() == mime::JSON)
                .unwrap_or(false);
            if !is_valid_content_type {
                return Err(Error::new(
                    format!("Unexpected content type: {content_type:?}"),
                    ErrorKind::MalformedResponse,
                ));
            }

            // Here we got a successful response.
            let reply: proto::QueryReply = match resp.json().await {
                Ok(reply) => reply,
                Err(err) => {
                    return Err(Error::new(
                        format!("{err}"),
                        ErrorKind::MalformedResponse,
                    ));
                }
            };
            trace!("got a reply with {} sources", reply.sources.len());
            Ok(proto::into_answer(reply))
        }
    }
}
