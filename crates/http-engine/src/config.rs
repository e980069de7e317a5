use std::fmt::Debug;

/// Builder for [`HttpEngineConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HttpEngineConfigBuilder {
    api_key: String,
    base_url: Option<String>,
    collection: Option<String>,
}

impl HttpEngineConfigBuilder {
    /// Creates a builder with the given API key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            collection: None,
        }
    }

    /// Sets a custom base URL for the query service.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the document collection to retrieve from.
    #[inline]
    pub fn with_collection<S: Into<String>>(mut self, collection: S) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpEngineConfig {
        HttpEngineConfig {
            api_key: self.api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
            collection: self
                .collection
                .unwrap_or_else(|| "ncd-health".to_string()),
        }
    }
}

impl Debug for HttpEngineConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEngineConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Configuration for the HTTP query engine.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HttpEngineConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) collection: String,
}

impl Debug for HttpEngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEngineConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("collection", &self.collection)
            .finish()
    }
}
