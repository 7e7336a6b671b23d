use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never reached the provider or the connection dropped
    /// before a response arrived.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-2xx status code.
    /// Carries the status and the requested URL for diagnostics.
    #[error("Status error: {0} ({1})")]
    Status(reqwest::StatusCode, String),
    /// The response body was not the JSON shape the provider promises.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),
    /// The provider answered successfully but violated its own contract
    /// (e.g. an empty result list).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;
