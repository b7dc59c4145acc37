// Errors raised while talking to the market data provider.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("{status} returned by {endpoint}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("unexpected payload from {endpoint}: {detail}")]
    Payload {
        endpoint: &'static str,
        detail: String,
    },
}

impl From<reqwest::Error> for FetchError {
    // The request url carries the api key as a query parameter, never render it.
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.without_url())
    }
}
