use std::sync::Arc;

/// Error type returned by this crate.
///
/// Every variant is `Clone`: errors raised during [`advance`] are also kept
/// on the client as the sticky last error, inspectable afterwards via
/// [`last_error`] without re-running the request.
///
/// A query that *the server* reports as failed is not an error here — it is
/// a normal terminal state exposed through [`query_failed`].
///
/// [`advance`]: crate::StatementClient::advance
/// [`last_error`]: crate::StatementClient::last_error
/// [`query_failed`]: crate::StatementClient::query_failed
#[derive(Clone, Debug, thiserror::Error)]
pub enum PrestoError {
    /// Non-200 response to the initial statement submission.
    #[error("failed to start query (http {status}): {body}")]
    Submission { status: u16, body: String },
    /// Network or request execution error from `reqwest`. Never retried.
    #[error("transport error: {0}")]
    Transport(Arc<reqwest::Error>),
    /// Unexpected status while fetching the next page. Covers any status
    /// other than 200 and 503, and a 200 response with an empty body.
    #[error("error fetching next page at {uri} (http {status}): {body}")]
    Protocol {
        uri: String,
        status: u16,
        body: String,
    },
    /// The server kept answering 503 until the retry deadline elapsed.
    #[error("error fetching next page at {uri}: retry deadline elapsed")]
    RetryExhausted { uri: String },
    /// Response body that does not decode as `QueryResults` JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl PrestoError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(Arc::new(err))
    }
}
