/// Configures retry and timeout behavior of [`StatementClient`].
///
/// [`StatementClient`]: crate::StatementClient
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Wall-clock budget for retrying 503 responses within one `advance`
    /// call, in milliseconds.
    pub retry_timeout_ms: u64,
    /// Linear backoff step in milliseconds; the nth retry sleeps
    /// `n * retry_backoff_ms`.
    pub retry_backoff_ms: u64,
    /// Per-request timeout in milliseconds. `None` leaves requests
    /// unbounded; when it fires, the failure surfaces as a transport error.
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            retry_timeout_ms: 2 * 60 * 60 * 1000,
            retry_backoff_ms: 100,
            request_timeout_ms: None,
        }
    }
}
