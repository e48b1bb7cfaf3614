use std::fmt;
use std::time::{Duration, Instant};

use reqwest::{header, StatusCode};
use tokio::time::sleep;

use crate::{
    session::session_headers, ClientOptions, PrestoError, QueryResults, Result, Session,
};

const USER_AGENT: &str = concat!("presto-rust/", env!("CARGO_PKG_VERSION"));

/// Formats a server base URL into the canonical submission URL.
///
/// Example: `"http://localhost:8080"` → `"http://localhost:8080/v1/statement"`
pub fn statement_url(server: &str) -> String {
    format!("{}/v1/statement", server.trim().trim_end_matches('/'))
}

/// Driver for one submitted statement.
///
/// Created by [`StatementClient::submit`], which performs the initial POST;
/// after that the client holds the latest [`QueryResults`] page and walks the
/// server-issued `nextUri` chain via [`advance`] until the chain ends, the
/// server reports a query error, or the caller [`close`]s it.
///
/// `advance` and `close` take `&mut self`, so calls on one client are
/// serialized by construction. Use one client per logical query.
///
/// [`advance`]: StatementClient::advance
/// [`close`]: StatementClient::close
pub struct StatementClient {
    http: reqwest::Client,
    session: Session,
    query: String,
    results: QueryResults,
    closed: bool,
    last_error: Option<PrestoError>,
    options: ClientOptions,
}

impl fmt::Debug for StatementClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementClient")
            .field("query", &self.query)
            .field("session", &self.session)
            .field("next_uri", &self.results.next_uri)
            .field("closed", &self.closed)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl StatementClient {
    /// Submits a statement with default [`ClientOptions`].
    ///
    /// `server` is the coordinator base URL, e.g. `http://localhost:8080`.
    /// The query text is POSTed to `/v1/statement` as the raw request body
    /// with the session's `X-Presto-*` headers attached.
    ///
    /// Fails with [`PrestoError::Submission`] on any non-200 response; no
    /// client value exists in that case.
    pub async fn submit(
        http: reqwest::Client,
        server: impl AsRef<str>,
        session: Session,
        query: impl Into<String>,
    ) -> Result<Self> {
        Self::submit_with_options(http, server, session, query, ClientOptions::default()).await
    }

    /// Submits a statement with explicit retry/timeout options.
    pub async fn submit_with_options(
        http: reqwest::Client,
        server: impl AsRef<str>,
        session: Session,
        query: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self> {
        let query = query.into();
        let url = statement_url(server.as_ref());

        let mut request = http
            .post(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .body(query.clone());
        for (name, value) in session_headers(&session) {
            request = request.header(name, value);
        }
        if let Some(timeout_ms) = options.request_timeout_ms {
            request = request.timeout(Duration::from_millis(timeout_ms));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("submitting statement to {url}");

        let response = request.send().await.map_err(PrestoError::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(PrestoError::transport)?;

        if status != StatusCode::OK {
            return Err(PrestoError::Submission {
                status: status.as_u16(),
                body,
            });
        }

        let results = decode_results(&body)?;
        Ok(Self {
            http,
            session,
            query,
            results,
            closed: false,
            last_error: None,
            options,
        })
    }

    /// Fetches the next result page.
    ///
    /// Returns `Ok(false)` without touching the network when the client is
    /// closed or the current page has no `nextUri`. Otherwise GETs the next
    /// URI, retrying 503 responses with linear backoff
    /// (`attempts * retry_backoff_ms`) until the retry deadline elapses.
    ///
    /// Any failure after a network attempt is surfaced as an error, never as
    /// `Ok(false)`; the error is also retained and visible through
    /// [`last_error`](StatementClient::last_error).
    pub async fn advance(&mut self) -> Result<bool> {
        if self.closed || !self.has_next() {
            return Ok(false);
        }
        // has_next() checked above.
        let uri = self.results.next_uri.clone().unwrap_or_default();

        let start = Instant::now();
        let retry_timeout = Duration::from_millis(self.options.retry_timeout_ms);
        let mut attempts: u32 = 0;

        loop {
            let mut request = self.http.get(&uri);
            if let Some(timeout_ms) = self.options.request_timeout_ms {
                request = request.timeout(Duration::from_millis(timeout_ms));
            }

            // Transport failures fast-fail; only 503 responses are retried.
            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => return Err(self.record(PrestoError::transport(err))),
            };
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => return Err(self.record(PrestoError::transport(err))),
            };

            if status == StatusCode::OK && !body.is_empty() {
                match decode_results(&body) {
                    Ok(results) => {
                        self.results = results;
                        return Ok(true);
                    }
                    Err(err) => return Err(self.record(err)),
                }
            }

            // A 200 with an empty body lands here on purpose: it is treated
            // as a deterministic protocol error, not a retryable condition.
            if status != StatusCode::SERVICE_UNAVAILABLE {
                return Err(self.record(PrestoError::Protocol {
                    uri,
                    status: status.as_u16(),
                    body,
                }));
            }

            attempts += 1;
            let delay = Duration::from_millis(self.options.retry_backoff_ms * u64::from(attempts));
            #[cfg(feature = "tracing")]
            tracing::debug!("server busy, retrying {uri} after {delay:?}");
            sleep(delay).await;

            if start.elapsed() >= retry_timeout || self.closed {
                return Err(self.record(PrestoError::RetryExhausted { uri }));
            }
        }
    }

    /// Closes the client, cancelling the statement server-side if it may
    /// still be running.
    ///
    /// Idempotent. The cancellation DELETE is best-effort: its response is
    /// not inspected and transport errors are swallowed. After this returns,
    /// [`advance`](StatementClient::advance) is a permanent no-op.
    pub async fn close(&mut self) {
        if self.closed {
            return;
        }

        if let Some(uri) = self.results.next_uri.clone() {
            #[cfg(feature = "tracing")]
            tracing::debug!("cancelling statement at {uri}");
            if let Err(_err) = self.http.delete(&uri).send().await {
                #[cfg(feature = "tracing")]
                tracing::debug!("cancel request failed: {_err}");
            }
        }

        self.closed = true;
    }

    /// The submitted statement text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The latest result page.
    pub fn results(&self) -> &QueryResults {
        &self.results
    }

    /// True while the current page carries a follow-up URI.
    pub fn has_next(&self) -> bool {
        self.results.next_uri.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True when the server reported the query as failed.
    pub fn query_failed(&self) -> bool {
        self.results.error.is_some()
    }

    /// True when no server error was reported, no client-side error was
    /// recorded, and the client has not been closed.
    pub fn query_succeeded(&self) -> bool {
        self.results.error.is_none() && self.last_error.is_none() && !self.closed
    }

    /// The sticky last error, if an `advance` call has failed.
    pub fn last_error(&self) -> Option<&PrestoError> {
        self.last_error.as_ref()
    }

    pub fn debug(&self) -> bool {
        self.session.debug
    }

    fn record(&mut self, err: PrestoError) -> PrestoError {
        self.last_error = Some(err.clone());
        err
    }
}

fn decode_results(body: &str) -> Result<QueryResults> {
    serde_json::from_str(body).map_err(|err| {
        PrestoError::Decode(format!("invalid query results JSON: {err}; body: {body}"))
    })
}

#[cfg(test)]
mod tests {
    use super::statement_url;

    #[test]
    fn statement_url_appends_endpoint() {
        assert_eq!(
            statement_url("http://localhost:8080"),
            "http://localhost:8080/v1/statement"
        );
    }

    #[test]
    fn statement_url_strips_trailing_slash() {
        assert_eq!(
            statement_url("http://localhost:8080/ "),
            "http://localhost:8080/v1/statement"
        );
    }
}
