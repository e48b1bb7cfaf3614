use crate::headers;

/// Per-query session context.
///
/// Each field maps to one `X-Presto-*` request header on statement
/// submission; a field that is unset or empty sends no header. The session
/// is immutable for the lifetime of a [`StatementClient`].
///
/// [`StatementClient`]: crate::StatementClient
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<String>,
    pub source: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    /// Enables verbose diagnostics in callers; not sent on the wire.
    pub debug: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Maps a session to the request headers it contributes.
///
/// Pure: no header pair is produced for an absent or empty field.
pub(crate) fn session_headers(session: &Session) -> Vec<(&'static str, &str)> {
    let mut pairs = Vec::with_capacity(4);
    if let Some(user) = non_empty(&session.user) {
        pairs.push((headers::PRESTO_USER, user));
    }
    if let Some(source) = non_empty(&session.source) {
        pairs.push((headers::PRESTO_SOURCE, source));
    }
    if let Some(catalog) = non_empty(&session.catalog) {
        pairs.push((headers::PRESTO_CATALOG, catalog));
    }
    if let Some(schema) = non_empty(&session.schema) {
        pairs.push((headers::PRESTO_SCHEMA, schema));
    }
    pairs
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
