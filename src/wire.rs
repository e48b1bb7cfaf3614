use serde::Deserialize;
use serde_json::Value as JsonValue;

/// One page of query results as returned by the server.
///
/// The client itself only reads [`next_uri`] and [`error`]; everything else
/// is decoded for the caller and passed through untouched. All fields are
/// lenient so partial payloads from older servers still decode.
///
/// [`next_uri`]: QueryResults::next_uri
/// [`error`]: QueryResults::error
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResults {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub info_uri: Option<String>,
    #[serde(default)]
    pub partial_cancel_uri: Option<String>,
    /// Follow-up URI for the next page; absent once the query is complete.
    #[serde(default)]
    pub next_uri: Option<String>,
    #[serde(default)]
    pub columns: Option<Vec<Column>>,
    /// Row data, kept as raw JSON values.
    #[serde(default)]
    pub data: Option<Vec<Vec<JsonValue>>>,
    #[serde(default)]
    pub stats: Option<StatementStats>,
    /// Present when the server reports the query as failed.
    #[serde(default)]
    pub error: Option<QueryError>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Server-side execution statistics, passed through as-is.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementStats {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub scheduled: bool,
    #[serde(default)]
    pub nodes: u64,
    #[serde(default)]
    pub total_splits: u64,
    #[serde(default)]
    pub queued_splits: u64,
    #[serde(default)]
    pub running_splits: u64,
    #[serde(default)]
    pub completed_splits: u64,
    #[serde(default)]
    pub user_time_millis: u64,
    #[serde(default)]
    pub cpu_time_millis: u64,
    #[serde(default)]
    pub wall_time_millis: u64,
    #[serde(default)]
    pub processed_rows: u64,
    #[serde(default)]
    pub processed_bytes: u64,
}

/// Query failure payload reported by the server.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sql_state: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_location: Option<ErrorLocation>,
    /// Nested stack trace structure, kept as raw JSON.
    #[serde(default)]
    pub failure_info: Option<JsonValue>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLocation {
    pub line_number: u32,
    pub column_number: u32,
}
