use serde::{Deserialize, Serialize};

/// A saved live query that forwards triggered events to notifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Alert name, unique within the owning repository
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Minimum time between two firings, in milliseconds
    #[serde(default)]
    pub throttle_time_millis: i64,

    /// Whether firing is suppressed
    #[serde(default)]
    pub silenced: bool,

    /// IDs of notifiers to forward triggered events to
    #[serde(default)]
    pub notifiers: Vec<String>,

    /// Free-form labels
    #[serde(default)]
    pub labels: Vec<String>,

    /// The query the alert runs
    pub query: Query,
}

impl Alert {
    /// Returns true if the alert can currently fire
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.silenced
    }
}

/// The query an alert runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Query text
    pub query_string: String,

    /// Relative start of the search window, e.g. `24h`
    pub start: String,

    /// End of the search window; alerts always use `now`
    #[serde(default)]
    pub end: String,

    /// Whether the query runs as a live query
    #[serde(default)]
    pub is_live: bool,
}
