use serde::{Deserialize, Serialize};

/// A token clients use to ship events into a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestToken {
    /// Token name, unique within the owning repository
    pub name: String,

    /// The secret token string; assigned by the server
    #[serde(default)]
    pub token: String,

    /// Parser applied to events shipped with this token
    #[serde(default)]
    pub assigned_parser: String,
}

/// Request to create an ingest token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngestTokenRequest {
    /// Token name
    pub name: String,

    /// Parser to assign, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_parser: Option<String>,
}

/// Request to change the parser assigned to an ingest token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngestTokenRequest {
    /// Parser to assign, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_parser: Option<String>,
}
