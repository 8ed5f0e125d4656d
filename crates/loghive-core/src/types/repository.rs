use serde::{Deserialize, Serialize};

/// A repository holding ingested events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Retention window in days; 0 disables time-based retention
    #[serde(default)]
    pub retention_days: f64,

    /// Ingest-size retention in gigabytes; 0 disables it
    #[serde(rename = "ingestRetentionSizeGB", default)]
    pub ingest_retention_size_gb: f64,

    /// Storage-size retention in gigabytes; 0 disables it
    #[serde(rename = "storageRetentionSizeGB", default)]
    pub storage_retention_size_gb: f64,
}

/// Request to create a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRepositoryRequest {
    /// Repository name
    pub name: String,
}

/// Request to replace a repository description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescriptionRequest {
    /// New description
    pub description: String,
}

/// Request to change time-based retention
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeRetentionRequest {
    /// Retention window in days
    pub retention_days: f64,

    /// Whether the server may delete data to honor the new window
    pub allow_data_deletion: bool,
}

/// Request to change ingest-size retention
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngestRetentionRequest {
    /// Ingest-size retention in gigabytes
    #[serde(rename = "ingestRetentionSizeGB")]
    pub ingest_retention_size_gb: f64,

    /// Whether the server may delete data to honor the new limit
    pub allow_data_deletion: bool,
}

/// Request to change storage-size retention
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorageRetentionRequest {
    /// Storage-size retention in gigabytes
    #[serde(rename = "storageRetentionSizeGB")]
    pub storage_retention_size_gb: f64,

    /// Whether the server may delete data to honor the new limit
    pub allow_data_deletion: bool,
}

/// Request to delete a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRepositoryRequest {
    /// Why the repository is being deleted
    pub reason: String,

    /// Whether deleting stored data is acceptable
    pub allow_data_deletion: bool,
}
