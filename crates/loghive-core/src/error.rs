use thiserror::Error as ThisError;

/// Result type alias for loghive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the API or translating
/// configuration
#[derive(ThisError, Debug)]
pub enum Error {
    /// Authentication failed - invalid or missing API token
    #[error("authentication failed: invalid API token")]
    Unauthorized,

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Notifier entity value outside the closed enumeration
    #[error("unsupported notifier entity: {0}")]
    UnsupportedEntity(String),

    /// A required configuration field is empty or absent
    #[error("missing required field: {field}")]
    MissingField {
        /// Path of the offending field, e.g. `opsgenie.genie_key`
        field: String,
    },

    /// A field that must hold an absolute http/https URL does not
    #[error("{field}: {value:?} is not a valid URL: {reason}")]
    InvalidUrl {
        /// Path of the offending field
        field: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// An email recipient failed validation
    #[error("{field}: {value:?} must be a valid email address")]
    InvalidEmail {
        /// Path of the offending field
        field: String,
        /// The rejected value
        value: String,
    },

    /// A field constrained to a fixed string set holds something else
    #[error("{field}: {value:?} must be one of: {allowed}")]
    InvalidValue {
        /// Path of the offending field
        field: String,
        /// The rejected value
        value: String,
        /// Comma-separated legal values
        allowed: &'static str,
    },

    /// A numeric field is below its minimum
    #[error("{field}: {value} must be at least {min}")]
    OutOfRange {
        /// Path of the offending field
        field: String,
        /// The rejected value
        value: f64,
        /// Smallest legal value
        min: f64,
    },

    /// More than one variant block is populated on a notifier
    #[error("conflicting notifier blocks: {first} and {second} are both set")]
    ConflictingBlocks {
        /// First populated block
        first: &'static str,
        /// Second populated block
        second: &'static str,
    },

    /// The populated variant block does not match the entity discriminator
    #[error("entity is {entity} but the {block} block is set")]
    BlockMismatch {
        /// Declared entity value
        entity: String,
        /// Name of the populated block
        block: &'static str,
    },

    /// A composite resource identifier could not be parsed
    #[error("invalid resource id {id:?}, expected {expected}")]
    InvalidId {
        /// The identifier as given
        id: String,
        /// Human-readable description of the expected form
        expected: &'static str,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if the error means the resource does not exist remotely
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if this error came from the API
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
