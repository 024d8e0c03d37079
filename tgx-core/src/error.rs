/// Error types for the trip planner
use thiserror::Error;

/// Main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The request never produced a response (network down, fetch rejected)
    #[error("Recommendation request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Recommendation server returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not JSON, or not an array of destinations
    #[error("Malformed recommendation response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The embedded geography table could not be parsed
    #[error("Failed to parse geography table: {0}")]
    Geography(#[from] csv::Error),

    /// A browser API was unavailable or threw
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Type alias for Results using PlannerError
pub type Result<T> = std::result::Result<T, PlannerError>;
