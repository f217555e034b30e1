use crate::types::PathId;

/// Engine error taxonomy.
///
/// Every fallible operation validates its input in full before
/// mutating anything, so each of these errors is a no-op with respect
/// to state: callers may correct the input and retry safely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("caller is not the owner")]
    NotAuthorized,

    #[error("path {path_id} is not registered or not active")]
    PathNotRegistered { path_id: PathId },

    #[error("path {path_id} exceeds the maximum path count {max_paths}")]
    MaxPathsExceeded { path_id: PathId, max_paths: u32 },

    #[error("invalid fee: must be positive")]
    InvalidFee,

    #[error("invalid risk level {value}: must be at most {max}")]
    InvalidRiskLevel { value: u64, max: u64 },

    #[error("invalid time estimate: must be positive")]
    InvalidTimeEstimate,

    #[error("invalid priority {value}: must be at most {max}")]
    InvalidPriority { value: u64, max: u64 },

    #[error("invalid weight {value}: must be in {min}..={max}")]
    InvalidWeight { value: u64, min: u64, max: u64 },

    #[error("invalid fee tolerance {value}: must be at most {max}")]
    InvalidTolerance { value: u64, max: u64 },

    #[error("invalid path list length {len}: must be 1..={max}")]
    InvalidPathList { len: usize, max: usize },

    #[error("oracle is not configured")]
    OracleNotSet,

    #[error("invalid owner: cannot transfer ownership to self")]
    InvalidOwner,

    #[error("no valid paths: selection degraded to the fallback path")]
    NoValidPaths,
}
