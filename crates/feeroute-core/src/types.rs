use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a candidate routing path.
///
/// Path ids are dense, owner-assigned integers in `[0, max_paths)`.
/// The external path-metadata registry uses the same id space, so ids
/// are stable across collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathId(pub u32);

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path-{}", self.0)
    }
}

/// An opaque principal: the owner, the oracle, or a history reporter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Create a new identity from an opaque id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical clock value stamped onto predictions and history entries.
/// The host advances it; the engine only reads it.
pub type BlockHeight = u64;

/// Lifecycle status of a path.
///
/// Lookups on never-seen ids yield `Unregistered`. Most of the read
/// surface only distinguishes "active" from "not active", so
/// `Unregistered` and `Inactive` are deliberately indistinguishable
/// through [`PathStatus::is_active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathStatus {
    /// Never registered.
    Unregistered,
    /// Registered and eligible for predictions, weights, and logging.
    Active,
    /// Previously active, currently disabled. May be re-registered.
    Inactive,
}

impl PathStatus {
    /// Whether the path is currently active.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered => write!(f, "Unregistered"),
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

/// The latest externally supplied estimate for one path.
///
/// Exactly one live prediction per path; each write overwrites the
/// previous one. Past outcomes live in the history log, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted fee in atomic units. Always positive.
    pub fee: u128,
    /// Risk level in `0..=100`.
    pub risk_level: u64,
    /// Estimated time to settle, in seconds. Always positive.
    pub time_estimate: u64,
    /// Priority bias in `0..=10`. Contributes `priority * 10` to the
    /// cost score, so higher-priority paths rank later.
    pub priority: u64,
    /// Block height at which this prediction was recorded.
    pub recorded_at: BlockHeight,
}

/// Governed multipliers controlling how much each prediction dimension
/// contributes to a path's score. Each weight is in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathWeights {
    pub fee_weight: u64,
    pub risk_weight: u64,
    pub time_weight: u64,
}

/// An immutable record of one realized selection outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonic id, assigned from 0 by the engine.
    pub id: u64,
    /// The path the executor routed through.
    pub selected_path: PathId,
    /// The fee actually paid, in atomic units. Always positive.
    pub actual_fee: u128,
    /// The caller that reported this outcome.
    pub user: Identity,
    /// Block height at which the outcome was logged.
    pub recorded_at: BlockHeight,
    /// Whether the transfer succeeded.
    pub succeeded: bool,
}

/// The raw accumulator produced by ranking a candidate list.
///
/// When no candidate had both a prediction and a weight, `best_path`
/// is the configured fallback and `best_score` is the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub best_path: PathId,
    pub best_score: u128,
}

/// Tagged selection result that distinguishes a scored winner from a
/// degraded fallback at the type level, removing the legacy ambiguity
/// where the fallback path winning on merit reads as "no valid paths".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// A candidate scored and won.
    Winner { path: PathId, score: u128 },
    /// No candidate qualified; the caller should use the fallback path.
    Fallback,
}
