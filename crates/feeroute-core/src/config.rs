use serde::{Deserialize, Serialize};

use crate::types::{Identity, PathId};

/// Upper bound for the governed fee tolerance (percent).
pub const MAX_FEE_TOLERANCE: u64 = 50;
/// Upper bound for risk levels and the governed risk threshold.
pub const MAX_RISK_LEVEL: u64 = 100;
/// Upper bound for prediction priority.
pub const MAX_PRIORITY: u64 = 10;
/// Inclusive bounds for per-path scoring weights.
pub const MIN_WEIGHT: u64 = 1;
pub const MAX_WEIGHT: u64 = 100;

/// Governed engine configuration.
///
/// Mutated only through the engine's owner-gated setters, which
/// validate field-by-field and reject atomically. `selection_fee`,
/// `fee_tolerance`, `risk_threshold`, and `time_threshold` are
/// pass-through values read by external collaborators (billing,
/// predictor SLA monitoring); the selection algorithm itself only
/// consumes `oracle` and `fallback_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The authorized prediction submitter. `None` means no external
    /// predictor is configured yet, and selection refuses to run.
    pub oracle: Option<Identity>,
    /// Exclusive upper bound for registrable path ids. Always positive.
    pub max_paths: u32,
    /// Nominal fee charged per selection, in atomic units.
    pub selection_fee: u128,
    /// Acceptable fee deviation in percent, `0..=50`.
    pub fee_tolerance: u64,
    /// Maximum acceptable risk level, `0..=100`.
    pub risk_threshold: u64,
    /// Maximum acceptable settlement time in seconds. Always positive.
    pub time_threshold: u64,
    /// The path reported when no candidate qualifies for scoring.
    pub fallback_path: PathId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            oracle: None,
            max_paths: 10,
            selection_fee: 100,
            fee_tolerance: 10,
            risk_threshold: 50,
            time_threshold: 3600,
            fallback_path: PathId(0),
        }
    }
}
