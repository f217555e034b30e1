use serde::{Deserialize, Serialize};

use feeroute_core::{Identity, PathId};

/// Observable events, emitted exactly once per successful mutating
/// call, after the corresponding state write.
///
/// The engine records them in an explicit append-only outbox rather
/// than ambient logging; an external observer drains the outbox and
/// forwards events wherever they need to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    PathRegistered { path_id: PathId },
    PathDeactivated { path_id: PathId },
    PredictionUpdated { path_id: PathId },
    WeightUpdated { path_id: PathId },
    SelectionLogged { history_id: u64 },
    FallbackUpdated { path: PathId },
    ToleranceUpdated { tolerance: u64 },
    RiskThresholdUpdated { threshold: u64 },
    TimeThresholdUpdated { threshold: u64 },
    MaxPathsUpdated { max: u32 },
    SelectionFeeUpdated { fee: u128 },
    OracleUpdated { oracle: Identity },
    OwnershipTransferred { new_owner: Identity },
}
