use std::collections::HashMap;

use feeroute_core::config::{
    MAX_FEE_TOLERANCE, MAX_PRIORITY, MAX_RISK_LEVEL, MAX_WEIGHT, MIN_WEIGHT,
};
use feeroute_core::{
    BlockHeight, EngineConfig, EngineError, HistoryEntry, Identity, PathId, PathStatus,
    PathWeights, Prediction, Selection, SelectionOutcome,
};

use crate::event::Event;
use crate::history::HistoryLog;
use crate::registry::PathRegistry;
use crate::scoring::{self, MAX_CANDIDATES, SCORE_SENTINEL};

/// The routing engine: a single-writer, transactional state machine
/// over the path registry, prediction and weight stores, governed
/// configuration, and the history log.
///
/// Every mutating operation validates its input in full before
/// touching any state, so a returned error guarantees nothing changed
/// and no event was emitted. The host serializes calls; there is no
/// interior locking and no partial visibility of in-progress writes.
pub struct RoutingEngine {
    owner: Identity,
    config: EngineConfig,
    registry: PathRegistry,
    predictions: HashMap<PathId, Prediction>,
    weights: HashMap<PathId, PathWeights>,
    history: HistoryLog,
    outbox: Vec<Event>,
    block_height: BlockHeight,
}

impl RoutingEngine {
    /// Create a new engine owned by `owner`, with default
    /// configuration and no registered paths.
    pub fn new(owner: Identity) -> Self {
        Self::with_config(owner, EngineConfig::default())
    }

    /// Create a new engine with an explicit starting configuration.
    pub fn with_config(owner: Identity, config: EngineConfig) -> Self {
        Self {
            owner,
            config,
            registry: PathRegistry::new(),
            predictions: HashMap::new(),
            weights: HashMap::new(),
            history: HistoryLog::new(),
            outbox: Vec::new(),
            block_height: 0,
        }
    }

    fn require_owner(&self, caller: &Identity) -> Result<(), EngineError> {
        if caller != &self.owner {
            return Err(EngineError::NotAuthorized);
        }
        Ok(())
    }

    /// Advance the logical clock. Predictions and history entries are
    /// stamped with the current value.
    pub fn set_block_height(&mut self, height: BlockHeight) {
        self.block_height = height;
    }

    // ---- ownership ----------------------------------------------------

    /// Transfer ownership to another identity. Self-transfer is
    /// rejected; the old owner loses all privileges immediately.
    pub fn transfer_ownership(
        &mut self,
        caller: &Identity,
        new_owner: Identity,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if &new_owner == caller {
            return Err(EngineError::InvalidOwner);
        }
        self.owner = new_owner.clone();
        tracing::info!(new_owner = %new_owner, "ownership transferred");
        self.outbox.push(Event::OwnershipTransferred { new_owner });
        Ok(())
    }

    // ---- configuration ------------------------------------------------

    /// Set the authorized prediction submitter.
    pub fn set_oracle(&mut self, caller: &Identity, oracle: Identity) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        self.config.oracle = Some(oracle.clone());
        tracing::debug!(oracle = %oracle, "oracle updated");
        self.outbox.push(Event::OracleUpdated { oracle });
        Ok(())
    }

    /// Set the exclusive upper bound for registrable path ids.
    ///
    /// Lowering the bound never unregisters paths already above it;
    /// they stay queryable and active, but new registrations above the
    /// bound are rejected.
    pub fn set_max_paths(&mut self, caller: &Identity, max: u32) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if max == 0 {
            return Err(EngineError::MaxPathsExceeded {
                path_id: PathId(0),
                max_paths: 0,
            });
        }
        self.config.max_paths = max;
        tracing::debug!(max, "max paths updated");
        self.outbox.push(Event::MaxPathsUpdated { max });
        Ok(())
    }

    /// Set the nominal selection fee. Pass-through for billing.
    pub fn set_selection_fee(&mut self, caller: &Identity, fee: u128) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        self.config.selection_fee = fee;
        tracing::debug!(fee, "selection fee updated");
        self.outbox.push(Event::SelectionFeeUpdated { fee });
        Ok(())
    }

    /// Set the governed fee tolerance (percent, at most 50).
    pub fn set_fee_tolerance(
        &mut self,
        caller: &Identity,
        tolerance: u64,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if tolerance > MAX_FEE_TOLERANCE {
            return Err(EngineError::InvalidTolerance {
                value: tolerance,
                max: MAX_FEE_TOLERANCE,
            });
        }
        self.config.fee_tolerance = tolerance;
        tracing::debug!(tolerance, "fee tolerance updated");
        self.outbox.push(Event::ToleranceUpdated { tolerance });
        Ok(())
    }

    /// Set the governed risk threshold (at most 100).
    pub fn set_risk_threshold(
        &mut self,
        caller: &Identity,
        threshold: u64,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if threshold > MAX_RISK_LEVEL {
            return Err(EngineError::InvalidRiskLevel {
                value: threshold,
                max: MAX_RISK_LEVEL,
            });
        }
        self.config.risk_threshold = threshold;
        tracing::debug!(threshold, "risk threshold updated");
        self.outbox.push(Event::RiskThresholdUpdated { threshold });
        Ok(())
    }

    /// Set the governed time threshold (seconds, positive).
    pub fn set_time_threshold(
        &mut self,
        caller: &Identity,
        threshold: u64,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if threshold == 0 {
            return Err(EngineError::InvalidTimeEstimate);
        }
        self.config.time_threshold = threshold;
        tracing::debug!(threshold, "time threshold updated");
        self.outbox.push(Event::TimeThresholdUpdated { threshold });
        Ok(())
    }

    /// Set the fallback path reported when no candidate qualifies.
    pub fn set_fallback_path(&mut self, caller: &Identity, path: PathId) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        self.config.fallback_path = path;
        tracing::debug!(path = %path, "fallback path updated");
        self.outbox.push(Event::FallbackUpdated { path });
        Ok(())
    }

    // ---- path registry ------------------------------------------------

    /// Register (or re-register) a path, making it Active.
    pub fn register_path(&mut self, caller: &Identity, path_id: PathId) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        self.registry.activate(path_id, self.config.max_paths)?;
        tracing::debug!(path = %path_id, "path registered");
        self.outbox.push(Event::PathRegistered { path_id });
        Ok(())
    }

    /// Deactivate an active path. Its prediction and weight entries
    /// are retained, but it is excluded from mutation and logging
    /// until re-registered.
    pub fn deactivate_path(
        &mut self,
        caller: &Identity,
        path_id: PathId,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        self.registry.deactivate(path_id)?;
        tracing::debug!(path = %path_id, "path deactivated");
        self.outbox.push(Event::PathDeactivated { path_id });
        Ok(())
    }

    // ---- prediction and weight stores ---------------------------------

    /// Store the latest prediction for an active path, stamped with
    /// the current block height. Overwrites any previous prediction.
    pub fn update_prediction(
        &mut self,
        caller: &Identity,
        path_id: PathId,
        fee: u128,
        risk_level: u64,
        time_estimate: u64,
        priority: u64,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if !self.registry.is_active(path_id) {
            return Err(EngineError::PathNotRegistered { path_id });
        }
        if fee == 0 {
            return Err(EngineError::InvalidFee);
        }
        if risk_level > MAX_RISK_LEVEL {
            return Err(EngineError::InvalidRiskLevel {
                value: risk_level,
                max: MAX_RISK_LEVEL,
            });
        }
        if time_estimate == 0 {
            return Err(EngineError::InvalidTimeEstimate);
        }
        if priority > MAX_PRIORITY {
            return Err(EngineError::InvalidPriority {
                value: priority,
                max: MAX_PRIORITY,
            });
        }
        self.predictions.insert(
            path_id,
            Prediction {
                fee,
                risk_level,
                time_estimate,
                priority,
                recorded_at: self.block_height,
            },
        );
        tracing::debug!(path = %path_id, fee, risk_level, time_estimate, priority, "prediction updated");
        self.outbox.push(Event::PredictionUpdated { path_id });
        Ok(())
    }

    /// Store scoring weights for an active path. Each weight must be
    /// in `1..=100`. Overwrites any previous weights.
    pub fn set_path_weight(
        &mut self,
        caller: &Identity,
        path_id: PathId,
        fee_weight: u64,
        risk_weight: u64,
        time_weight: u64,
    ) -> Result<(), EngineError> {
        self.require_owner(caller)?;
        if !self.registry.is_active(path_id) {
            return Err(EngineError::PathNotRegistered { path_id });
        }
        for value in [fee_weight, risk_weight, time_weight] {
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
                return Err(EngineError::InvalidWeight {
                    value,
                    min: MIN_WEIGHT,
                    max: MAX_WEIGHT,
                });
            }
        }
        self.weights.insert(
            path_id,
            PathWeights {
                fee_weight,
                risk_weight,
                time_weight,
            },
        );
        tracing::debug!(path = %path_id, fee_weight, risk_weight, time_weight, "weight updated");
        self.outbox.push(Event::WeightUpdated { path_id });
        Ok(())
    }

    // ---- scoring and selection ----------------------------------------

    /// Rank the given candidates and return the raw accumulator.
    ///
    /// Pure: no state writes, no events. Candidates missing a
    /// prediction or a weight are skipped; if nothing qualifies the
    /// accumulator still holds `{fallback_path, SCORE_SENTINEL}`.
    pub fn select_best_path(&self, path_ids: &[PathId]) -> Result<Selection, EngineError> {
        if path_ids.is_empty() || path_ids.len() > MAX_CANDIDATES {
            return Err(EngineError::InvalidPathList {
                len: path_ids.len(),
                max: MAX_CANDIDATES,
            });
        }
        if self.config.oracle.is_none() {
            return Err(EngineError::OracleNotSet);
        }
        let candidates = path_ids.iter().map(|&path_id| {
            let entry = self
                .predictions
                .get(&path_id)
                .zip(self.weights.get(&path_id));
            (path_id, entry)
        });
        Ok(scoring::rank(candidates, self.config.fallback_path))
    }

    /// Legacy selection wrapper, kept for compatibility with the
    /// reference behavior: reports `NoValidPaths` whenever the
    /// accumulator still points at the fallback path — including the
    /// known case where the fallback path is itself a candidate and
    /// wins on merit.
    pub fn get_best_path(&self, path_ids: &[PathId]) -> Result<PathId, EngineError> {
        let selection = self.select_best_path(path_ids)?;
        if selection.best_path == self.config.fallback_path {
            return Err(EngineError::NoValidPaths);
        }
        Ok(selection.best_path)
    }

    /// Tagged selection wrapper. Keys on the score sentinel rather
    /// than on path identity, so a fallback path that legitimately
    /// wins is reported as a winner.
    pub fn evaluate_paths(&self, path_ids: &[PathId]) -> Result<SelectionOutcome, EngineError> {
        let selection = self.select_best_path(path_ids)?;
        if selection.best_score == SCORE_SENTINEL {
            return Ok(SelectionOutcome::Fallback);
        }
        Ok(SelectionOutcome::Winner {
            path: selection.best_path,
            score: selection.best_score,
        })
    }

    // ---- history ------------------------------------------------------

    /// Record a realized selection outcome. Not owner-gated: any
    /// caller may report, and the entry's `user` is always the actual
    /// caller. Returns the id assigned to the new entry.
    pub fn log_selection(
        &mut self,
        caller: &Identity,
        selected_path: PathId,
        actual_fee: u128,
        succeeded: bool,
    ) -> Result<u64, EngineError> {
        if !self.registry.is_active(selected_path) {
            return Err(EngineError::PathNotRegistered {
                path_id: selected_path,
            });
        }
        if actual_fee == 0 {
            return Err(EngineError::InvalidFee);
        }
        let history_id = self.history.append(
            selected_path,
            actual_fee,
            caller.clone(),
            self.block_height,
            succeeded,
        );
        tracing::debug!(path = %selected_path, history_id, actual_fee, succeeded, "selection logged");
        self.outbox.push(Event::SelectionLogged { history_id });
        Ok(history_id)
    }

    // ---- queries ------------------------------------------------------

    /// The current owner.
    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// The current governed configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The configured oracle, if any.
    pub fn oracle(&self) -> Option<&Identity> {
        self.config.oracle.as_ref()
    }

    /// Whether a path is currently active. Never-seen ids are not
    /// active.
    pub fn is_path_active(&self, path_id: PathId) -> bool {
        self.registry.is_active(path_id)
    }

    /// The explicit three-state status of a path.
    pub fn path_status(&self, path_id: PathId) -> PathStatus {
        self.registry.status(path_id)
    }

    /// The latest prediction for a path, if any.
    pub fn prediction(&self, path_id: PathId) -> Option<&Prediction> {
        self.predictions.get(&path_id)
    }

    /// The scoring weights for a path, if any.
    pub fn path_weight(&self, path_id: PathId) -> Option<&PathWeights> {
        self.weights.get(&path_id)
    }

    /// A history entry by id.
    pub fn history_entry(&self, id: u64) -> Option<&HistoryEntry> {
        self.history.get(id)
    }

    /// Number of history entries logged so far.
    pub fn history_count(&self) -> u64 {
        self.history.count()
    }

    /// Events accumulated in the outbox, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.outbox
    }

    /// Drain the outbox, handing accumulated events to the observer.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }
}
