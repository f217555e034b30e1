//! Feeroute core — shared domain types, engine configuration, and the
//! error taxonomy used across the workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::EngineError;
pub use types::{
    BlockHeight, HistoryEntry, Identity, PathId, PathStatus, PathWeights, Prediction, Selection,
    SelectionOutcome,
};
