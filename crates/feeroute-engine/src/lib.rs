//! Feeroute engine — the authorization-gated routing state machine.
//!
//! This crate provides:
//! - [`RoutingEngine`] — the single-writer façade enforcing ownership,
//!   validation-before-mutation, and the event outbox.
//! - [`PathRegistry`] — the `PathId → PathStatus` lifecycle map.
//! - [`scoring`] — the deterministic weighted cost score and the
//!   ranking fold with its fallback/tie-break policy.
//! - [`HistoryLog`] — the append-only, monotonically-id'd record of
//!   realized selection outcomes.
//! - [`Event`] — the observable event set, one per mutating call.

pub mod engine;
pub mod event;
pub mod history;
pub mod registry;
pub mod scoring;

// Re-exports for convenience.
pub use engine::RoutingEngine;
pub use event::Event;
pub use history::HistoryLog;
pub use registry::PathRegistry;
pub use scoring::{rank, score, MAX_CANDIDATES, SCORE_SENTINEL};
