//! End-to-end selection flow: configure, register paths, feed
//! predictions and weights, select, and report the realized outcome —
//! the sequence the predictor and executor collaborators drive in
//! production.

use feeroute_core::{EngineError, Identity, PathId, SelectionOutcome};
use feeroute_engine::{Event, RoutingEngine, SCORE_SENTINEL};

fn owner() -> Identity {
    Identity::new("governance")
}

fn executor() -> Identity {
    Identity::new("executor")
}

/// Build an engine with the oracle configured and two scored paths:
/// P1 {fee 100, risk 10, time 300, priority 5} and
/// P2 {fee 150, risk 15, time 400, priority 3}, both weighted 40/30/30.
fn two_path_engine() -> RoutingEngine {
    let mut engine = RoutingEngine::new(owner());
    engine
        .set_oracle(&owner(), Identity::new("predictor"))
        .unwrap();

    engine.register_path(&owner(), PathId(1)).unwrap();
    engine.register_path(&owner(), PathId(2)).unwrap();

    engine
        .update_prediction(&owner(), PathId(1), 100, 10, 300, 5)
        .unwrap();
    engine
        .update_prediction(&owner(), PathId(2), 150, 15, 400, 3)
        .unwrap();
    engine
        .set_path_weight(&owner(), PathId(1), 40, 30, 30)
        .unwrap();
    engine
        .set_path_weight(&owner(), PathId(2), 40, 30, 30)
        .unwrap();
    engine
}

#[test]
fn full_selection_and_reporting_cycle() {
    let mut engine = two_path_engine();
    engine.set_block_height(1000);

    // Executor asks for the cheapest path.
    let best = engine.get_best_path(&[PathId(1), PathId(2)]).unwrap();
    assert_eq!(best, PathId(1));

    // ...performs the transfer, then reports the realized outcome.
    let history_id = engine
        .log_selection(&executor(), best, 97, true)
        .unwrap();
    assert_eq!(history_id, 0);
    assert_eq!(engine.history_count(), 1);

    let entry = engine.history_entry(history_id).unwrap();
    assert_eq!(entry.selected_path, PathId(1));
    assert_eq!(entry.user, executor());
    assert_eq!(entry.recorded_at, 1000);
    assert!(entry.succeeded);
}

#[test]
fn worked_example_scores() {
    let engine = two_path_engine();

    let selection = engine.select_best_path(&[PathId(1), PathId(2)]).unwrap();
    // score(P1) = 40 + 3 + 90 + 50 = 183
    // score(P2) = 60 + 4 + 120 + 30 = 214
    assert_eq!(selection.best_path, PathId(1));
    assert_eq!(selection.best_score, 183);
}

#[test]
fn candidate_order_does_not_change_the_winner() {
    let engine = two_path_engine();
    let forward = engine.select_best_path(&[PathId(1), PathId(2)]).unwrap();
    let reverse = engine.select_best_path(&[PathId(2), PathId(1)]).unwrap();
    assert_eq!(forward, reverse);
}

#[test]
fn fresh_prediction_overwrites_and_flips_the_winner() {
    let mut engine = two_path_engine();

    // P1's fee spikes; P2 becomes the cheaper path.
    engine
        .update_prediction(&owner(), PathId(1), 900, 10, 300, 5)
        .unwrap();

    let best = engine.get_best_path(&[PathId(1), PathId(2)]).unwrap();
    assert_eq!(best, PathId(2));
}

#[test]
fn unscored_candidates_degrade_to_fallback() {
    let mut engine = RoutingEngine::new(owner());
    engine
        .set_oracle(&owner(), Identity::new("predictor"))
        .unwrap();
    engine.register_path(&owner(), PathId(3)).unwrap();
    // Weight without prediction: still excluded from scoring.
    engine
        .set_path_weight(&owner(), PathId(3), 40, 30, 30)
        .unwrap();

    let selection = engine.select_best_path(&[PathId(3)]).unwrap();
    assert_eq!(selection.best_path, engine.config().fallback_path);
    assert_eq!(selection.best_score, SCORE_SENTINEL);

    assert_eq!(
        engine.get_best_path(&[PathId(3)]),
        Err(EngineError::NoValidPaths)
    );
    assert_eq!(
        engine.evaluate_paths(&[PathId(3)]),
        Ok(SelectionOutcome::Fallback)
    );
}

#[test]
fn deactivated_path_keeps_its_stores_but_rejects_writes() {
    let mut engine = two_path_engine();
    engine.deactivate_path(&owner(), PathId(1)).unwrap();

    // Stores survive deactivation and the path still scores; only
    // writes and logging are gated on active status.
    assert!(engine.prediction(PathId(1)).is_some());
    assert!(matches!(
        engine.update_prediction(&owner(), PathId(1), 100, 10, 300, 5),
        Err(EngineError::PathNotRegistered { .. })
    ));
    assert!(matches!(
        engine.log_selection(&executor(), PathId(1), 97, true),
        Err(EngineError::PathNotRegistered { .. })
    ));
}

#[test]
fn selection_emits_no_events() {
    let mut engine = two_path_engine();
    engine.drain_events();

    engine.select_best_path(&[PathId(1), PathId(2)]).unwrap();
    engine.get_best_path(&[PathId(1), PathId(2)]).unwrap();
    engine.evaluate_paths(&[PathId(1), PathId(2)]).unwrap();

    assert!(engine.events().is_empty());
}

#[test]
fn event_stream_for_the_full_cycle() {
    let mut engine = RoutingEngine::new(owner());
    engine
        .set_oracle(&owner(), Identity::new("predictor"))
        .unwrap();
    engine.register_path(&owner(), PathId(1)).unwrap();
    engine
        .update_prediction(&owner(), PathId(1), 100, 10, 300, 5)
        .unwrap();
    engine
        .set_path_weight(&owner(), PathId(1), 40, 30, 30)
        .unwrap();
    engine.log_selection(&executor(), PathId(1), 97, true).unwrap();
    engine.deactivate_path(&owner(), PathId(1)).unwrap();

    assert_eq!(
        engine.drain_events(),
        vec![
            Event::OracleUpdated {
                oracle: Identity::new("predictor")
            },
            Event::PathRegistered { path_id: PathId(1) },
            Event::PredictionUpdated { path_id: PathId(1) },
            Event::WeightUpdated { path_id: PathId(1) },
            Event::SelectionLogged { history_id: 0 },
            Event::PathDeactivated { path_id: PathId(1) },
        ]
    );
}

#[test]
fn drained_events_serialize_for_external_observers() {
    let mut engine = RoutingEngine::new(owner());
    engine.register_path(&owner(), PathId(1)).unwrap();

    let events = engine.drain_events();
    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<Event> = serde_json::from_str(&json).unwrap();
    assert_eq!(events, back);
    assert_eq!(back, vec![Event::PathRegistered { path_id: PathId(1) }]);
}

#[test]
fn history_accumulates_across_mixed_reporters() {
    let mut engine = two_path_engine();

    engine.log_selection(&executor(), PathId(1), 97, true).unwrap();
    engine
        .log_selection(&Identity::new("other-executor"), PathId(2), 160, false)
        .unwrap();
    engine.log_selection(&executor(), PathId(1), 101, true).unwrap();

    assert_eq!(engine.history_count(), 3);
    assert_eq!(engine.history_entry(1).unwrap().selected_path, PathId(2));
    assert!(!engine.history_entry(1).unwrap().succeeded);
    assert_eq!(
        engine.history_entry(2).unwrap().user,
        executor()
    );
}
