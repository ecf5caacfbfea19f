use piechart_rs::api::{EngineSnapshot, PieChartEngine, PieChartEngineConfig};
use piechart_rs::core::{Slice, Viewport};
use piechart_rs::render::NullRenderer;

fn hovered_engine() -> PieChartEngine<NullRenderer> {
    let config = PieChartEngineConfig::new(Viewport::new(200, 200)).with_palette_seed(9);
    let mut engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(vec![Slice::new("A", 0.5), Slice::new("B", 0.5)]);
    engine.pointer_move(150.0, 100.0);
    engine
}

#[test]
fn snapshot_captures_derived_state() {
    let engine = hovered_engine();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(200, 200));
    assert_eq!(snapshot.slices.len(), 2);
    assert_eq!(snapshot.spans.len(), 2);
    assert_eq!(snapshot.colors.len(), 2);
    assert!(snapshot.tooltip.visible);
    assert_eq!(snapshot.hover.hit().active_index, Some(0));
}

#[test]
fn snapshot_json_round_trips() {
    let engine = hovered_engine();
    let json = engine.snapshot_json_pretty().expect("snapshot json");

    let parsed: EngineSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed, engine.snapshot());
}

#[test]
fn snapshots_are_deterministic_for_a_fixed_seed() {
    let a = hovered_engine().snapshot_json_pretty().expect("json a");
    let b = hovered_engine().snapshot_json_pretty().expect("json b");
    assert_eq!(a, b);
}
