use piechart_rs::core::{ChartMetrics, Slice, Viewport, compute_spans};
use piechart_rs::interaction::HoverState;

fn metrics_200() -> ChartMetrics {
    ChartMetrics::from_viewport(Viewport::new(200, 200))
}

fn half_half_spans() -> Vec<piechart_rs::core::AngleSpan> {
    compute_spans(&[Slice::new("top", 0.5), Slice::new("bottom", 0.5)])
}

/// Window-space point at `angle_deg` (clockwise from 3 o'clock) and `dist`
/// pixels from the chart center.
fn point_at(metrics: ChartMetrics, angle_deg: f64, dist: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (
        metrics.center_x + dist * radians.cos(),
        metrics.center_y + dist * radians.sin(),
    )
}

#[test]
fn hover_inside_a_wedge_shows_the_tooltip() {
    let metrics = metrics_200();
    let spans = half_half_spans();
    let mut hover = HoverState::default();

    let (x, y) = point_at(metrics, 45.0, 50.0);
    hover.on_pointer_move(x, y, metrics, &spans);

    assert!(hover.hit().inside_bounds);
    assert_eq!(hover.hit().active_index, Some(0));
    assert!(hover.tooltip_visible());
    assert_eq!(hover.cursor(), (x, y));
}

#[test]
fn hover_outside_the_circle_hides_the_tooltip() {
    let metrics = metrics_200();
    let spans = half_half_spans();
    let mut hover = HoverState::default();

    let (x, y) = point_at(metrics, 45.0, 150.0);
    hover.on_pointer_move(x, y, metrics, &spans);

    assert!(!hover.hit().inside_bounds);
    assert!(!hover.tooltip_visible());
}

#[test]
fn hover_in_the_unassigned_gap_shows_nothing() {
    let metrics = metrics_200();
    let spans = compute_spans(&[Slice::new("only", 0.25)]);
    let mut hover = HoverState::default();

    let (x, y) = point_at(metrics, 200.0, 50.0);
    hover.on_pointer_move(x, y, metrics, &spans);

    assert!(hover.hit().inside_bounds);
    assert_eq!(hover.hit().active_index, None);
    assert!(!hover.tooltip_visible());
}

#[test]
fn pointer_leave_clears_the_hit_and_tooltip() {
    let metrics = metrics_200();
    let spans = half_half_spans();
    let mut hover = HoverState::default();

    let (x, y) = point_at(metrics, 45.0, 50.0);
    hover.on_pointer_move(x, y, metrics, &spans);
    assert!(hover.tooltip_visible());

    hover.on_pointer_leave();

    assert!(!hover.tooltip_visible());
    assert_eq!(hover.hit().active_index, None);
    assert!(!hover.hit().inside_bounds);
    // Last cursor position is retained for hosts that want it.
    assert_eq!(hover.cursor(), (x, y));
}

#[test]
fn tooltip_state_anchors_at_the_cursor() {
    let metrics = metrics_200();
    let spans = half_half_spans();
    let mut hover = HoverState::default();

    let (x, y) = point_at(metrics, 300.0, 30.0);
    hover.on_pointer_move(x, y, metrics, &spans);

    let tooltip = hover.tooltip();
    assert!(tooltip.visible);
    assert_eq!(tooltip.x, x);
    assert_eq!(tooltip.y, y);
}

#[test]
fn each_event_fully_recomputes_the_hit() {
    let metrics = metrics_200();
    let spans = half_half_spans();
    let mut hover = HoverState::default();

    let (x1, y1) = point_at(metrics, 45.0, 50.0);
    hover.on_pointer_move(x1, y1, metrics, &spans);
    assert_eq!(hover.hit().active_index, Some(0));

    let (x2, y2) = point_at(metrics, 200.0, 50.0);
    hover.on_pointer_move(x2, y2, metrics, &spans);
    assert_eq!(hover.hit().active_index, Some(1));
}
