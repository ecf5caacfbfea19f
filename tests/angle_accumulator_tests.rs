use piechart_rs::core::{Slice, compute_spans};

#[test]
fn spans_accumulate_fractions_into_a_full_sweep() {
    let slices = vec![
        Slice::new("A", 0.5),
        Slice::new("B", 0.25),
        Slice::new("C", 0.25),
    ];

    let spans = compute_spans(&slices);

    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0].label, "A");
    assert_eq!(spans[0].start_angle_deg, 0.0);
    assert_eq!(spans[0].end_angle_deg, 180.0);
    assert_eq!(spans[1].label, "B");
    assert_eq!(spans[1].start_angle_deg, 180.0);
    assert_eq!(spans[1].end_angle_deg, 270.0);
    assert_eq!(spans[2].label, "C");
    assert_eq!(spans[2].start_angle_deg, 270.0);
    assert_eq!(spans[2].end_angle_deg, 360.0);
}

#[test]
fn empty_input_yields_empty_spans() {
    assert!(compute_spans(&[]).is_empty());
}

#[test]
fn partial_sum_leaves_an_incomplete_sweep() {
    let spans = compute_spans(&[Slice::new("only", 0.25)]);

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start_angle_deg, 0.0);
    assert_eq!(spans[0].end_angle_deg, 90.0);
}

#[test]
fn spans_are_contiguous_for_arbitrary_fractions() {
    let slices = vec![
        Slice::new("a", 0.1),
        Slice::new("b", 0.0),
        Slice::new("c", 0.37),
        Slice::new("d", 0.2),
    ];

    let spans = compute_spans(&slices);

    assert_eq!(spans[0].start_angle_deg, 0.0);
    for pair in spans.windows(2) {
        assert_eq!(pair[0].end_angle_deg, pair[1].start_angle_deg);
    }
}

#[test]
fn zero_and_negative_fractions_pass_through_unclamped() {
    let slices = vec![
        Slice::new("zero", 0.0),
        Slice::new("negative", -0.25),
        Slice::new("positive", 0.5),
    ];

    let spans = compute_spans(&slices);

    assert_eq!(spans[0].sweep_deg(), 0.0);
    assert_eq!(spans[1].start_angle_deg, 0.0);
    assert_eq!(spans[1].end_angle_deg, -90.0);
    assert_eq!(spans[2].start_angle_deg, -90.0);
    assert_eq!(spans[2].end_angle_deg, 90.0);
}

#[test]
fn duplicate_labels_are_permitted() {
    let spans = compute_spans(&[Slice::new("same", 0.5), Slice::new("same", 0.5)]);

    assert_eq!(spans[0].label, "same");
    assert_eq!(spans[1].label, "same");
    assert_eq!(spans[1].end_angle_deg, 360.0);
}
