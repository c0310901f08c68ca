use actionbar::menu::{ActionSet, Item, MenuAction, MenuGroup};
use actionbar::overflow::{GroupKind, MeasureOptions, MeasurePass, MeasurePhase, OverflowMeasurer};

fn options() -> MeasureOptions {
    MeasureOptions {
        spacing: 8,
        max_passes: 4,
    }
}

fn set_of(labels: &[&str]) -> ActionSet {
    ActionSet::new(labels.iter().map(|label| MenuAction::new(*label)).collect(), Vec::new())
}

fn labels(items: &[Item]) -> Vec<&str> {
    items.iter().map(Item::label).collect()
}

/// Three 40-wide actions settled in a 100-wide container
fn settled_measurer() -> OverflowMeasurer {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B", "C"]), options());
    for _ in 0..3 {
        measurer.register_width(40);
    }
    measurer.layout_tick(100);
    measurer.layout_tick(100);
    measurer.layout_tick(100);
    assert!(measurer.is_settled());
    measurer
}

#[test]
fn test_phases_advance_until_two_samples_agree() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B", "C"]), options());
    assert_eq!(measurer.phase(), MeasurePhase::Uninitialized);
    assert_eq!(measurer.pending_width_reports(), 0..3);

    for _ in 0..3 {
        measurer.register_width(40);
    }
    assert!(measurer.pending_width_reports().is_empty());

    assert!(measurer.layout_tick(100));
    assert_eq!(measurer.phase(), MeasurePhase::Measuring(MeasurePass::First));
    assert_eq!(labels(&measurer.partition().showable), vec!["A"]);
    assert_eq!(labels(&measurer.partition().rolled_up), vec!["B", "C"]);

    assert!(!measurer.layout_tick(100));
    assert_eq!(measurer.phase(), MeasurePhase::Measuring(MeasurePass::Second));

    assert!(!measurer.layout_tick(100));
    assert_eq!(measurer.phase(), MeasurePhase::Settled);

    // Ticks after settling are ignored
    assert!(!measurer.layout_tick(300));
    assert_eq!(labels(&measurer.partition().showable), vec!["A"]);
}

#[test]
fn test_reflow_between_passes_is_absorbed() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B", "C"]), options());
    for _ in 0..3 {
        measurer.register_width(40);
    }

    measurer.layout_tick(100);
    // The container grew after the first draw
    assert!(measurer.layout_tick(200));
    assert_eq!(measurer.phase(), MeasurePhase::Measuring(MeasurePass::Second));
    assert_eq!(labels(&measurer.partition().showable), vec!["A", "B", "C"]);

    measurer.layout_tick(200);
    assert!(measurer.is_settled());
}

#[test]
fn test_pass_cap_forces_settlement() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B", "C"]), options());
    for _ in 0..3 {
        measurer.register_width(40);
    }

    measurer.layout_tick(100);
    measurer.layout_tick(120);
    measurer.layout_tick(130);
    assert_eq!(measurer.phase(), MeasurePhase::Measuring(MeasurePass::Second));
    measurer.layout_tick(140);
    assert_eq!(measurer.phase(), MeasurePhase::Settled);
}

#[test]
fn test_skipped_measurement_keeps_previous_partition() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B"]), options());

    // No widths yet
    assert!(!measurer.layout_tick(100));
    assert_eq!(measurer.phase(), MeasurePhase::Uninitialized);
    assert!(measurer.partition().is_empty());

    measurer.register_width(40);
    measurer.register_width(40);

    // Container not laid out yet
    assert!(!measurer.layout_tick(0));
    assert_eq!(measurer.phase(), MeasurePhase::Uninitialized);

    measurer.layout_tick(100);
    measurer.layout_tick(100);
    measurer.layout_tick(100);
    let before = measurer.partition().clone();

    assert!(!measurer.on_resize(0));
    assert_eq!(measurer.partition(), &before);
}

#[test]
fn test_single_action_shown_at_zero_width() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A"]), options());

    assert!(measurer.layout_tick(0));

    assert_eq!(labels(&measurer.partition().showable), vec!["A"]);
    assert!(measurer.partition().rolled_up.is_empty());
}

#[test]
fn test_resize_with_same_width_is_a_no_op() {
    let mut measurer = settled_measurer();
    let before = measurer.partition().clone();

    for _ in 0..3 {
        assert!(!measurer.on_resize(100));
    }

    assert_eq!(measurer.partition(), &before);
    assert!(measurer.is_settled());
}

#[test]
fn test_resize_recomputes_from_memoized_widths() {
    let mut measurer = settled_measurer();

    assert!(measurer.on_resize(200));

    assert!(measurer.is_settled());
    assert_eq!(measurer.widths().len(), 3);
    assert_eq!(labels(&measurer.partition().showable), vec!["A", "B", "C"]);

    assert!(measurer.on_resize(60));
    assert_eq!(labels(&measurer.partition().showable), vec!["A"]);
}

#[test]
fn test_same_count_item_change_reslices() {
    let mut measurer = settled_measurer();

    assert!(measurer.set_items(set_of(&["X", "Y", "Z"])));

    assert!(measurer.is_settled());
    assert_eq!(labels(&measurer.partition().showable), vec!["X"]);
    assert_eq!(labels(&measurer.partition().rolled_up), vec!["Y", "Z"]);
}

#[test]
fn test_item_count_change_restarts_measurement() {
    let mut measurer = settled_measurer();
    let before = measurer.partition().clone();

    assert!(!measurer.set_items(set_of(&["A", "B", "C", "D"])));

    assert_eq!(measurer.phase(), MeasurePhase::Uninitialized);
    assert_eq!(measurer.pending_width_reports(), 0..4);
    assert_eq!(measurer.partition(), &before);

    for _ in 0..4 {
        measurer.register_width(20);
    }
    measurer.layout_tick(100);
    assert_eq!(labels(&measurer.partition().showable), vec!["A", "B"]);
}

#[test]
fn test_rendered_groups_merge_overflow_into_last_group() {
    let set = ActionSet::new(
        vec![MenuAction::new("A"), MenuAction::new("B"), MenuAction::new("C")],
        vec![MenuGroup::new("More", vec![MenuAction::new("Delete")])],
    );
    let mut measurer = OverflowMeasurer::new(set, options());
    for width in [40, 40, 40, 30] {
        measurer.register_width(width);
    }
    measurer.layout_tick(120);

    let groups = measurer.rendered_groups("More actions");

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, GroupKind::Rollup);
    let contents: Vec<&str> = groups[0].actions.iter().map(|a| a.content.as_str()).collect();
    assert_eq!(contents, vec!["B", "C", "Delete"]);
}

#[test]
fn test_empty_set_settles_on_an_empty_partition() {
    let mut measurer = OverflowMeasurer::new(ActionSet::default(), options());
    assert!(measurer.needs_layout_pass());

    assert!(!measurer.layout_tick(100));

    assert!(measurer.is_settled());
    assert!(!measurer.needs_layout_pass());
    assert!(measurer.partition().is_empty());
    assert!(measurer.rendered_groups("More actions").is_empty());

    // Resizing an empty bar stays settled
    assert!(!measurer.on_resize(40));
    assert!(measurer.is_settled());
}

#[test]
fn test_skipped_measurement_stalls_until_something_changes() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B"]), options());
    measurer.register_width(40);
    measurer.register_width(40);

    for _ in 0..100 {
        assert!(!measurer.layout_tick(0));
    }
    assert_eq!(measurer.phase(), MeasurePhase::Uninitialized);
    assert!(measurer.is_stalled());
    assert!(!measurer.needs_layout_pass());
    assert!(measurer.partition().is_empty());

    // A resize to a usable width resumes measurement
    assert!(measurer.on_resize(100));
    assert!(!measurer.is_stalled());
    assert!(measurer.needs_layout_pass());
    assert_eq!(measurer.phase(), MeasurePhase::Measuring(MeasurePass::First));
}

#[test]
fn test_new_widths_clear_a_stall() {
    let mut measurer = OverflowMeasurer::new(set_of(&["A", "B"]), options());

    assert!(!measurer.layout_tick(100));
    assert!(measurer.is_stalled());

    measurer.register_width(40);
    measurer.register_width(40);
    assert!(measurer.needs_layout_pass());
    assert!(measurer.layout_tick(100));
}
