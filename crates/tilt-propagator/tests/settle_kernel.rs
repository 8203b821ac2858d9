use proptest::prelude::*;
use tilt_core::{Direction, Position};
use tilt_propagator::{pass, settle, TransitionPolicy};
use tilt_space::{scan_order, Grid, Layout};
use tilt_test_utils::{column_layout, row_layout, FrozenPolicy, RecordingPolicy, SlideCell, SlidePolicy};

fn grid(layout: &Layout) -> Grid<SlideCell> {
    Grid::from_layout(layout).unwrap()
}

#[test]
fn chain_slides_as_block_in_one_settle() {
    let mut g = grid(&row_layout(&[1, 2, 2, 1]));
    let report = settle(&SlidePolicy, &mut g, Direction::West);
    assert!(report.changed());
    assert_eq!(g.to_string(), "2211");
}

#[test]
fn column_stack_slides_north() {
    let mut g = grid(&column_layout(&[1, 1, 2, 2]));
    settle(&SlidePolicy, &mut g, Direction::North);
    assert_eq!(g.codes(), vec![vec![2], vec![2], vec![1], vec![1]]);
}

#[test]
fn walls_stop_particles() {
    let mut g = grid(&Layout::parse("1102\n2111").unwrap());
    settle(&SlidePolicy, &mut g, Direction::West);
    assert_eq!(g.to_string(), "1102\n2111");
    settle(&SlidePolicy, &mut g, Direction::East);
    assert_eq!(g.to_string(), "1102\n1112");
}

#[test]
fn frozen_policy_costs_one_pass() {
    let mut g = grid(&Layout::parse("212\n121").unwrap());
    let before = g.clone();
    let report = settle(&FrozenPolicy::<SlideCell>::new(), &mut g, Direction::North);
    assert_eq!(report.passes, 1);
    assert_eq!(g, before);
}

#[test]
fn pass_probes_every_source_in_scan_order() {
    let recorder = RecordingPolicy::new(FrozenPolicy::<SlideCell>::new());
    let mut g = grid(&row_layout(&[1, 1, 1]));
    pass(&recorder, &mut g, Direction::East);
    assert_eq!(
        recorder.probes(),
        vec![
            (Position::new(1, 0), Position::new(2, 0)),
            (Position::new(0, 0), Position::new(1, 0)),
        ]
    );
}

#[test]
fn settle_probes_full_grid_each_pass() {
    let recorder = RecordingPolicy::new(SlidePolicy);
    let mut g = grid(&Layout::parse("2111\n1112").unwrap());
    let report = settle(&recorder, &mut g, Direction::East);
    let per_pass = scan_order(Direction::East, 4, 2).len();
    assert_eq!(recorder.calls(), report.passes as usize * per_pass);
    recorder.clear();
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn recording_policy_delegates_restore() {
    let recorder = RecordingPolicy::new(SlidePolicy);
    let pristine = grid(&row_layout(&[2, 1, 1]));
    let mut g = pristine.clone();
    settle(&recorder, &mut g, Direction::East);
    assert_eq!(g.to_string(), "112");
    recorder.restore(&pristine, &mut g);
    assert_eq!(g, pristine);
    assert_eq!(recorder.inner().name(), "slide");
}

fn arb_slide_layout() -> impl Strategy<Value = Layout> {
    (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(0u8..3, w), h)
            .prop_map(|rows| Layout::new(rows).unwrap())
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn settle_reaches_a_fixed_point(layout in arb_slide_layout(), dir in arb_direction()) {
        let mut g = grid(&layout);
        let particles = g.occupied();
        settle(&SlidePolicy, &mut g, dir);
        prop_assert_eq!(g.occupied(), particles);

        let rested = g.clone();
        let again = settle(&SlidePolicy, &mut g, dir);
        prop_assert!(!again.changed());
        prop_assert_eq!(again.passes, 1);
        prop_assert_eq!(g, rested);
    }

    #[test]
    fn passes_bounded_by_extent(layout in arb_slide_layout(), dir in arb_direction()) {
        let mut g = grid(&layout);
        let extent = if dir.is_vertical() { g.rows() } else { g.columns() };
        let report = settle(&SlidePolicy, &mut g, dir);
        prop_assert!(report.passes <= extent);
    }
}
