use proptest::prelude::*;
use tilt_core::{CellState, Direction, Position};
use tilt_engine::{
    assembly, filling, gathering, mapping, merging_gathering, AxisPriority, DirectionResolver,
    Pointer, SessionConfig, ThresholdResolver, TiltMode, TiltSession,
};
use tilt_propagators::{AssemblyCell, FillCell, MapCell, MappingPolicy};
use tilt_space::Layout;
use tilt_test_utils::layouts::{assembly_sample, filling_sample, gathering_sample, mapping_sample};
use tilt_test_utils::row_layout;

// ── Gathering ─────────────────────────────────────────────────────

#[test]
fn gathering_session_settles_the_sample_board() {
    let mut s = gathering(gathering_sample()).unwrap();
    let particles = s.occupied();
    assert!(s.settle(Direction::South));
    assert_eq!(s.occupied(), particles);
    assert!(s.last_metrics().passes >= 2);
    assert!(!s.settle(Direction::South), "second tilt in the same direction is stable");
    s.reset();
    assert_eq!(s.grid(), s.pristine());
}

#[test]
fn merging_session_only_loses_particles() {
    let mut s = merging_gathering(gathering_sample()).unwrap();
    let start = s.occupied();
    for dir in Direction::ALL {
        s.settle(dir);
    }
    assert!(s.occupied() < start);
    s.reset();
    assert_eq!(s.occupied(), start);
}

#[test]
fn chain_slide_through_the_session_api() {
    let mut s = gathering(row_layout(&[1, 2, 2, 1])).unwrap();
    assert!(s.tilt(Some(Direction::West)));
    assert_eq!(s.grid().codes(), vec![vec![2, 2, 1, 1]]);
}

// ── Filling ───────────────────────────────────────────────────────

#[test]
fn filling_session_reset_drains() {
    let mut s = filling(filling_sample()).unwrap();
    assert_eq!(s.occupied(), 0);
    s.settle(Direction::South);
    s.settle(Direction::West);
    assert!(s.occupied() > 0);
    assert!(s.grid().count(|c| c == FillCell::Entry) == 1);
    s.reset();
    assert_eq!(s.occupied(), 0);
    assert_eq!(s.grid(), s.pristine());
}

// ── Mapping ───────────────────────────────────────────────────────

#[test]
fn mapping_single_pass_matches_click_by_click_play() {
    let cfg = SessionConfig::new(mapping_sample(), MappingPolicy).with_tilt_mode(TiltMode::SinglePass);
    let mut stepped = TiltSession::new(cfg).unwrap();
    let mut settled = mapping(mapping_sample()).unwrap();

    settled.settle(Direction::West);
    let mut clicks = 0;
    while stepped.tilt(Some(Direction::West)) {
        clicks += 1;
    }
    assert!(clicks > 1);
    assert_eq!(stepped.grid(), settled.grid());
    assert_eq!(stepped.gestures(), clicks + 1);
}

#[test]
fn mapping_reveals_border_cells() {
    let mut s = mapping(mapping_sample()).unwrap();
    for dir in [Direction::North, Direction::East, Direction::South, Direction::West] {
        s.settle(dir);
    }
    let revealed = s.grid().count(|c| c == MapCell::DiscoveredEmpty);
    assert!(revealed > 0);
    assert!(s.grid().count(MapCell::is_discovered) > revealed);
}

// ── Assembly ──────────────────────────────────────────────────────

#[test]
fn assembly_sample_starts_fully_open() {
    let mut s = assembly(assembly_sample()).unwrap();
    let shape = s.grid().count(AssemblyCell::in_shape);
    assert_eq!(s.candidate_count(), shape);
    assert_eq!(s.evaluate_reachability(), 0, "nothing to dock against yet");
}

#[test]
fn assembly_builds_along_the_bottom_row() {
    let mut s = assembly(assembly_sample()).unwrap();
    assert!(s.place(Position::new(0, 5)));
    assert!(s.place(Position::new(1, 5)));
    assert!(s.place(Position::new(2, 5)));
    assert!(!s.place(Position::new(5, 0)), "not adjacent to anything placed");
    assert!(!s.place(Position::new(10, 0)), "outside the shape");
    assert_eq!(s.history().len(), 3);
    assert_eq!(s.last_placed(), Some(Position::new(2, 5)));
}

#[test]
fn docking_requires_adjacency() {
    let mut s = assembly(Layout::parse("11111").unwrap()).unwrap();
    assert!(s.place(Position::new(0, 0)));
    assert_eq!(s.grid().get(Position::new(1, 0)), Some(AssemblyCell::Candidate));
    assert_eq!(s.grid().get(Position::new(2, 0)), Some(AssemblyCell::Vacant));
    assert!(!s.place(Position::new(3, 0)));
}

// ── Degenerate boards ─────────────────────────────────────────────

#[test]
fn board_without_playable_cells_is_inert() {
    let layout = || Layout::parse("000\n000").unwrap();

    let mut g = gathering(layout()).unwrap();
    let mut f = filling(layout()).unwrap();
    let mut m = mapping(layout()).unwrap();
    for dir in Direction::ALL {
        assert!(!g.settle(dir));
        assert!(!f.settle(dir));
        assert!(!m.settle(dir));
    }
    assert_eq!(g.grid(), g.pristine());
    assert_eq!(m.grid(), m.pristine());

    let mut a = assembly(layout()).unwrap();
    assert_eq!(a.candidate_count(), 0);
    assert!(!a.place(Position::new(1, 1)));
    assert!(!a.undo());
}

// ── Input ─────────────────────────────────────────────────────────

#[test]
fn resolver_drives_a_session() {
    let resolver = ThresholdResolver::new(220.0, 100.0)
        .unwrap()
        .with_priority(AxisPriority::HorizontalFirst);
    let mut s = gathering(row_layout(&[1, 1, 2])).unwrap();
    assert!(!s.tilt(resolver.resolve(Pointer::new(110.0, 50.0))));
    assert!(s.tilt(resolver.resolve(Pointer::new(5.0, 5.0))));
    assert_eq!(s.grid().to_string(), "211");
    assert_eq!(s.gestures(), 1);
}

#[test]
fn corner_clicks_follow_the_variant_priority() {
    let corner = Pointer::new(2.0, 98.0);
    let gather = ThresholdResolver::new(100.0, 100.0).unwrap();
    let fill = gather.with_priority(AxisPriority::HorizontalFirst);
    assert_eq!(gather.priority(), AxisPriority::VerticalFirst);
    assert_eq!(fill.priority(), AxisPriority::HorizontalFirst);

    let mut g = gathering(Layout::parse("11\n21").unwrap()).unwrap();
    assert!(!g.tilt(gather.resolve(corner)), "south: already on the bottom row");

    let mut f = filling(Layout::parse("11\n12").unwrap()).unwrap();
    assert!(f.tilt(fill.resolve(corner)));
    assert_eq!(f.grid().to_string(), "11\n32");
}

// ── Properties ────────────────────────────────────────────────────

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_layout(max_code: u8) -> impl Strategy<Value = Layout> {
    (1usize..8, 1usize..8).prop_flat_map(move |(w, h)| {
        prop::collection::vec(prop::collection::vec(0..=max_code, w), h)
            .prop_map(|rows| Layout::new(rows).unwrap())
    })
}

proptest! {
    #[test]
    fn settle_is_idempotent_for_every_variant(
        layout in arb_layout(2),
        dir in arb_direction(),
    ) {
        // Codes 0..=2 are valid for all three tilted variants.
        if let Ok(mut s) = gathering(layout.clone()) {
            s.settle(dir);
            prop_assert!(!s.settle(dir));
        }
        if let Ok(mut s) = filling(layout.clone()) {
            s.settle(dir);
            prop_assert!(!s.settle(dir));
        }
        if let Ok(mut s) = mapping(layout) {
            s.settle(dir);
            prop_assert!(!s.settle(dir));
        }
    }

    #[test]
    fn undo_inverts_placements(
        layout in arb_layout(2),
        picks in prop::collection::vec((0i32..8, 0i32..8), 0..12),
    ) {
        let Ok(mut s) = assembly(layout) else {
            return Ok(());
        };
        let start = s.grid().clone();
        prop_assert_eq!(s.candidate_count(), start.count(AssemblyCell::is_open));
        let seeded = start.occupied();
        let mut placed = 0;
        for (c, r) in picks {
            if s.place(Position::new(c, r)) {
                placed += 1;
            }
        }
        prop_assert_eq!(s.history().len(), placed);
        let tiles: Vec<Position> = s.history().collect();
        for p in &tiles {
            prop_assert_eq!(s.grid().get(*p), Some(AssemblyCell::Occupied));
        }
        prop_assert_eq!(s.grid().occupied(), seeded + placed);
        for _ in 0..placed {
            prop_assert!(s.undo());
        }
        prop_assert!(!s.undo());
        prop_assert_eq!(s.grid(), &start);
        prop_assert_eq!(s.history().len(), 0);
    }

    #[test]
    fn mapping_session_conserves_particles(
        layout in arb_layout(4),
        dirs in prop::collection::vec(arb_direction(), 1..8),
    ) {
        let Ok(mut s) = mapping(layout) else {
            return Ok(());
        };
        let particles = s.occupied();
        for dir in dirs {
            s.tilt(Some(dir));
            prop_assert_eq!(s.occupied(), particles);
        }
        prop_assert!(s.grid().iter().all(|(_, c)| c.code() <= 4));
    }
}
